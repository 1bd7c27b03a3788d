//! Summary statistics over simulated project durations.
//!
//! The engine returns raw per-trial durations; this module derives the
//! figures callers usually report from them.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Mean | arithmetic mean of durations |
//! | Std-dev | population standard deviation |
//! | P*k* | nearest-rank percentile |
//! | Deadline success | fraction of durations <= deadline |
//! | Deadline miss | 1 - deadline success |

use serde::{Deserialize, Serialize};

/// Distribution summary of simulated durations (days).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Number of samples.
    pub count: usize,
    /// Mean duration.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Shortest duration.
    pub min: f64,
    /// Longest duration.
    pub max: f64,
    sorted: Vec<f64>,
}

impl SimulationSummary {
    /// Summarizes samples. Returns `None` for an empty list.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        Some(Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[count - 1],
            sorted,
        })
    }

    /// Nearest-rank percentile, `p` in `[0, 100]` (clamped).
    pub fn percentile(&self, p: f64) -> f64 {
        let p = p.clamp(0.0, 100.0);
        let rank = ((p / 100.0) * self.count as f64).ceil() as usize;
        self.sorted[rank.clamp(1, self.count) - 1]
    }

    /// Median duration.
    pub fn p50(&self) -> f64 {
        self.percentile(50.0)
    }

    /// 85th percentile duration.
    pub fn p85(&self) -> f64 {
        self.percentile(85.0)
    }

    /// 95th percentile duration.
    pub fn p95(&self) -> f64 {
        self.percentile(95.0)
    }

    /// Fraction of trials finishing within `deadline_days`.
    pub fn deadline_success_probability(&self, deadline_days: f64) -> f64 {
        let within = self.sorted.partition_point(|&d| d <= deadline_days);
        within as f64 / self.count as f64
    }

    /// Fraction of trials overrunning `deadline_days`.
    pub fn deadline_miss_probability(&self, deadline_days: f64) -> f64 {
        1.0 - self.deadline_success_probability(deadline_days)
    }

    /// Mean simulated duration minus a deterministic duration.
    pub fn mean_delay_vs(&self, deterministic_days: f64) -> f64 {
        self.mean - deterministic_days
    }

    /// Sorted samples.
    pub fn samples(&self) -> &[f64] {
        &self.sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_stats() {
        let s = SimulationSummary::from_samples(&[10.0, 12.0, 11.0, 13.0]).unwrap();
        assert_eq!(s.count, 4);
        assert!((s.mean - 11.5).abs() < 1e-10);
        assert!((s.min - 10.0).abs() < 1e-10);
        assert!((s.max - 13.0).abs() < 1e-10);
        // Variance = (2.25 + 0.25 + 0.25 + 2.25) / 4 = 1.25
        assert!((s.std_dev - 1.25_f64.sqrt()).abs() < 1e-10);
        assert_eq!(s.samples(), &[10.0, 11.0, 12.0, 13.0]);
    }

    #[test]
    fn test_percentiles() {
        let samples: Vec<f64> = (1..=20).map(f64::from).collect();
        let s = SimulationSummary::from_samples(&samples).unwrap();
        assert!((s.p50() - 10.0).abs() < 1e-10);
        assert!((s.p85() - 17.0).abs() < 1e-10);
        assert!((s.p95() - 19.0).abs() < 1e-10);
        assert!((s.percentile(0.0) - 1.0).abs() < 1e-10);
        assert!((s.percentile(100.0) - 20.0).abs() < 1e-10);
        assert!((s.percentile(150.0) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_deadline_probability() {
        let s = SimulationSummary::from_samples(&[28.0, 30.0, 31.0, 35.0]).unwrap();
        assert!((s.deadline_success_probability(30.0) - 0.5).abs() < 1e-10);
        assert!((s.deadline_miss_probability(30.0) - 0.5).abs() < 1e-10);
        assert!((s.deadline_success_probability(27.0) - 0.0).abs() < 1e-10);
        assert!((s.deadline_success_probability(40.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_delay() {
        let s = SimulationSummary::from_samples(&[36.0, 38.0]).unwrap();
        assert!((s.mean_delay_vs(35.0) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty() {
        assert!(SimulationSummary::from_samples(&[]).is_none());
    }

    #[test]
    fn test_single_sample() {
        let s = SimulationSummary::from_samples(&[7.0]).unwrap();
        assert!((s.std_dev - 0.0).abs() < 1e-10);
        assert!((s.p95() - 7.0).abs() < 1e-10);
    }
}
