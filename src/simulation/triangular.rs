//! Triangular distribution sampling.
//!
//! # Algorithm
//!
//! Inverse-CDF: draw `u ~ U(0, 1)` and let `c = (mode - low) / (high - low)`.
//! - `u < c`: `low + sqrt(u * (high - low) * (mode - low))`
//! - otherwise: `high - sqrt((1 - u) * (high - low) * (high - mode))`
//!
//! # Reference
//! Johnson & Kotz (1999), "Non-Uniform Random Variate Generation Using
//! the Triangular Distribution"

use rand::Rng;

/// Draws a sample from the triangular distribution `(low, mode, high)`.
///
/// The result always lies in `[low, high]`. A degenerate range
/// (`high <= low`) returns `low`. A mode outside the range is clamped to it;
/// a NaN mode is treated as `low`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_risk_schedule::simulation::random_triangular;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let x = random_triangular(2.0, 3.0, 5.0, &mut rng);
/// assert!((2.0..=5.0).contains(&x));
/// assert_eq!(random_triangular(4.0, 4.0, 4.0, &mut rng), 4.0);
/// ```
pub fn random_triangular<R: Rng + ?Sized>(low: f64, mode: f64, high: f64, rng: &mut R) -> f64 {
    if high.is_nan() || low.is_nan() || high <= low {
        return low;
    }
    let mode = if mode.is_nan() { low } else { mode.clamp(low, high) };
    let width = high - low;
    let u: f64 = rng.random();
    let c = (mode - low) / width;

    let sample = if u < c {
        low + (u * width * (mode - low)).sqrt()
    } else {
        high - ((1.0 - u) * width * (high - mode)).sqrt()
    };
    sample.clamp(low, high)
}
