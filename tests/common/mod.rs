//! Shared project fixtures.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use tracing_subscriber::EnvFilter;
use u_risk_schedule::models::{
    Dependency, DependencyType, Employee, Project, Task, ThreePointEstimate,
};

/// Routes engine events to the test output; `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn task(id: u32, name: &str, skills: &[&str], crit: u8, cost: f64, est: (f64, f64, f64)) -> Task {
    let mut t = Task::new(id, ThreePointEstimate::new(est.0, est.1, est.2))
        .with_name(name)
        .with_criticality(crit)
        .with_cost(cost);
    for s in skills {
        t = t.with_skill(*s);
    }
    t
}

/// Ten-task, five-employee release project.
///
/// Critical path is 0 -> 2 -> 6 -> 8 -> 9 with a deterministic duration of
/// 35 days.
pub fn release_project() -> Project {
    let team = vec![
        Employee::new(0)
            .with_name("Alexey Seniorov")
            .with_skill("architecture", 1.3)
            .with_skill("Python", 1.2)
            .with_skill("ML", 1.2)
            .with_skill("DevOps", 1.1)
            .with_error_probability(0.10)
            .with_cost(50.0)
            .with_load(17.0),
        Employee::new(1)
            .with_name("Maria Middlova")
            .with_skill("Python", 1.0)
            .with_skill("UI/UX", 1.1)
            .with_skill("testing", 0.9)
            .with_skill("databases", 0.8)
            .with_error_probability(0.15)
            .with_cost(35.0)
            .with_load(9.0),
        Employee::new(2)
            .with_name("Ivan Middlov")
            .with_skill("DevOps", 1.1)
            .with_skill("Python", 0.9)
            .with_skill("databases", 1.0)
            .with_skill("testing", 0.8)
            .with_error_probability(0.12)
            .with_cost(32.0)
            .with_load(12.0),
        Employee::new(3)
            .with_name("Olga Juniorova")
            .with_skill("Python", 0.7)
            .with_skill("testing", 0.8)
            .with_skill("documentation", 0.9)
            .with_error_probability(0.25)
            .with_cost(20.0)
            .with_load(7.0),
        Employee::new(4)
            .with_name("Dmitry Juniorov")
            .with_skill("UI/UX", 0.7)
            .with_skill("documentation", 1.0)
            .with_skill("Python", 0.6)
            .with_error_probability(0.30)
            .with_cost(18.0)
            .with_load(7.0),
    ];

    let tasks = vec![
        task(0, "System Architecture Design", &["architecture"], 5, 1000.0, (3.0, 5.0, 8.0)).with_assignee(0),
        task(1, "Technical Documentation", &["documentation"], 1, 200.0, (2.0, 3.0, 5.0)).with_assignee(4),
        task(2, "ML Model Development", &["Python", "ML"], 4, 800.0, (7.0, 10.0, 14.0)).with_assignee(0),
        task(3, "UI/UX Design Implementation", &["UI/UX", "Python"], 3, 600.0, (5.0, 7.0, 10.0))
            .with_assignee(4)
            .with_assignee(1),
        task(4, "DevOps Infrastructure Setup", &["DevOps", "Python"], 4, 700.0, (4.0, 6.0, 9.0)).with_assignee(2),
        task(5, "External API Integration", &["Python", "databases"], 3, 500.0, (3.0, 4.0, 6.0)).with_assignee(1),
        task(6, "System Testing Suite", &["testing", "Python"], 4, 400.0, (4.0, 5.0, 7.0))
            .with_assignee(3)
            .with_assignee(1),
        task(7, "Performance Optimization", &["architecture", "Python"], 3, 600.0, (3.0, 4.0, 6.0)).with_assignee(0),
        task(8, "Production Deployment", &["DevOps", "testing"], 5, 900.0, (2.0, 3.0, 5.0))
            .with_assignee(2)
            .with_assignee(3),
        task(9, "Final Build and Release", &["architecture", "DevOps"], 5, 1000.0, (3.0, 4.0, 6.0))
            .with_assignee(0)
            .with_assignee(2),
    ];

    let fs = |from, to| Dependency::finish_to_start(from, to);
    let dependencies = vec![
        fs(0, 2),
        fs(0, 3),
        fs(0, 4),
        fs(0, 5),
        fs(0, 6),
        fs(0, 7),
        fs(0, 8),
        fs(0, 9),
        fs(2, 6).with_lag(2.0),
        Dependency::new(3, 6, DependencyType::StartToStart).with_lag(1.0),
        fs(4, 8).with_lag(1.0),
        fs(6, 8),
        fs(8, 9),
        Dependency::new(0, 1, DependencyType::StartToStart).optional(),
    ];

    let mut project = Project::new(date(2026, 1, 3));
    for e in team {
        project = project.with_employee(e);
    }
    for t in tasks {
        project = project.with_task(t);
    }
    for d in dependencies {
        project = project.with_dependency(d);
    }
    project
}

/// Three-task chain with two employees. Every task is critical; the
/// deterministic duration is 11 days.
pub fn simple_project() -> Project {
    Project::new(date(2026, 1, 1))
        .with_employee(
            Employee::new(0)
                .with_name("Alice")
                .with_skill("Python", 1.0)
                .with_skill("testing", 0.9)
                .with_load(5.0),
        )
        .with_employee(
            Employee::new(1)
                .with_name("Bob")
                .with_skill("DevOps", 1.1)
                .with_skill("Python", 0.8)
                .with_load(6.0),
        )
        .with_task(task(0, "Design", &["Python"], 3, 500.0, (2.0, 3.0, 5.0)).with_assignee(0))
        .with_task(task(1, "Implement", &["Python", "DevOps"], 4, 800.0, (4.0, 5.0, 7.0)).with_assignee(1))
        .with_task(task(2, "Test", &["testing"], 2, 300.0, (1.0, 2.0, 3.0)).with_assignee(0))
        .with_dependency(Dependency::finish_to_start(0, 1))
        .with_dependency(Dependency::finish_to_start(1, 2).with_lag(1.0))
}

/// Two-task chain A -> B without assignees: durations 3 and 5 days.
pub fn two_task_chain() -> Project {
    Project::new(date(2026, 1, 1))
        .with_task(Task::new(0, ThreePointEstimate::new(2.0, 3.0, 4.0)).with_name("A"))
        .with_task(Task::new(1, ThreePointEstimate::new(4.0, 5.0, 6.0)).with_name("B"))
        .with_dependency(Dependency::finish_to_start(0, 1))
}
