//! Multi-core job scheduling simulator.
//!
//! Simulates how independently-arriving jobs are assigned to a fixed pool
//! of identical cores under First-Come-First-Served or non-preemptive
//! Shortest-Job-First, and reports each job's start, end, and turnaround.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Core`, `QueueSnapshot`
//! - **`dispatching`**: Dispatching rules (`Fifo`, `Spt`) and the `RuleEngine`
//! - **`scheduler`**: `schedule()`, `QueueRecorder`, `ScheduleOutcome`, `ScheduleKpi`
//! - **`validation`**: Input integrity checks (duplicate IDs, bad times, core count)
//! - **`workbench`**: Stateful facade that reschedules on every mutation
//! - **`scenario`**: Demo and randomized job sets
//!
//! # Example
//!
//! ```
//! use core_sched::models::Job;
//! use core_sched::scheduler::{schedule, Algorithm, ScheduleKpi, SchedulerConfig};
//!
//! let jobs = vec![Job::new("J1", 0, 30), Job::new("J2", 0, 10), Job::new("J3", 0, 20)];
//! let config = SchedulerConfig::new().with_algorithm(Algorithm::Fcfs);
//! let outcome = schedule(&jobs, &config).unwrap();
//!
//! let kpi = ScheduleKpi::calculate(&outcome);
//! assert_eq!(kpi.makespan, 60);
//! assert_eq!(kpi.turnaround_of("J3"), Some(60));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scenario;
pub mod scheduler;
pub mod validation;
pub mod workbench;

pub use error::{Result, ScheduleError};
