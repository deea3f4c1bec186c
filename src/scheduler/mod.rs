//! Multi-core schedulers and KPI evaluation.
//!
//! Assigns jobs to a pool of identical cores under FCFS or non-preemptive
//! SJF, records the ready queue at each decision point, and computes
//! turnaround metrics.
//!
//! # Algorithm
//!
//! Each job is bound to the earliest-available core, lowest index on ties.
//! See [`schedule`] for the per-discipline selection rules.
//!
//! # KPI
//!
//! `ScheduleKpi` computes per-job turnaround and waiting, makespan,
//! means, and per-core utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod config;
mod kpi;
mod recorder;
mod simulator;

pub use config::{Algorithm, SchedulerConfig};
pub use kpi::{mean_turnaround, JobTiming, ScheduleKpi};
pub use recorder::QueueRecorder;
pub use simulator::{schedule, ScheduleOutcome};
