//! Dispatching rules and rule engine for job selection.
//!
//! Provides priority-based dispatching rules (FIFO, SPT) and a composable
//! rule engine that orders candidate jobs. Both scheduling disciplines are
//! expressed as rule chains:
//!
//! - FCFS admission order: `Fifo`
//! - SJF selection: `Spt`, ties broken by `Fifo`
//!
//! Remaining ties always fall back to input order.
//!
//! # Usage
//!
//! ```
//! use core_sched::dispatching::{RuleEngine, SchedulingContext};
//! use core_sched::dispatching::rules;
//! use core_sched::models::Job;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let jobs = [Job::new("J1", 0, 30), Job::new("J2", 0, 10)];
//! let candidates: Vec<&Job> = jobs.iter().collect();
//! let best = engine.select_best(&candidates, &SchedulingContext::at_time(0));
//! assert_eq!(best, Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (selected first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates job priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for jobs that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a job given the current scheduling context.
    fn evaluate(&self, job: &Job, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
