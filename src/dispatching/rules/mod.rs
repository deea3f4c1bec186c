//! Built-in dispatching rules.
//!
//! - **FIFO**: earliest arrival first (First-Come-First-Served)
//! - **SPT**: shortest burst first (Shortest-Job-First)
//!
//! # Score Convention
//! All rules return lower scores for higher priority jobs.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Job;

/// First In, First Out.
///
/// Prioritizes jobs that arrived earliest.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        job.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Processing Time.
///
/// Prioritizes jobs with the shortest burst. Minimizes mean turnaround on
/// a single core when all jobs are available together.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        job.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}
