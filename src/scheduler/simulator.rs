//! Multi-core assignment engine.
//!
//! # Algorithm
//!
//! Both disciplines bind each job to the earliest-available core (ties go
//! to the lowest core index) and start it at
//! `max(core.available_at, job.arrival_time)`.
//!
//! - **FCFS**: jobs are admitted in arrival order (stable on ties) and
//!   dispatched one by one.
//! - **SJF**: at each step the earliest-available core picks, among the jobs
//!   that have arrived by its available time, the one with the shortest
//!   burst (then earliest arrival, then input order). When nothing has
//!   arrived yet the core idles forward to the next arrival. Jobs run to
//!   completion once started.
//!
//! After every dispatch the queue recorder observes the jobs that have
//! arrived by the start time but are still unscheduled.
//!
//! # Complexity
//! O(n * (n + c)) where n=jobs, c=cores.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::{Algorithm, QueueRecorder, SchedulerConfig};
use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::error::Result;
use crate::models::{earliest_available, Core, Job, QueueSnapshot};
use crate::validation::validate_input;

/// Result of one scheduling run.
///
/// Holds the core pool with its bound jobs and the queue snapshot log.
/// Rebuilt from scratch on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Configuration the run used.
    pub config: SchedulerConfig,
    /// Cores with their assigned jobs, indexed 0..N-1.
    pub cores: Vec<Core>,
    /// Queue snapshots, ascending by time, one per distinct instant.
    pub snapshots: Vec<QueueSnapshot>,
}

impl ScheduleOutcome {
    /// Creates an outcome with idle cores and no snapshots.
    pub fn empty(config: SchedulerConfig) -> Self {
        Self {
            config,
            cores: Core::pool(config.core_count),
            snapshots: Vec::new(),
        }
    }

    /// Scheduled jobs in core order: core 0's jobs in assignment order,
    /// then core 1's, and so on.
    pub fn scheduled_jobs(&self) -> Vec<Job> {
        self.jobs().cloned().collect()
    }

    /// Iterates scheduled jobs in core order without cloning.
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.cores.iter().flat_map(|c| c.jobs.iter())
    }

    /// Per-core view of the schedule.
    pub fn cores(&self) -> &[Core] {
        &self.cores
    }

    /// Queue snapshots sorted ascending by time.
    pub fn queue_snapshots(&self) -> &[QueueSnapshot] {
        &self.snapshots
    }

    /// Looks up a scheduled job by id.
    pub fn job(&self, job_id: &str) -> Option<&Job> {
        self.jobs().find(|j| j.id == job_id)
    }

    /// Index of the core a job was bound to.
    pub fn core_of(&self, job_id: &str) -> Option<usize> {
        self.cores
            .iter()
            .find(|c| c.jobs.iter().any(|j| j.id == job_id))
            .map(|c| c.index)
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.cores.iter().map(Core::job_count).sum()
    }

    /// Latest end time across all jobs (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.jobs().filter_map(|j| j.end_time).max().unwrap_or(0)
    }
}

/// Schedules `jobs` on a pool of identical cores.
///
/// The input slice is never mutated: the run works on fresh unscheduled
/// copies and returns them annotated with start/end times.
///
/// # Errors
/// `ScheduleError::InvalidInput` when the core count is zero, a job has
/// a duplicate id, a negative arrival, or a non-positive burst, or the
/// latest arrival plus the total burst overflows `i64`. Nothing is
/// scheduled in that case.
///
/// # Example
/// ```
/// use core_sched::models::Job;
/// use core_sched::scheduler::{schedule, Algorithm, SchedulerConfig};
///
/// let jobs = vec![Job::new("J1", 0, 30), Job::new("J2", 0, 10), Job::new("J3", 0, 20)];
/// let config = SchedulerConfig::new().with_algorithm(Algorithm::Sjf);
/// let outcome = schedule(&jobs, &config).unwrap();
///
/// let order: Vec<&str> = outcome.jobs().map(|j| j.id.as_str()).collect();
/// assert_eq!(order, vec!["J2", "J3", "J1"]);
/// assert_eq!(outcome.makespan(), 60);
/// ```
pub fn schedule(jobs: &[Job], config: &SchedulerConfig) -> Result<ScheduleOutcome> {
    validate_input(jobs, config.core_count)?;

    let pending: Vec<Job> = jobs.iter().map(Job::unscheduled).collect();
    let mut cores = Core::pool(config.core_count);
    let mut recorder = QueueRecorder::new();
    let engine = config.algorithm.rule_engine();

    match config.algorithm {
        Algorithm::Fcfs => run_fcfs(pending, &mut cores, &engine, &mut recorder),
        Algorithm::Sjf => run_sjf(pending, &mut cores, &engine, &mut recorder),
    }

    let outcome = ScheduleOutcome {
        config: *config,
        cores,
        snapshots: recorder.into_snapshots(),
    };
    info!(
        "{} scheduled {} jobs on {} cores, makespan {}",
        config.algorithm,
        outcome.job_count(),
        config.core_count,
        outcome.makespan()
    );
    Ok(outcome)
}

fn run_fcfs(
    pending: Vec<Job>,
    cores: &mut [Core],
    engine: &RuleEngine,
    recorder: &mut QueueRecorder,
) {
    let ctx = SchedulingContext::at_time(0);
    let admission = {
        let refs: Vec<&Job> = pending.iter().collect();
        engine.sort_indices(&refs, &ctx)
    };

    let mut slots: Vec<Option<Job>> = pending.into_iter().map(Some).collect();
    for idx in admission {
        let Some(job) = slots[idx].take() else {
            continue;
        };
        let Some(core_idx) = earliest_available(cores) else {
            return;
        };
        let start = dispatch(&mut cores[core_idx], job);
        recorder.observe_pending(start, slots.iter().flatten());
    }
}

fn run_sjf(
    mut pending: Vec<Job>,
    cores: &mut [Core],
    engine: &RuleEngine,
    recorder: &mut QueueRecorder,
) {
    while !pending.is_empty() {
        let Some(core_idx) = earliest_available(cores) else {
            return;
        };
        let core = &mut cores[core_idx];

        if !pending.iter().any(|j| j.has_arrived(core.available_at)) {
            if let Some(next_arrival) = pending.iter().map(|j| j.arrival_time).min() {
                trace!(
                    "core {} idle from t={} to t={}",
                    core.index,
                    core.available_at,
                    next_arrival
                );
                core.idle_until(next_arrival);
            }
        }

        let now = core.available_at;
        let ctx = SchedulingContext::at_time(now);
        let available: Vec<usize> = (0..pending.len())
            .filter(|&i| pending[i].has_arrived(now))
            .collect();
        let pick = {
            let refs: Vec<&Job> = available.iter().map(|&i| &pending[i]).collect();
            engine.select_best(&refs, &ctx)
        };
        let Some(pick) = pick else {
            return;
        };

        let job = pending.remove(available[pick]);
        let start = dispatch(core, job);
        recorder.observe_pending(start, &pending);
    }
}

/// Binds `job` to `core` and returns its start time.
fn dispatch(core: &mut Core, job: Job) -> i64 {
    let id = job.id.clone();
    let (start, end) = core.assign(job);
    debug!("core {} runs {id} over [{start}, {end})", core.index);
    start
}
