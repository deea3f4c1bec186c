//! Stateful in-process facade for interactive callers.
//!
//! A `Workbench` owns the durable job list, the core count, and the
//! selected algorithm. Every mutation re-runs the scheduler synchronously
//! when an algorithm is selected. A rejected mutation leaves the workbench
//! exactly as it was.

use log::{info, warn};

use crate::error::{Result, ScheduleError};
use crate::models::{Job, QueueSnapshot};
use crate::scheduler::{schedule, Algorithm, ScheduleKpi, ScheduleOutcome, SchedulerConfig};
use crate::validation::validate_input;

/// Job set, core count, and algorithm, plus the last committed schedule.
///
/// # Example
/// ```
/// use core_sched::workbench::Workbench;
///
/// let mut bench = Workbench::new();
/// bench.add_job("J1", 0, 30).unwrap();
/// bench.add_job("J2", 0, 10).unwrap();
/// assert!(bench.scheduled_jobs().is_empty()); // no algorithm yet
///
/// bench.set_algorithm("sjf").unwrap();
/// let order: Vec<String> = bench.scheduled_jobs().into_iter().map(|j| j.id).collect();
/// assert_eq!(order, vec!["J2", "J1"]);
/// ```
#[derive(Debug, Clone)]
pub struct Workbench {
    jobs: Vec<Job>,
    core_count: usize,
    algorithm: Option<Algorithm>,
    outcome: Option<ScheduleOutcome>,
}

impl Workbench {
    /// Creates an empty workbench with one core and no algorithm.
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            core_count: 1,
            algorithm: None,
            outcome: None,
        }
    }

    /// Durable job list in insertion order, without schedule annotations.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Current core count.
    pub fn core_count(&self) -> usize {
        self.core_count
    }

    /// Selected algorithm, if any.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Last committed schedule. `None` until an algorithm is selected.
    pub fn outcome(&self) -> Option<&ScheduleOutcome> {
        self.outcome.as_ref()
    }

    /// KPIs of the last committed schedule.
    pub fn kpi(&self) -> Option<ScheduleKpi> {
        self.outcome.as_ref().map(ScheduleKpi::calculate)
    }

    /// Scheduled jobs in core order. Empty when no algorithm is selected.
    pub fn scheduled_jobs(&self) -> Vec<Job> {
        self.outcome
            .as_ref()
            .map(ScheduleOutcome::scheduled_jobs)
            .unwrap_or_default()
    }

    /// Queue snapshots ascending by time. Empty when no algorithm is selected.
    pub fn queue_snapshots(&self) -> &[QueueSnapshot] {
        self.outcome
            .as_ref()
            .map(|o| o.snapshots.as_slice())
            .unwrap_or(&[])
    }

    /// Adds a job and reschedules.
    pub fn add_job(
        &mut self,
        id: impl Into<String>,
        arrival_time: i64,
        burst_time: i64,
    ) -> Result<()> {
        let mut jobs = self.jobs.clone();
        jobs.push(Job::new(id, arrival_time, burst_time));
        self.commit(jobs, self.core_count, self.algorithm)
    }

    /// Removes a job by id and reschedules. Returns the removed job.
    pub fn remove_job(&mut self, id: &str) -> Result<Job> {
        let Some(pos) = self.jobs.iter().position(|j| j.id == id) else {
            warn!("remove rejected: job {id} not found");
            return Err(ScheduleError::JobNotFound(id.to_string()));
        };
        let mut jobs = self.jobs.clone();
        let removed = jobs.remove(pos);
        self.commit(jobs, self.core_count, self.algorithm)?;
        Ok(removed)
    }

    /// Replaces the whole job set and reschedules.
    pub fn load_jobs(&mut self, jobs: Vec<Job>) -> Result<()> {
        let jobs = jobs.iter().map(Job::unscheduled).collect();
        self.commit(jobs, self.core_count, self.algorithm)
    }

    /// Changes the core count and reschedules.
    pub fn set_core_count(&mut self, core_count: usize) -> Result<()> {
        self.commit(self.jobs.clone(), core_count, self.algorithm)
    }

    /// Selects an algorithm by name (`"fcfs"` or `"sjf"`) and reschedules.
    pub fn set_algorithm(&mut self, name: &str) -> Result<()> {
        let algorithm = name.parse::<Algorithm>().inspect_err(|e| warn!("{e}"))?;
        self.select_algorithm(algorithm)
    }

    /// Selects an algorithm and reschedules.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> Result<()> {
        self.commit(self.jobs.clone(), self.core_count, Some(algorithm))
    }

    /// Validates and schedules the candidate state, then swaps it in.
    fn commit(
        &mut self,
        jobs: Vec<Job>,
        core_count: usize,
        algorithm: Option<Algorithm>,
    ) -> Result<()> {
        if let Err(errors) = validate_input(&jobs, core_count) {
            warn!("mutation rejected: {} validation errors", errors.len());
            return Err(errors.into());
        }

        let outcome = match algorithm {
            Some(algorithm) => {
                let config = SchedulerConfig::new()
                    .with_core_count(core_count)
                    .with_algorithm(algorithm);
                Some(schedule(&jobs, &config)?)
            }
            None => None,
        };

        info!(
            "workbench: {} jobs, {} cores, algorithm {}",
            jobs.len(),
            core_count,
            algorithm.map_or("none", Algorithm::name)
        );
        self.jobs = jobs;
        self.core_count = core_count;
        self.algorithm = algorithm;
        self.outcome = outcome;
        Ok(())
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}
