//! Schedule quality metrics (KPIs).
//!
//! Computes turnaround-centric performance indicators from a completed
//! scheduling run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | end - arrival, per job |
//! | Waiting | start - arrival, per job |
//! | Makespan (C_max) | Latest completion time |
//! | Mean Turnaround | Mean of turnaround over scheduled jobs |
//! | Mean Waiting | Mean of waiting over scheduled jobs |
//! | Utilization | Core busy time / makespan |
//!
//! Means are `None` when no job was scheduled.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use super::ScheduleOutcome;
use crate::models::Job;

/// Timing figures for one scheduled job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTiming {
    /// Job id.
    pub job_id: String,
    /// Core the job ran on.
    pub core_index: usize,
    /// end - arrival.
    pub turnaround: i64,
    /// start - arrival.
    pub waiting: i64,
}

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Per-job figures, in core order.
    pub jobs: Vec<JobTiming>,
    /// Latest completion time (0 when empty).
    pub makespan: i64,
    /// Mean turnaround time. `None` when nothing was scheduled.
    pub mean_turnaround: Option<f64>,
    /// Mean waiting time. `None` when nothing was scheduled.
    pub mean_waiting: Option<f64>,
    /// Busy time per core, indexed by core.
    pub busy_by_core: Vec<i64>,
    /// Busy fraction of the makespan per core (0.0..1.0).
    pub utilization_by_core: Vec<f64>,
}

impl ScheduleKpi {
    /// Computes KPIs from a scheduling outcome.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let jobs: Vec<JobTiming> = outcome
            .cores
            .iter()
            .flat_map(|core| {
                core.jobs
                    .iter()
                    .filter_map(move |job| timing(job, core.index))
            })
            .collect();

        let makespan = outcome.makespan();
        let busy_by_core: Vec<i64> = outcome.cores.iter().map(|c| c.busy_time()).collect();
        let utilization_by_core = busy_by_core
            .iter()
            .map(|&busy| {
                if makespan == 0 {
                    0.0
                } else {
                    busy as f64 / makespan as f64
                }
            })
            .collect();

        Self {
            mean_turnaround: mean(jobs.iter().map(|t| t.turnaround)),
            mean_waiting: mean(jobs.iter().map(|t| t.waiting)),
            jobs,
            makespan,
            busy_by_core,
            utilization_by_core,
        }
    }

    /// Average utilization across cores (0.0 for an idle pool).
    pub fn avg_utilization(&self) -> f64 {
        if self.utilization_by_core.is_empty() {
            0.0
        } else {
            self.utilization_by_core.iter().sum::<f64>() / self.utilization_by_core.len() as f64
        }
    }

    /// Turnaround time of one job.
    pub fn turnaround_of(&self, job_id: &str) -> Option<i64> {
        self.jobs
            .iter()
            .find(|t| t.job_id == job_id)
            .map(|t| t.turnaround)
    }
}

/// Mean turnaround over a job list, ignoring unscheduled jobs.
///
/// `None` when no job in the list is scheduled.
pub fn mean_turnaround(jobs: &[Job]) -> Option<f64> {
    mean(jobs.iter().filter_map(Job::turnaround_time))
}

fn timing(job: &Job, core_index: usize) -> Option<JobTiming> {
    Some(JobTiming {
        job_id: job.id.clone(),
        core_index,
        turnaround: job.turnaround_time()?,
        waiting: job.waiting_time()?,
    })
}

fn mean(values: impl Iterator<Item = i64>) -> Option<f64> {
    // Summed as f64: per-job values fit in i64 but their total may not.
    let (sum, count) = values.fold((0f64, 0usize), |(s, n), v| (s + v as f64, n + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
