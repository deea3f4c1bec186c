//! Job model.
//!
//! A job is an independently-arriving unit of compute work. Its input
//! attributes (id, arrival, burst) are fixed; the scheduler annotates it
//! with a start and end time when it is bound to a core.
//!
//! # Time Representation
//! All times are integer ticks of simulated time relative to t=0.

use serde::{Deserialize, Serialize};

/// A job to be scheduled on a core.
///
/// A job is either *unscheduled* (`start_time` and `end_time` both `None`)
/// or *scheduled* (both `Some`, with `end_time = start_time + burst_time`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Caller-supplied identifier, unique within one job set.
    pub id: String,
    /// Time at which the job becomes eligible to run.
    pub arrival_time: i64,
    /// Time the job occupies a core once started.
    pub burst_time: i64,
    /// Start time, present once scheduled.
    pub start_time: Option<i64>,
    /// End time, present once scheduled.
    pub end_time: Option<i64>,
}

impl Job {
    /// Creates an unscheduled job.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            start_time: None,
            end_time: None,
        }
    }

    /// Whether the job has been bound to a start time.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.start_time.is_some()
    }

    /// Binds the job to `start_time`, deriving the end time from the burst.
    /// Returns the end time.
    pub(crate) fn start_at(&mut self, start_time: i64) -> i64 {
        let end_time = start_time + self.burst_time;
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        end_time
    }

    /// Returns a copy with the schedule annotation cleared.
    pub fn unscheduled(&self) -> Self {
        Self::new(self.id.clone(), self.arrival_time, self.burst_time)
    }

    /// Whether the job has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Turnaround time (`end - arrival`), if scheduled.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.end_time.map(|end| end - self.arrival_time)
    }

    /// Time spent waiting before start (`start - arrival`), if scheduled.
    pub fn waiting_time(&self) -> Option<i64> {
        self.start_time.map(|start| start - self.arrival_time)
    }
}
