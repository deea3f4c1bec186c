//! Queue-state recorder.
//!
//! Observes the scheduler at each decision point and builds the
//! chronological list of ready-queue snapshots. Observations at an
//! instant already seen are merged by set union, never duplicated.

use log::trace;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Job, QueueSnapshot};

/// Accumulates queue observations keyed by simulated time.
#[derive(Debug, Clone, Default)]
pub struct QueueRecorder {
    observations: BTreeMap<i64, BTreeSet<String>>,
}

impl QueueRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the ids waiting at `time`, merging with earlier observations
    /// of the same instant.
    pub fn observe<I, S>(&mut self, time: i64, waiting_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.observations.entry(time).or_default();
        entry.extend(waiting_ids.into_iter().map(Into::into));
        trace!("queue at t={time}: {} waiting", entry.len());
    }

    /// Records the jobs from `pending` that have arrived by `time`.
    pub fn observe_pending<'a, I>(&mut self, time: i64, pending: I)
    where
        I: IntoIterator<Item = &'a Job>,
    {
        self.observe(
            time,
            pending
                .into_iter()
                .filter(|job| job.has_arrived(time))
                .map(|job| job.id.clone()),
        );
    }

    /// Consumes the recorder, returning snapshots sorted ascending by time.
    pub fn into_snapshots(self) -> Vec<QueueSnapshot> {
        self.observations
            .into_iter()
            .map(|(time, waiting_ids)| QueueSnapshot { time, waiting_ids })
            .collect()
    }
}
