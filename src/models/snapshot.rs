//! Queue snapshot model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of jobs waiting in the ready queue at one instant.
///
/// A job is waiting at `time` when it has arrived (`arrival_time <= time`)
/// but has not yet been started.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueueSnapshot {
    /// Simulated instant of observation.
    pub time: i64,
    /// Ids of the waiting jobs.
    pub waiting_ids: BTreeSet<String>,
}

impl QueueSnapshot {
    /// Creates a snapshot.
    pub fn new<I, S>(time: i64, waiting_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            time,
            waiting_ids: waiting_ids.into_iter().map(Into::into).collect(),
        }
    }
}
