//! Core (processing unit) model.
//!
//! All cores in a pool are identical and free from t=0. A core tracks the
//! next instant it becomes available and the jobs bound to it, in
//! assignment order.

use serde::{Deserialize, Serialize};

use super::Job;

/// A processing core.
///
/// `available_at` never decreases during a scheduling run, and for any two
/// consecutive jobs on the same core the later one starts no earlier than
/// the earlier one ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Core {
    /// Position in the pool (0..N-1).
    pub index: usize,
    /// Next instant at which the core is free.
    pub available_at: i64,
    /// Jobs bound to this core, in assignment order.
    pub jobs: Vec<Job>,
}

impl Core {
    /// Creates an idle core, available from t=0.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            available_at: 0,
            jobs: Vec::new(),
        }
    }

    /// Creates a pool of `count` idle cores.
    pub fn pool(count: usize) -> Vec<Self> {
        (0..count).map(Self::new).collect()
    }

    /// Binds `job` to this core.
    ///
    /// The job starts at `max(available_at, arrival_time)`; the core is then
    /// busy until the job ends. Returns the job's `(start, end)`.
    pub fn assign(&mut self, mut job: Job) -> (i64, i64) {
        let start = self.available_at.max(job.arrival_time);
        let end = job.start_at(start);
        self.available_at = end;
        self.jobs.push(job);
        (start, end)
    }

    /// Moves `available_at` forward to `time` while the core sits idle.
    ///
    /// Never moves it backward.
    pub fn idle_until(&mut self, time: i64) {
        self.available_at = self.available_at.max(time);
    }

    /// Total time spent running jobs.
    pub fn busy_time(&self) -> i64 {
        self.jobs.iter().map(|j| j.burst_time).sum()
    }

    /// Number of jobs bound to this core.
    #[inline]
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

/// Returns the index of the earliest-available core.
///
/// Ties go to the lowest core index. `None` for an empty pool.
pub fn earliest_available(cores: &[Core]) -> Option<usize> {
    cores
        .iter()
        .min_by_key(|c| (c.available_at, c.index))
        .map(|c| c.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_waits_for_arrival() {
        let mut core = Core::new(0);
        assert_eq!(core.assign(Job::new("J1", 5, 10)), (5, 15));
        assert_eq!(core.jobs[0].start_time, Some(5));
        assert_eq!(core.jobs[0].end_time, Some(15));
        assert_eq!(core.available_at, 15);
    }

    #[test]
    fn test_assign_queues_behind_previous() {
        let mut core = Core::new(0);
        core.assign(Job::new("J1", 0, 10));
        assert_eq!(core.assign(Job::new("J2", 2, 3)), (10, 13));
        assert_eq!(core.jobs[1].end_time, Some(13));
        assert_eq!(core.job_count(), 2);
        assert_eq!(core.busy_time(), 13);
    }

    #[test]
    fn test_idle_until_is_monotonic() {
        let mut core = Core::new(0);
        core.idle_until(7);
        assert_eq!(core.available_at, 7);
        core.idle_until(3);
        assert_eq!(core.available_at, 7);
    }

    #[test]
    fn test_earliest_available_tie_goes_to_lowest_index() {
        let mut cores = Core::pool(3);
        assert_eq!(earliest_available(&cores), Some(0));

        cores[0].available_at = 30;
        cores[1].available_at = 30;
        cores[2].available_at = 30;
        assert_eq!(earliest_available(&cores), Some(0));

        cores[0].available_at = 31;
        assert_eq!(earliest_available(&cores), Some(1));
    }

    #[test]
    fn test_earliest_available_empty_pool() {
        assert_eq!(earliest_available(&[]), None);
    }
}
