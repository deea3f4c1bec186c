//! Canned and randomized job sets.

use rand::Rng;

use crate::models::Job;

/// The six-job demo workload.
///
/// `J1(0,30) J2(0,10) J3(0,20) J4(8,15) J5(16,7) J6(18,4)` as
/// `id(arrival, burst)`.
pub fn demo_jobs() -> Vec<Job> {
    vec![
        Job::new("J1", 0, 30),
        Job::new("J2", 0, 10),
        Job::new("J3", 0, 20),
        Job::new("J4", 8, 15),
        Job::new("J5", 16, 7),
        Job::new("J6", 18, 4),
    ]
}

/// Generates `count` jobs named `J1..Jn`.
///
/// Arrivals are drawn from `0..=max_arrival` and bursts from
/// `1..=max_burst`. Bounds below their minimum are raised to it.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use core_sched::scenario::random_jobs;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let jobs = random_jobs(&mut rng, 5, 20, 10);
/// assert_eq!(jobs.len(), 5);
/// assert!(jobs.iter().all(|j| j.burst_time >= 1 && j.burst_time <= 10));
/// ```
pub fn random_jobs<R: Rng>(
    rng: &mut R,
    count: usize,
    max_arrival: i64,
    max_burst: i64,
) -> Vec<Job> {
    let max_arrival = max_arrival.max(0);
    let max_burst = max_burst.max(1);
    (1..=count)
        .map(|n| {
            Job::new(
                format!("J{n}"),
                rng.random_range(0..=max_arrival),
                rng.random_range(1..=max_burst),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_jobs_are_valid() {
        let jobs = demo_jobs();
        assert_eq!(jobs.len(), 6);
        assert!(validate_input(&jobs, 1).is_ok());
        assert_eq!(jobs[3], Job::new("J4", 8, 15));
    }

    #[test]
    fn test_random_jobs_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let jobs = random_jobs(&mut rng, 50, 30, 12);
        assert_eq!(jobs.len(), 50);
        assert!(validate_input(&jobs, 1).is_ok());
        for job in &jobs {
            assert!((0..=30).contains(&job.arrival_time));
            assert!((1..=12).contains(&job.burst_time));
            assert!(!job.is_scheduled());
        }
        assert_eq!(jobs[0].id, "J1");
        assert_eq!(jobs[49].id, "J50");
    }

    #[test]
    fn test_random_jobs_seeded_is_reproducible() {
        let a = random_jobs(&mut StdRng::seed_from_u64(9), 10, 50, 20);
        let b = random_jobs(&mut StdRng::seed_from_u64(9), 10, 50, 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_jobs_degenerate_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let jobs = random_jobs(&mut rng, 3, -4, 0);
        assert!(jobs
            .iter()
            .all(|j| j.arrival_time == 0 && j.burst_time == 1));
        assert!(random_jobs(&mut rng, 0, 10, 10).is_empty());
    }
}
