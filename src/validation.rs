//! Input validation for scheduling runs.
//!
//! Checks a job set and core count before scheduling. Detects:
//! - Duplicate job IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - A core count below one
//! - Job sets whose schedule could run past `i64::MAX`
//!
//! All problems are collected in one pass so the caller can fix them
//! together.

use crate::models::Job;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Parameter name used as the subject of core count errors.
pub const CORE_COUNT: &str = "core_count";

/// Subject of errors about the job set as a whole.
pub const JOB_SET: &str = "jobs";

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending job id, or parameter name.
    pub subject: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job arrives before t=0.
    NegativeArrival,
    /// A job's burst time is zero or negative.
    NonPositiveBurst,
    /// Fewer than one core requested.
    InvalidCoreCount,
    /// Latest arrival plus total burst does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the core count.
pub fn validate_core_count(core_count: usize) -> ValidationResult {
    if core_count == 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidCoreCount,
            CORE_COUNT,
            format!("Core count must be at least 1, got {core_count}"),
        )]);
    }
    Ok(())
}

/// Validates the input for a scheduling run.
///
/// Checks:
/// 1. `core_count >= 1`
/// 2. No duplicate job IDs
/// 3. Every job has `arrival_time >= 0`
/// 4. Every job has `burst_time > 0`
/// 5. `max(arrival_time) + sum(burst_time)` fits in `i64`
///
/// No end time in any schedule exceeds the latest arrival plus the total
/// burst, so check 5 keeps all time arithmetic in range.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[Job], core_count: usize) -> ValidationResult {
    let mut errors = validate_core_count(core_count).err().unwrap_or_default();

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &job.id,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
        check_job(job, &mut errors);
    }

    if horizon(jobs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            JOB_SET,
            "Latest arrival plus total burst time overflows the time range",
        ));
    }

    finish(errors)
}

/// Upper bound on any end time: latest arrival plus total burst.
fn horizon(jobs: &[Job]) -> Option<i64> {
    let latest_arrival = jobs.iter().map(|j| j.arrival_time.max(0)).max().unwrap_or(0);
    jobs.iter()
        .try_fold(latest_arrival, |acc, j| acc.checked_add(j.burst_time.max(0)))
}

fn check_job(job: &Job, errors: &mut Vec<ValidationError>) {
    if job.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            &job.id,
            format!(
                "Job '{}' has negative arrival time {}",
                job.id, job.arrival_time
            ),
        ));
    }
    if job.burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            &job.id,
            format!(
                "Job '{}' has non-positive burst time {}",
                job.id, job.burst_time
            ),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new("J1", 0, 30),
            Job::new("J2", 0, 10),
            Job::new("J3", 8, 15),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_jobs(), 2).is_ok());
    }

    #[test]
    fn test_empty_job_set_is_valid() {
        assert!(validate_input(&[], 1).is_ok());
    }

    #[test]
    fn test_duplicate_job_id() {
        let mut jobs = sample_jobs();
        jobs.push(Job::new("J2", 4, 1));

        let errors = validate_input(&jobs, 1).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert_eq!(errors[0].subject, "J2");
    }

    #[test]
    fn test_negative_arrival() {
        let jobs = vec![Job::new("J1", -1, 5)];
        let errors = validate_input(&jobs, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival && e.subject == "J1"));
    }

    #[test]
    fn test_non_positive_burst() {
        let jobs = vec![Job::new("zero", 0, 0), Job::new("neg", 0, -3)];
        let errors = validate_input(&jobs, 1).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_zero_core_count() {
        let errors = validate_input(&sample_jobs(), 0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidCoreCount);
        assert_eq!(errors[0].subject, CORE_COUNT);
    }

    #[test]
    fn test_collects_all_errors() {
        let jobs = vec![Job::new("J1", -5, 0), Job::new("J1", 0, 1)];
        let errors = validate_input(&jobs, 0).unwrap_err();
        // core count + negative arrival + zero burst + duplicate
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_time_overflow_single_job() {
        let jobs = vec![Job::new("J1", i64::MAX - 1, 5)];
        let errors = validate_input(&jobs, 1).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
        assert_eq!(errors[0].subject, JOB_SET);
    }

    #[test]
    fn test_time_overflow_from_backlog() {
        // Each job fits on its own; queued back to back they do not.
        let half = i64::MAX / 2;
        let jobs = vec![
            Job::new("J1", 0, half),
            Job::new("J2", 0, half),
            Job::new("J3", 10, 5),
        ];
        let errors = validate_input(&jobs, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_largest_fitting_horizon_is_valid() {
        let jobs = vec![Job::new("J1", i64::MAX - 5, 5)];
        assert!(validate_input(&jobs, 1).is_ok());
    }
}
