//! Error type for scheduling operations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the scheduler and the workbench.
///
/// Every variant is caller-correctable; nothing is committed when one is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Job not found: {0}")]
    JobNotFound(String),
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

impl ScheduleError {
    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
