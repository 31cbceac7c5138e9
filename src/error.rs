//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by [`CpuScheduler::schedule`](crate::scheduler::CpuScheduler::schedule).
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SchedulingError {
    /// Input rejected before any simulation tick ran.
    #[error("invalid scheduling input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl SchedulingError {
    /// Validation errors carried by this error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SchedulingError::InvalidInput(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for SchedulingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SchedulingError::InvalidInput(errors)
    }
}

/// An algorithm tag that names no known policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scheduling algorithm '{0}'")]
pub struct ParseAlgorithmError(pub String);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
