//! Input validation for scheduling runs.
//!
//! Checks the process list before any simulation tick runs. Detects:
//! - Empty input
//! - Duplicate process IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - A Round Robin time quantum below 1
//! - Tick values whose simulation horizon overflows `i64`
//!
//! All problems are collected; a run is rejected if any is found.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Process;
use crate::scheduler::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process list is empty.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Round Robin quantum is below 1.
    InvalidTimeQuantum,
    /// Latest arrival plus total burst, or the per-process time totals,
    /// do not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input for one scheduling run.
///
/// `time_quantum` is only checked when `algorithm` uses it.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    processes: &[Process],
    algorithm: Algorithm,
    time_quantum: i64,
) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process list is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst time {} (must be >= 1)", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' arrives at {} (must be >= 0)", p.id, p.arrival_time),
            ));
        }
    }

    if algorithm.uses_time_quantum() && time_quantum < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeQuantum,
            format!("Time quantum {time_quantum} is invalid for {algorithm} (must be >= 1)"),
        ));
    }

    if time_total_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the tick range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on waiting and turnaround totals: `n * (max arrival + Σ burst)`.
///
/// Every tick a routine reaches is at most `max arrival + Σ burst`, and each
/// per-process time is bounded by it. `None` on overflow.
fn time_total_bound(processes: &[Process]) -> Option<i64> {
    let total_burst = processes
        .iter()
        .try_fold(0i64, |total, p| total.checked_add(p.burst_time.max(0)))?;
    let last_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    let horizon = last_arrival.checked_add(total_burst)?;
    let count = i64::try_from(processes.len()).ok()?;
    horizon.checked_mul(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_processes(), Algorithm::Fcfs, 2).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_input(&[], Algorithm::Fcfs, 2).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::EmptyInput]);
    }

    #[test]
    fn test_duplicate_id() {
        let mut processes = sample_processes();
        processes.push(Process::new("P1", 4, 1));

        let errors = validate_input(&processes, Algorithm::Fcfs, 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new("P1", 0, 0), Process::new("P2", 0, -3)];
        let errors = validate_input(&processes, Algorithm::Fcfs, 2).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::NonPositiveBurst,
                ValidationErrorKind::NonPositiveBurst
            ]
        );
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new("P1", -1, 2)];
        let errors = validate_input(&processes, Algorithm::Fcfs, 2).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NegativeArrival]);
    }

    #[test]
    fn test_quantum_checked_only_for_round_robin() {
        let processes = sample_processes();
        assert!(validate_input(&processes, Algorithm::SjfPreemptive, 0).is_ok());

        let errors = validate_input(&processes, Algorithm::RoundRobin, 0).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidTimeQuantum]);
    }

    #[test]
    fn test_time_overflow() {
        let late = vec![Process::new("P1", i64::MAX, 1)];
        let errors = validate_input(&late, Algorithm::Fcfs, 2).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::TimeOverflow]);

        let long = vec![
            Process::new("P1", 0, i64::MAX / 2 + 1),
            Process::new("P2", 0, i64::MAX / 2 + 1),
        ];
        let errors = validate_input(&long, Algorithm::RoundRobin, 2).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::TimeOverflow]);

        // each turnaround fits, but two of them summed do not
        let totals = vec![
            Process::new("P1", i64::MAX / 2, 1),
            Process::new("P2", i64::MAX / 2, 1),
        ];
        let errors = validate_input(&totals, Algorithm::Fcfs, 2).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::TimeOverflow]);
    }

    #[test]
    fn test_horizon_at_tick_limit() {
        let processes = vec![Process::new("P1", i64::MAX - 1, 1)];
        assert!(validate_input(&processes, Algorithm::Fcfs, 2).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new("P1", -2, 0), Process::new("P1", 0, 1)];
        let errors = validate_input(&processes, Algorithm::RoundRobin, -1).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
