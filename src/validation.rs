//! Input validation for simulation runs.
//!
//! Checks the process set and policy parameters before any simulated
//! tick is spent. Detects:
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round Robin quanta
//! - Duplicate process IDs
//! - Process sets whose latest possible clock value overflows `i64`
//!
//! All problems are collected, so a caller sees every offending process
//! in one pass.

use std::collections::HashSet;
use std::fmt;

use crate::dispatching::Policy;
use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending process or field.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// Round Robin configured with a zero or negative quantum.
    NonPositiveQuantum,
    /// Latest arrival plus total burst does not fit in an `i64` clock.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. `arrival_time >= 0`
/// 3. `burst_time > 0`
/// 4. `max(arrival_time) + Σ burst_time` fits in `i64` (bounds every clock value)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival_time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst_time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Latest arrival plus total burst of {} processes overflows the i64 clock",
                processes.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the simulated clock: latest arrival plus total burst.
///
/// The CPU never idles once the last process has arrived, so no run can
/// pass this tick. Negative fields are left to the other checks.
fn horizon(processes: &[ProcessSpec]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .map(|p| p.burst_time.max(0))
        .try_fold(latest_arrival, i64::checked_add)
}

/// Validates policy parameters.
pub fn validate_policy(policy: &Policy) -> ValidationResult {
    match policy {
        Policy::RoundRobin { time_quantum } if *time_quantum <= 0 => {
            Err(vec![ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Round Robin time_quantum must be positive, got {time_quantum}"),
            )])
        }
        _ => Ok(()),
    }
}

/// Validates a policy together with the process set it will run on.
pub fn validate_run(policy: &Policy, processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_policy(policy) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_processes(processes) {
        errors.append(&mut e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
