//! Simulation error type.

use std::fmt;

use crate::validation::ValidationError;

/// Errors returned by a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The run was rejected before simulating; every offending field is listed.
    InvalidInput(Vec<ValidationError>),
    /// The ready set ran dry with processes unfinished and no arrivals left.
    ///
    /// Unreachable for a validated process set; reported instead of looping.
    ReadySetExhausted {
        /// Clock value when the engine stalled.
        clock: i64,
        /// Number of processes still incomplete.
        unfinished: usize,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid simulation input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
            Self::ReadySetExhausted { clock, unfinished } => write!(
                f,
                "ready set exhausted at t={clock} with {unfinished} unfinished process(es)"
            ),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;
    use crate::validation::validate_processes;

    #[test]
    fn test_invalid_input_display_lists_each_error() {
        let errors =
            validate_processes(&[ProcessSpec::new(1, -2, 3), ProcessSpec::new(2, 0, 0)])
                .unwrap_err();
        let msg = SimulationError::from(errors).to_string();
        assert!(msg.starts_with("invalid simulation input: "));
        assert!(msg.contains("Process 1"));
        assert!(msg.contains("Process 2"));
    }

    #[test]
    fn test_exhausted_display() {
        let err = SimulationError::ReadySetExhausted {
            clock: 12,
            unfinished: 2,
        };
        assert_eq!(
            err.to_string(),
            "ready set exhausted at t=12 with 2 unfinished process(es)"
        );
    }
}
