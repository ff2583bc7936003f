//! Rover simulation errors.

use thiserror::Error;

/// Errors produced while parsing or simulating a rover mission.
///
/// There is one kind: callers only learn that the input was
/// unusable. `reason` is kept for logs and never shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoverError {
    /// The input block is malformed.
    #[error("Invalid input format or processing error")]
    InvalidInput { reason: String },
}

impl RoverError {
    /// Build an `InvalidInput` error with a diagnostic reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// The diagnostic reason attached to the error.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidInput { reason } => reason,
        }
    }
}
