//! Match lifecycle error types.

use thiserror::Error;

/// Match lifecycle errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FixtureError {
    /// Requested status is not a legal successor of the current one
    #[error("Invalid match status transition from \"{from}\" to \"{to}\"")]
    IllegalTransition { from: String, to: String },

    /// Status string is not one of the known statuses
    #[error("Unknown match status: {0:?}")]
    UnknownStatus(String),

    /// Scores can only change while the match is being played
    #[error("Match is not live")]
    NotLive,
}

impl FixtureError {
    /// Suggested protocol status code for this rejection
    pub fn status_code(&self) -> u16 {
        match self {
            FixtureError::IllegalTransition { .. } | FixtureError::NotLive => 409,
            FixtureError::UnknownStatus(_) => 422,
        }
    }

    /// Get a client-safe error message
    pub fn client_message(&self) -> String {
        match self {
            FixtureError::IllegalTransition { .. } => {
                "This match cannot move to the requested status".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for match lifecycle operations
pub type FixtureResult<T> = Result<T, FixtureError>;
