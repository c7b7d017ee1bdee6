//! Bracket error types.

use thiserror::Error;

use super::models::{EntrantId, MatchRef};

/// Bracket generation and advancement errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BracketError {
    /// Entrant list cannot be turned into a bracket
    #[error("Invalid bracket input: {0}")]
    InvalidBracketInput(String),

    /// No match exists at the given position
    #[error("No bracket match at {0}")]
    UnknownMatchReference(MatchRef),

    /// The match already has a winner
    #[error("Match at {0} is already resolved")]
    AlreadyResolved(MatchRef),

    /// One or both slots are still waiting on an earlier match
    #[error("Match at {0} has an unresolved opponent")]
    UnresolvedOpponent(MatchRef),

    /// Declared winner is not playing in the match
    #[error("{entrant} is not playing in the match at {at}")]
    NotAParticipant { at: MatchRef, entrant: EntrantId },
}

impl BracketError {
    /// Suggested protocol status code for this rejection
    pub fn status_code(&self) -> u16 {
        match self {
            BracketError::InvalidBracketInput(_) | BracketError::NotAParticipant { .. } => 422,
            BracketError::UnknownMatchReference(_) => 404,
            BracketError::AlreadyResolved(_) | BracketError::UnresolvedOpponent(_) => 409,
        }
    }

    /// Get a client-safe error message
    pub fn client_message(&self) -> String {
        match self {
            BracketError::UnknownMatchReference(_) => "Bracket match not found".to_string(),
            BracketError::NotAParticipant { .. } => {
                "Winner must be one of the two teams in the match".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for bracket operations
pub type BracketResult<T> = Result<T, BracketError>;

/// Bracket snapshot errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Failed to encode a bracket
    #[error("Failed to encode bracket: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// Failed to decode a bracket
    #[error("Failed to decode bracket: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// Decoded bracket does not have a valid shape
    #[error("Corrupt bracket snapshot: {0}")]
    Corrupt(String),
}

impl SnapshotError {
    pub fn status_code(&self) -> u16 {
        match self {
            SnapshotError::Encode(_) => 500,
            SnapshotError::Decode(_) | SnapshotError::Corrupt(_) => 400,
        }
    }

    pub fn client_message(&self) -> String {
        match self {
            SnapshotError::Encode(_) => "Bracket could not be saved".to_string(),
            SnapshotError::Decode(_) | SnapshotError::Corrupt(_) => {
                "Stored bracket is unreadable".to_string()
            }
        }
    }
}
