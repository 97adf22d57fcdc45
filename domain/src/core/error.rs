//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid venue id: {0}")]
    InvalidVenueId(String),

    #[error("Invalid group id: {0}")]
    InvalidGroupId(String),

    #[error("Invalid submission number: {0}")]
    InvalidSubmissionNumber(String),

    #[error("Role is disabled for this venue: {0}")]
    RoleDisabled(String),
}

impl DomainError {
    /// Check if this error was caused by a malformed identifier
    pub fn is_invalid_id(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidVenueId(_) | DomainError::InvalidGroupId(_)
        )
    }
}
