//! Error types for session operations
//!
//! Join rejections (closed phase, duplicate name, unknown id) are values
//! carried in `JoinOutcome`, not errors. `SessionError` covers the cases
//! where an operation itself cannot proceed.

use thiserror::Error;

use crate::api::types::Phase;

/// Main result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Main error type for session operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Session not found
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Requested lifecycle transition is not legal from the current phase
    #[error("Invalid phase transition: {from} -> {to}")]
    InvalidPhaseTransition { from: Phase, to: Phase },

    /// The session's exclusive section could not be acquired in time
    #[error("Session busy: {0}")]
    Busy(String),

    /// Storage error
    #[error("Store error: {0}")]
    Store(String),
}

// Convenience constructors
impl SessionError {
    pub fn session_not_found(session_id: &str) -> Self {
        SessionError::SessionNotFound(session_id.to_string())
    }

    pub fn busy(session_id: &str) -> Self {
        SessionError::Busy(session_id.to_string())
    }

    pub fn store(msg: &str) -> Self {
        SessionError::Store(msg.to_string())
    }
}
