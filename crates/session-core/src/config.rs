//! Configuration for session coordination

use std::time::Duration;

use serde::Deserialize;

/// Contender slots per session unless configured otherwise
pub const DEFAULT_MAX_CONTENDERS: usize = 8;

/// Coordinator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of contender slots per session; further joins
    /// overflow into the audience
    pub max_contenders: usize,
    /// Upper bound on waiting for a session's exclusive section before
    /// the operation fails with `SessionError::Busy`
    pub lock_wait: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_contenders: DEFAULT_MAX_CONTENDERS,
            lock_wait: Duration::from_secs(5),
        }
    }
}
