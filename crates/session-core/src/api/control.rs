//! Public operation surface for session coordination
//!
//! Transport adapters call through this trait; `SessionCoordinator`
//! implements it. The trait carries the full logical contract: session
//! creation, join admission, phase control, idempotent teardown, and the
//! read-side queries a game-master screen needs.

use async_trait::async_trait;

use crate::api::types::{JoinOutcome, SessionId, SessionStats, SessionSummary};
use crate::errors::Result;

/// Operations on game sessions
#[async_trait]
pub trait SessionControl: Send + Sync {
    /// Create a new session in the joining phase and return its id
    async fn create_session(&self) -> Result<SessionId>;

    /// Ask to join a session under the given name.
    ///
    /// An unknown id yields `Rejected(SessionNotFound)` rather than an
    /// error: the joining player needs to know to re-check their code.
    /// `Err(SessionError::Busy)` means the session's exclusive section
    /// could not be acquired in time and nothing was applied.
    async fn join_session(&self, session_id: &SessionId, name: &str) -> Result<JoinOutcome>;

    /// Close the lobby and begin active play
    async fn start_session(&self, session_id: &SessionId) -> Result<()>;

    /// End a session and drop its membership.
    ///
    /// Idempotent: unknown ids and repeated calls succeed with no
    /// observable effect, tolerating duplicate or late end signals.
    async fn end_session(&self, session_id: &SessionId) -> Result<()>;

    /// Names of the session's contenders, in join order
    async fn contender_names(&self, session_id: &SessionId) -> Result<Vec<String>>;

    /// Snapshot of one session's phase and membership
    async fn session_summary(&self, session_id: &SessionId) -> Result<SessionSummary>;

    /// Ids of all live sessions
    async fn list_sessions(&self) -> Vec<SessionId>;

    /// Count of live sessions
    fn session_count(&self) -> usize;

    /// Aggregate counters
    async fn stats(&self) -> SessionStats;
}
