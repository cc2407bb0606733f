//! Session storage
//!
//! Keyed lookup, creation, and removal of live sessions. The store is an
//! explicit instance injected into the coordinator, never an ambient
//! singleton, so tests can own their own storage.

mod memory;

pub use memory::InMemorySessionStore;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::api::types::SessionId;
use crate::errors::Result;
use crate::session::Session;

/// Shared handle to one session's state.
///
/// The inner mutex is the per-session exclusive section: every
/// read-modify-write of phase and membership happens under it.
pub type SharedSession = Arc<Mutex<Session>>;

/// Storage contract for live sessions, keyed by id.
///
/// Implementations must keep entry creation and removal safe under
/// concurrent calls on different ids; serializing mutations within one
/// session is the coordinator's job, via the handle's mutex.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Mint a fresh session id
    fn allocate_id(&self) -> SessionId;

    /// Persist a new session record, returning its shared handle
    async fn put(&self, session: Session) -> Result<SharedSession>;

    /// Look up a session by id
    async fn get(&self, id: &SessionId) -> Option<SharedSession>;

    /// Drop a session record, returning the handle if it existed
    async fn remove(&self, id: &SessionId) -> Option<SharedSession>;

    /// Ids of all live sessions
    async fn list_ids(&self) -> Vec<SessionId>;

    /// Number of live sessions
    fn len(&self) -> usize;
}
