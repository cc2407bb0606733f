//! In-memory session store

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::Mutex;

use super::{SessionStore, SharedSession};
use crate::api::types::SessionId;
use crate::errors::{Result, SessionError};
use crate::session::Session;

/// In-memory store backed by a concurrent map
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, SharedSession>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    fn allocate_id(&self) -> SessionId {
        SessionId::new()
    }

    async fn put(&self, session: Session) -> Result<SharedSession> {
        match self.sessions.entry(session.id.clone()) {
            Entry::Occupied(entry) => Err(SessionError::store(&format!(
                "session {} already exists",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                let shared: SharedSession = Arc::new(Mutex::new(session));
                entry.insert(shared.clone());
                Ok(shared)
            }
        }
    }

    async fn get(&self, id: &SessionId) -> Option<SharedSession> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    async fn remove(&self, id: &SessionId) -> Option<SharedSession> {
        self.sessions.remove(id).map(|(_, shared)| shared)
    }

    async fn list_ids(&self) -> Vec<SessionId> {
        self.sessions.iter().map(|entry| entry.key().clone()).collect()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
