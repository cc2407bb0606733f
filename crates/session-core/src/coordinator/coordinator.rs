//! Core SessionCoordinator structure and operations

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tokio::sync::{MutexGuard, RwLock};
use tracing::{debug, info, warn};

use crate::admission;
use crate::api::control::SessionControl;
use crate::api::types::{
    JoinOutcome, Phase, RejectReason, Role, SessionId, SessionStats, SessionSummary,
};
use crate::config::SessionConfig;
use crate::errors::{Result, SessionError};
use crate::events::{SessionEvent, SessionEventHandler};
use crate::lifecycle;
use crate::session::Session;
use crate::store::{InMemorySessionStore, SessionStore, SharedSession};

/// Counters across the coordinator's lifetime
#[derive(Debug, Default)]
struct CoordinatorStats {
    total_created: usize,
    total_ended: usize,
}

/// The main coordinator for the session system.
///
/// Owns the session store and serializes every mutating operation on a
/// single session behind that session's mutex, so two concurrent joins can
/// never both observe seven contenders and both take the eighth slot.
/// Operations on different sessions never contend.
pub struct SessionCoordinator {
    /// Injected session storage
    store: Arc<dyn SessionStore>,

    /// Capacity and lock-wait configuration
    config: SessionConfig,

    /// Event handlers keyed by a unique name
    event_handlers: Arc<RwLock<Vec<(String, Arc<dyn SessionEventHandler>)>>>,

    /// Created/ended counters
    stats: Arc<RwLock<CoordinatorStats>>,
}

impl SessionCoordinator {
    /// Create a coordinator over a fresh in-memory store
    pub fn new(config: SessionConfig) -> Arc<Self> {
        Self::with_store(config, Arc::new(InMemorySessionStore::new()))
    }

    /// Create a coordinator over an injected store
    pub fn with_store(config: SessionConfig, store: Arc<dyn SessionStore>) -> Arc<Self> {
        Arc::new(Self {
            store,
            config,
            event_handlers: Arc::new(RwLock::new(Vec::new())),
            stats: Arc::new(RwLock::new(CoordinatorStats::default())),
        })
    }

    /// Add an event handler with a unique name
    pub async fn add_event_handler(&self, name: &str, handler: Arc<dyn SessionEventHandler>) {
        let mut handlers = self.event_handlers.write().await;
        handlers.push((name.to_string(), handler));
    }

    /// Remove an event handler by name
    pub async fn remove_event_handler(&self, name: &str) -> bool {
        let mut handlers = self.event_handlers.write().await;
        if let Some(pos) = handlers.iter().position(|(n, _)| n == name) {
            handlers.remove(pos);
            true
        } else {
            false
        }
    }

    /// Get count of event handlers
    pub async fn event_handler_count(&self) -> usize {
        let handlers = self.event_handlers.read().await;
        handlers.len()
    }

    /// Publish an event to all handlers
    async fn publish_event(&self, event: SessionEvent) {
        let handlers = self.event_handlers.read().await;
        for (_, handler) in handlers.iter() {
            handler.handle_event(event.clone()).await;
        }
    }

    /// Acquire the session's exclusive section, bounded by `lock_wait`.
    ///
    /// The mutex is fair, so contender slots fill in acquisition order.
    /// On timeout nothing has been read or written, so the caller can
    /// surface `Busy` with no partial state.
    async fn lock_session<'a>(
        &self,
        id: &SessionId,
        shared: &'a SharedSession,
    ) -> Result<MutexGuard<'a, Session>> {
        match tokio::time::timeout(self.config.lock_wait, shared.lock()).await {
            Ok(guard) => Ok(guard),
            Err(_) => {
                warn!(
                    "Timed out after {:?} waiting for session {}",
                    self.config.lock_wait, id
                );
                Err(SessionError::busy(&id.to_string()))
            }
        }
    }
}

#[async_trait]
impl SessionControl for SessionCoordinator {
    async fn create_session(&self) -> Result<SessionId> {
        let session_id = self.store.allocate_id();
        self.store.put(Session::new(session_id.clone())).await?;

        {
            let mut stats = self.stats.write().await;
            stats.total_created += 1;
        }

        info!("Created session {}", session_id);
        self.publish_event(SessionEvent::SessionCreated {
            session_id: session_id.clone(),
            created_at: Instant::now(),
        })
        .await;

        Ok(session_id)
    }

    async fn join_session(&self, session_id: &SessionId, name: &str) -> Result<JoinOutcome> {
        let shared = match self.store.get(session_id).await {
            Some(shared) => shared,
            None => {
                debug!("Join request for unknown session {}", session_id);
                return Ok(JoinOutcome::Rejected(RejectReason::SessionNotFound));
            }
        };

        let mut session = self.lock_session(session_id, &shared).await?;
        let outcome = admission::decide(&session, name, self.config.max_contenders);

        let event = match outcome {
            JoinOutcome::Admitted(Role::Contender) => {
                let slot = session.add_contender(name);
                Some(SessionEvent::ContenderJoined {
                    session_id: session_id.clone(),
                    name: name.to_string(),
                    slot,
                    joined_at: Instant::now(),
                })
            }
            JoinOutcome::Admitted(Role::Audience) => {
                session.add_audience_member(name);
                Some(SessionEvent::AudienceJoined {
                    session_id: session_id.clone(),
                    name: name.to_string(),
                    joined_at: Instant::now(),
                })
            }
            JoinOutcome::Rejected(reason) => {
                debug!(
                    "Rejected join \"{}\" on session {}: {}",
                    name, session_id, reason
                );
                None
            }
        };
        drop(session);

        if let Some(event) = event {
            self.publish_event(event).await;
        }
        Ok(outcome)
    }

    async fn start_session(&self, session_id: &SessionId) -> Result<()> {
        let shared = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| SessionError::session_not_found(&session_id.to_string()))?;

        let mut session = self.lock_session(session_id, &shared).await?;
        lifecycle::transition_to_active(&mut session)?;
        drop(session);

        info!("Session {} started", session_id);
        self.publish_event(SessionEvent::PhaseChanged {
            session_id: session_id.clone(),
            old_phase: Phase::Joining,
            new_phase: Phase::Active,
            changed_at: Instant::now(),
        })
        .await;

        Ok(())
    }

    async fn end_session(&self, session_id: &SessionId) -> Result<()> {
        let shared = match self.store.get(session_id).await {
            Some(shared) => shared,
            None => {
                debug!("End request for unknown session {}, treating as already ended", session_id);
                return Ok(());
            }
        };

        let mut session = self.lock_session(session_id, &shared).await?;
        if !lifecycle::can_end(&session) {
            // A concurrent end won the race; this handle is stale.
            return Ok(());
        }

        // Flip the phase before removing the store entry: any join still
        // holding this handle observes `Ended` and rejects cleanly.
        lifecycle::transition_to_ended(&mut session)?;
        let contender_count = session.contenders.len();
        let audience_count = session.audience.len();
        self.store.remove(session_id).await;
        drop(session);

        {
            let mut stats = self.stats.write().await;
            stats.total_ended += 1;
        }

        info!(
            "Ended session {} ({} contenders, {} audience)",
            session_id, contender_count, audience_count
        );
        self.publish_event(SessionEvent::SessionEnded {
            session_id: session_id.clone(),
            contender_count,
            audience_count,
            ended_at: Instant::now(),
        })
        .await;

        Ok(())
    }

    async fn contender_names(&self, session_id: &SessionId) -> Result<Vec<String>> {
        let shared = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| SessionError::session_not_found(&session_id.to_string()))?;

        let session = self.lock_session(session_id, &shared).await?;
        Ok(session.contender_names())
    }

    async fn session_summary(&self, session_id: &SessionId) -> Result<SessionSummary> {
        let shared = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| SessionError::session_not_found(&session_id.to_string()))?;

        let session = self.lock_session(session_id, &shared).await?;
        Ok(session.summary())
    }

    async fn list_sessions(&self) -> Vec<SessionId> {
        self.store.list_ids().await
    }

    fn session_count(&self) -> usize {
        self.store.len()
    }

    async fn stats(&self) -> SessionStats {
        let stats = self.stats.read().await;
        SessionStats {
            active_sessions: self.store.len(),
            total_created: stats.total_created,
            total_ended: stats.total_ended,
        }
    }
}
