//! Session Events
//!
//! Events published by the coordinator as sessions evolve, and the handler
//! trait observers implement. A game-master screen subscribes here to see
//! the lobby fill up without polling.

use std::time::Instant;

use async_trait::async_trait;

use crate::api::types::{Phase, SessionId};

/// Events emitted by the coordinator
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A new session opened its lobby
    SessionCreated {
        session_id: SessionId,
        created_at: Instant,
    },

    /// A join was admitted into a contender slot
    ContenderJoined {
        session_id: SessionId,
        name: String,
        /// Slot index in join order, starting at 0
        slot: usize,
        joined_at: Instant,
    },

    /// A join overflowed into the audience
    AudienceJoined {
        session_id: SessionId,
        name: String,
        joined_at: Instant,
    },

    /// The session moved to a new lifecycle phase
    PhaseChanged {
        session_id: SessionId,
        old_phase: Phase,
        new_phase: Phase,
        changed_at: Instant,
    },

    /// The session was torn down with its final membership counts
    SessionEnded {
        session_id: SessionId,
        contender_count: usize,
        audience_count: usize,
        ended_at: Instant,
    },
}

/// Handler for session events
#[async_trait]
pub trait SessionEventHandler: Send + Sync {
    async fn handle_event(&self, event: SessionEvent);
}
