//! Session Implementation
//!
//! The single source of truth for one game session: its phase and its
//! membership lists. All mutation happens through the methods here so the
//! `updated_at` stamp stays honest; serializing those mutations is the
//! coordinator's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::{Phase, SessionId, SessionSummary};

/// An active player competing in the session, holding one capacity slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contender {
    /// Non-empty, unique within the owning session (case-sensitive)
    pub name: String,
    /// Back-reference to the owning session
    pub session_id: SessionId,
    pub joined_at: DateTime<Utc>,
}

/// A joined participant who does not compete
///
/// Audience names are not uniqueness-constrained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceMember {
    pub name: String,
    pub session_id: SessionId,
    pub joined_at: DateTime<Utc>,
}

/// Internal session state
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session identifier, immutable after creation
    pub id: SessionId,

    /// Current lifecycle phase
    pub phase: Phase,

    /// Contenders in join order, capped at the configured capacity
    pub contenders: Vec<Contender>,

    /// Audience members in join order, unbounded
    pub audience: Vec<AudienceMember>,

    /// When this session was created
    pub created_at: std::time::Instant,

    /// When this session was last updated
    pub updated_at: std::time::Instant,
}

impl Session {
    /// Create a new session in the joining phase with empty membership
    pub fn new(id: SessionId) -> Self {
        let now = std::time::Instant::now();
        Self {
            id,
            phase: Phase::Joining,
            contenders: Vec::new(),
            audience: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Number of occupied contender slots
    pub fn contender_count(&self) -> usize {
        self.contenders.len()
    }

    /// Whether a contender with exactly this name already joined
    pub fn has_contender(&self, name: &str) -> bool {
        self.contenders.iter().any(|c| c.name == name)
    }

    /// Contender names in join order
    pub fn contender_names(&self) -> Vec<String> {
        self.contenders.iter().map(|c| c.name.clone()).collect()
    }

    /// Set the lifecycle phase
    ///
    /// Callers go through `lifecycle` for the legality check; this only
    /// records the change.
    pub fn set_phase(&mut self, phase: Phase) {
        tracing::debug!("Session {} phase: {} -> {}", self.id, self.phase, phase);
        self.phase = phase;
        self.updated_at = std::time::Instant::now();
    }

    /// Append a contender, returning the slot index it occupies
    pub fn add_contender(&mut self, name: &str) -> usize {
        self.contenders.push(Contender {
            name: name.to_string(),
            session_id: self.id.clone(),
            joined_at: Utc::now(),
        });
        self.updated_at = std::time::Instant::now();
        let slot = self.contenders.len() - 1;
        tracing::debug!("Session {}: contender \"{}\" took slot {}", self.id, name, slot);
        slot
    }

    /// Append an audience member
    pub fn add_audience_member(&mut self, name: &str) {
        self.audience.push(AudienceMember {
            name: name.to_string(),
            session_id: self.id.clone(),
            joined_at: Utc::now(),
        });
        self.updated_at = std::time::Instant::now();
        tracing::debug!("Session {}: \"{}\" joined the audience", self.id, name);
    }

    /// Snapshot for the read-side API
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id.clone(),
            phase: self.phase,
            contender_names: self.contender_names(),
            audience_size: self.audience.len(),
        }
    }
}
