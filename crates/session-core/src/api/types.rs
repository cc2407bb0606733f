//! Public API types for session coordination

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse lifecycle stage of a session, gating which operations are legal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Lobby is open; join requests are accepted
    Joining,
    /// Rounds are in play; admission is closed
    Active,
    /// Session is torn down. Terminal.
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Joining => write!(f, "joining"),
            Phase::Active => write!(f, "active"),
            Phase::Ended => write!(f, "ended"),
        }
    }
}

/// Role granted to an admitted participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Competing player holding one of the capacity slots
    Contender,
    /// Passive participant; unbounded in count
    Audience,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Contender => write!(f, "contender"),
            Role::Audience => write!(f, "audience"),
        }
    }
}

/// Machine-readable reason for a rejected join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// No session with the requested id
    SessionNotFound,
    /// Join attempted outside the joining phase
    PhaseClosed,
    /// Requested name is empty or blank
    InvalidName,
    /// Requested name already belongs to a contender in this session
    DuplicateName,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::SessionNotFound => write!(f, "session not found"),
            RejectReason::PhaseClosed => write!(f, "phase closed"),
            RejectReason::InvalidName => write!(f, "invalid name"),
            RejectReason::DuplicateName => write!(f, "duplicate name"),
        }
    }
}

/// Outcome of a join request
///
/// A rejection is distinct from an audience admission: an overflowing
/// session still admits fresh names into the audience, while a closed
/// phase or an unknown id rejects with a reason the caller can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinOutcome {
    /// Admitted with the given role
    Admitted(Role),
    /// Rejected with a machine-readable reason
    Rejected(RejectReason),
}

impl JoinOutcome {
    /// Whether the join was admitted (either role)
    pub fn is_admitted(&self) -> bool {
        matches!(self, JoinOutcome::Admitted(_))
    }

    /// The granted role, if admitted
    pub fn role(&self) -> Option<Role> {
        match self {
            JoinOutcome::Admitted(role) => Some(*role),
            JoinOutcome::Rejected(_) => None,
        }
    }
}

/// Read-side snapshot of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub phase: Phase,
    /// Contender names in join order
    pub contender_names: Vec<String>,
    pub audience_size: usize,
}

/// Aggregate counters across the coordinator's lifetime
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Sessions currently live in the store
    pub active_sessions: usize,
    /// Sessions created since the coordinator started
    pub total_created: usize,
    /// Sessions ended since the coordinator started
    pub total_ended: usize,
}
