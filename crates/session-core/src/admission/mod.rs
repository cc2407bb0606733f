//! Membership Admission
//!
//! Pure decision logic for join requests. Given a resolved session and a
//! requested name, `decide` picks the outcome without side effects; the
//! coordinator applies it under the session's exclusive section.

use crate::api::types::{JoinOutcome, RejectReason, Role};
use crate::lifecycle;
use crate::session::Session;

/// Decide the outcome of a join request.
///
/// The check order is a deliberate tie-break policy: phase gating dominates
/// capacity, and duplicate-name rejection dominates audience overflow, so a
/// returning name is never silently routed into the audience.
pub fn decide(session: &Session, requested_name: &str, max_contenders: usize) -> JoinOutcome {
    if !lifecycle::can_join(session) {
        return JoinOutcome::Rejected(RejectReason::PhaseClosed);
    }
    if requested_name.trim().is_empty() {
        return JoinOutcome::Rejected(RejectReason::InvalidName);
    }
    if session.has_contender(requested_name) {
        return JoinOutcome::Rejected(RejectReason::DuplicateName);
    }
    if session.contender_count() < max_contenders {
        JoinOutcome::Admitted(Role::Contender)
    } else {
        JoinOutcome::Admitted(Role::Audience)
    }
}
