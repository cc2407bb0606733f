//! Session Lifecycle
//!
//! Phase predicates and guarded transitions. The state machine:
//!
//! ```text
//! joining --(start)--> active --(end)--> ended
//! joining --(end)---------------------> ended   (abandoned lobby)
//! ```
//!
//! `ended` is terminal and `active` never regresses to `joining`. Illegal
//! transitions come back as `InvalidPhaseTransition` values, never panics.

use crate::api::types::Phase;
use crate::errors::{Result, SessionError};
use crate::session::Session;

/// True iff the session still accepts join requests
pub fn can_join(session: &Session) -> bool {
    session.phase == Phase::Joining
}

/// True for any non-terminal phase
pub fn can_end(session: &Session) -> bool {
    session.phase != Phase::Ended
}

/// Close the lobby and move into active play
pub fn transition_to_active(session: &mut Session) -> Result<()> {
    if !can_join(session) {
        return Err(SessionError::InvalidPhaseTransition {
            from: session.phase,
            to: Phase::Active,
        });
    }
    session.set_phase(Phase::Active);
    Ok(())
}

/// Move into the terminal ended phase
pub fn transition_to_ended(session: &mut Session) -> Result<()> {
    if !can_end(session) {
        return Err(SessionError::InvalidPhaseTransition {
            from: session.phase,
            to: Phase::Ended,
        });
    }
    session.set_phase(Phase::Ended);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::SessionId;

    #[test]
    fn test_joining_session_can_join_and_end() {
        let session = Session::new(SessionId::new());
        assert!(can_join(&session));
        assert!(can_end(&session));
    }

    #[test]
    fn test_start_closes_joining() {
        let mut session = Session::new(SessionId::new());
        transition_to_active(&mut session).unwrap();

        assert_eq!(session.phase, Phase::Active);
        assert!(!can_join(&session));
        assert!(can_end(&session));
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut session = Session::new(SessionId::new());
        transition_to_active(&mut session).unwrap();

        let err = transition_to_active(&mut session).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidPhaseTransition { from: Phase::Active, to: Phase::Active }
        ));
        assert_eq!(session.phase, Phase::Active);
    }

    #[test]
    fn test_abandoned_lobby_can_end_directly() {
        let mut session = Session::new(SessionId::new());
        transition_to_ended(&mut session).unwrap();
        assert_eq!(session.phase, Phase::Ended);
    }

    #[test]
    fn test_ended_is_terminal() {
        let mut session = Session::new(SessionId::new());
        transition_to_ended(&mut session).unwrap();

        assert!(!can_join(&session));
        assert!(!can_end(&session));
        assert!(transition_to_active(&mut session).is_err());
        assert!(transition_to_ended(&mut session).is_err());
        assert_eq!(session.phase, Phase::Ended);
    }
}
