//! Session event tests
//!
//! Named-handler registration and the event stream a game-master screen
//! consumes while a lobby fills up.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use partyline_session_core::{
    Phase, SessionConfig, SessionControl, SessionCoordinator, SessionEvent,
    SessionEventHandler,
};

/// Test event handler that counts and records events
struct CountingEventHandler {
    count: AtomicUsize,
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl CountingEventHandler {
    fn new() -> (Arc<Self>, Arc<Mutex<Vec<SessionEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let handler = Arc::new(Self {
            count: AtomicUsize::new(0),
            events: events.clone(),
        });
        (handler, events)
    }

    fn get_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionEventHandler for CountingEventHandler {
    async fn handle_event(&self, event: SessionEvent) {
        self.count.fetch_add(1, Ordering::SeqCst);
        let mut events = self.events.lock().await;
        events.push(event);
    }
}

#[tokio::test]
async fn test_event_handler_management() {
    let coordinator = SessionCoordinator::new(SessionConfig::default());

    assert_eq!(coordinator.event_handler_count().await, 0);

    let (handler1, _) = CountingEventHandler::new();
    coordinator.add_event_handler("handler1", handler1.clone()).await;
    assert_eq!(coordinator.event_handler_count().await, 1);

    let (handler2, _) = CountingEventHandler::new();
    coordinator.add_event_handler("handler2", handler2.clone()).await;
    assert_eq!(coordinator.event_handler_count().await, 2);

    // Both handlers see the same event
    let session_id = coordinator.create_session().await.unwrap();
    assert_eq!(handler1.get_count(), 1);
    assert_eq!(handler2.get_count(), 1);

    assert!(coordinator.remove_event_handler("handler1").await);
    assert_eq!(coordinator.event_handler_count().await, 1);
    assert!(!coordinator.remove_event_handler("nonexistent").await);

    // Only the remaining handler sees the teardown
    coordinator.end_session(&session_id).await.unwrap();
    assert_eq!(handler1.get_count(), 1);
    assert_eq!(handler2.get_count(), 2);
}

#[tokio::test]
async fn test_lobby_event_stream() {
    let coordinator = SessionCoordinator::new(SessionConfig::default());
    let (handler, events) = CountingEventHandler::new();
    coordinator.add_event_handler("recorder", handler).await;

    let session_id = coordinator.create_session().await.unwrap();
    coordinator.join_session(&session_id, "Liz").await.unwrap();
    coordinator.join_session(&session_id, "Anthony").await.unwrap();
    coordinator.end_session(&session_id).await.unwrap();

    let events = events.lock().await;
    assert_eq!(events.len(), 4);
    assert!(matches!(&events[0], SessionEvent::SessionCreated { session_id: id, .. } if *id == session_id));
    assert!(matches!(&events[1], SessionEvent::ContenderJoined { name, slot: 0, .. } if name == "Liz"));
    assert!(matches!(&events[2], SessionEvent::ContenderJoined { name, slot: 1, .. } if name == "Anthony"));
    assert!(matches!(
        &events[3],
        SessionEvent::SessionEnded { contender_count: 2, audience_count: 0, .. }
    ));
}

#[tokio::test]
async fn test_overflow_join_emits_audience_event() {
    let config = SessionConfig {
        max_contenders: 1,
        ..SessionConfig::default()
    };
    let coordinator = SessionCoordinator::new(config);
    let (handler, events) = CountingEventHandler::new();
    coordinator.add_event_handler("recorder", handler).await;

    let session_id = coordinator.create_session().await.unwrap();
    coordinator.join_session(&session_id, "Liz").await.unwrap();
    coordinator.join_session(&session_id, "Anthony").await.unwrap();

    let events = events.lock().await;
    assert!(matches!(&events[1], SessionEvent::ContenderJoined { name, .. } if name == "Liz"));
    assert!(matches!(&events[2], SessionEvent::AudienceJoined { name, .. } if name == "Anthony"));
}

#[tokio::test]
async fn test_start_emits_phase_change() {
    let coordinator = SessionCoordinator::new(SessionConfig::default());
    let (handler, events) = CountingEventHandler::new();
    coordinator.add_event_handler("recorder", handler).await;

    let session_id = coordinator.create_session().await.unwrap();
    coordinator.start_session(&session_id).await.unwrap();

    let events = events.lock().await;
    assert!(matches!(
        &events[1],
        SessionEvent::PhaseChanged { old_phase: Phase::Joining, new_phase: Phase::Active, .. }
    ));
}

#[tokio::test]
async fn test_rejected_join_emits_no_event() {
    let coordinator = SessionCoordinator::new(SessionConfig::default());
    let (handler, _) = CountingEventHandler::new();
    coordinator.add_event_handler("recorder", handler.clone()).await;

    let session_id = coordinator.create_session().await.unwrap();
    coordinator.join_session(&session_id, "Liz").await.unwrap();
    let before = handler.get_count();

    coordinator.join_session(&session_id, "Liz").await.unwrap();
    coordinator.join_session(&session_id, "  ").await.unwrap();

    assert_eq!(handler.get_count(), before);
}
