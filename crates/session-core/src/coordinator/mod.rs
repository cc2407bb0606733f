//! Session Coordinator
//!
//! The concurrency-safe façade combining lifecycle gating, membership
//! admission, and session storage behind one callable surface.

mod coordinator;

pub use coordinator::SessionCoordinator;
