//! Internal session model

mod session;

pub use session::{AudienceMember, Contender, Session};
