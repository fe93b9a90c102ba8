//! Network Module
//!
//! TCP connection handling and the DICT session built on it.
//!
//! ## Architecture
//! - One socket per session, split into buffered reader/writer halves
//! - One command in flight at a time, serialized by the session lock
//! - Replies parsed by `crate::protocol`

mod connection;
mod session;

pub use connection::Connection;
pub use session::{DictSession, InterruptHandle, SessionState};
