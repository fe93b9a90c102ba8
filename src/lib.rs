//! # dictwire
//!
//! A blocking client for the DICT protocol (RFC 2229):
//! - Connect handshake and graceful `QUIT`
//! - Database and strategy listings
//! - Definition lookup (`DEFINE`) and word matching (`MATCH`)
//! - One command in flight per session, safe to share across threads
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Front end (CLI, GUI, ...)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       DictSession                           │
//! │          (session lock, database registry, state)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌───────────────┐
//!   │ Connection  │          │   Protocol    │
//!   │ (TCP, bufs) │─────────▶│ (lines, atoms,│
//!   └─────────────┘          │  reply tables)│
//!                            └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use dictwire::{Database, DictSession};
//!
//! let session = DictSession::open_default("dict.org")?;
//! for definition in session.define("cat", Database::ALL)? {
//!     println!("[{}]\n{}", definition.database().name(), definition.text());
//! }
//! session.close();
//! # Ok::<(), dictwire::DictError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod network;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DictError, Result};
pub use config::{Config, DEFAULT_PORT};
pub use model::{Database, DatabaseRegistry, Definition, MatchingStrategy};
pub use network::{DictSession, InterruptHandle, SessionState};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dictwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
