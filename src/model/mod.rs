//! Model Module
//!
//! Values returned by a DICT session.
//!
//! ## Ownership
//! - `Database`: created while listing databases, owned by the session's
//!   `DatabaseRegistry`, shared with definitions through `Arc`
//! - `MatchingStrategy`: returned fresh by every strategy listing
//! - `Definition`: assembled line by line while a DEFINE reply streams in,
//!   then handed to the caller read-only

mod registry;

pub use registry::DatabaseRegistry;

use std::sync::Arc;

use serde::Serialize;

/// A dictionary database offered by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Database {
    name: String,
    description: String,
}

impl Database {
    /// Query every database (`*`)
    pub const ALL: &'static str = "*";

    /// Query databases in order, stop at the first with a result (`!`)
    pub const FIRST_MATCH: &'static str = "!";

    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Short identifier used on the wire
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A matching strategy supported by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchingStrategy {
    name: String,
    description: String,
}

impl MatchingStrategy {
    /// The server's default strategy (`.`)
    pub const DEFAULT: &'static str = ".";

    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// One definition of a word, as returned by a single database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    word: String,
    database: Arc<Database>,
    body: Vec<String>,
}

impl Definition {
    pub(crate) fn new(word: impl Into<String>, database: Arc<Database>) -> Self {
        Self {
            word: word.into(),
            database,
            body: Vec::new(),
        }
    }

    pub(crate) fn push_line(&mut self, line: String) {
        self.body.push(line);
    }

    /// The headword as reported by the server
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The database this definition came from
    pub fn database(&self) -> &Arc<Database> {
        &self.database
    }

    /// Body lines in server order, blank lines included
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Body joined with newlines
    pub fn text(&self) -> String {
        self.body.join("\n")
    }
}
