//! Database registry
//!
//! Session-scoped name → Database map that keeps the server's order.

use std::collections::HashMap;
use std::sync::Arc;

use super::Database;

/// Databases advertised by the server, in advertised order
///
/// Filled once by the first successful database listing and never cleared
/// while the session lives. A new connection starts with a new registry.
#[derive(Debug, Default)]
pub struct DatabaseRegistry {
    /// Databases in insertion order
    entries: Vec<Arc<Database>>,

    /// Name → position in `entries`
    index: HashMap<String, usize>,
}

impl DatabaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a database, returning the shared handle
    ///
    /// A name that is already present keeps its original entry and position.
    pub fn insert(&mut self, database: Database) -> Arc<Database> {
        if let Some(&pos) = self.index.get(database.name()) {
            return Arc::clone(&self.entries[pos]);
        }

        let database = Arc::new(database);
        self.index
            .insert(database.name().to_string(), self.entries.len());
        self.entries.push(Arc::clone(&database));
        database
    }

    /// Look up a database by name
    pub fn get(&self, name: &str) -> Option<Arc<Database>> {
        self.index
            .get(name)
            .map(|&pos| Arc::clone(&self.entries[pos]))
    }

    /// Resolve a name seen in a definition header
    ///
    /// Unknown names still resolve, to a database built from what the header
    /// carried, so one missing entry cannot sink an otherwise good reply.
    pub fn resolve(&self, name: &str, description: &str) -> Arc<Database> {
        match self.get(name) {
            Some(database) => database,
            None => {
                tracing::warn!(database = %name, "Definition from unlisted database");
                Arc::new(Database::new(name, description))
            }
        }
    }

    /// All databases in advertised order
    pub fn databases(&self) -> Vec<Arc<Database>> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
