//! Response reading
//!
//! Every reply is a run of status lines, some of which announce a counted
//! data block. One driver reads them all: it classifies each status line
//! against a per-command table and either hands the stream to a block
//! reader, finishes, or turns the status into an error.

use std::collections::HashSet;
use std::io::BufRead;

use super::atoms::{split_atoms, split_name_description};
use super::codec::{read_line, read_text_line, TERMINATOR};
use super::status::{self, status_code};
use crate::error::{DictError, Result};
use crate::model::{Database, DatabaseRegistry, Definition, MatchingStrategy};

// =============================================================================
// Status Tables
// =============================================================================

/// Server refusals that map to a dedicated error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidDatabase,
    InvalidStrategy,
    Syntax,
}

impl Rejection {
    fn into_error(self, line: &str) -> DictError {
        let message = line.to_string();
        match self {
            Rejection::InvalidDatabase => DictError::InvalidDatabase(message),
            Rejection::InvalidStrategy => DictError::InvalidStrategy(message),
            Rejection::Syntax => DictError::Syntax(message),
        }
    }
}

/// What to do when a status code is seen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    /// A block of `n` items follows; `n` is the second atom of the line
    Block,
    /// The reply is complete
    Done,
    /// The reply is an error
    Reject(Rejection),
}

/// Status code → action, scanned in order
pub type ResponseTable = [(u16, StatusAction)];

pub const SHOW_DB: &ResponseTable = &[
    (status::DATABASES_PRESENT, StatusAction::Block),
    (status::OK, StatusAction::Done),
    (status::NO_DATABASES, StatusAction::Done),
];

pub const SHOW_STRAT: &ResponseTable = &[
    (status::STRATEGIES_AVAILABLE, StatusAction::Block),
    (status::OK, StatusAction::Done),
    (status::NO_STRATEGIES, StatusAction::Done),
];

pub const DEFINE: &ResponseTable = &[
    (status::DEFINITIONS_RETRIEVED, StatusAction::Block),
    (status::OK, StatusAction::Done),
    (status::NO_MATCH, StatusAction::Done),
    (status::INVALID_DATABASE, StatusAction::Reject(Rejection::InvalidDatabase)),
    (status::SYNTAX_ERROR, StatusAction::Reject(Rejection::Syntax)),
];

pub const MATCH: &ResponseTable = &[
    (status::MATCHES_FOUND, StatusAction::Block),
    (status::OK, StatusAction::Done),
    (status::NO_MATCH, StatusAction::Done),
    (status::INVALID_DATABASE, StatusAction::Reject(Rejection::InvalidDatabase)),
    (status::INVALID_STRATEGY, StatusAction::Reject(Rejection::InvalidStrategy)),
    (status::SYNTAX_ERROR, StatusAction::Reject(Rejection::Syntax)),
];

// =============================================================================
// Driver
// =============================================================================

/// Read a reply until a terminal status, returning that status code
///
/// Lone `.` lines between status lines are skipped. `on_block` receives the
/// stream and the announced item count for every `Block` status.
pub fn read_response<R, F>(reader: &mut R, table: &ResponseTable, mut on_block: F) -> Result<u16>
where
    R: BufRead,
    F: FnMut(&mut R, usize) -> Result<()>,
{
    loop {
        let line = read_line(reader)?;
        if line == TERMINATOR {
            continue;
        }

        let code = status_code(&line)
            .ok_or_else(|| DictError::Protocol(format!("Expected status line, got {:?}", line)))?;

        let action = table
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, action)| action)
            .ok_or_else(|| DictError::Protocol(format!("Unexpected status: {}", line)))?;

        match action {
            StatusAction::Block => {
                let count = block_count(&line)?;
                tracing::debug!(status = code, count, "Reading block");
                on_block(reader, count)?;
            }
            StatusAction::Done => {
                tracing::debug!(status = code, "Reply complete");
                return Ok(code);
            }
            StatusAction::Reject(rejection) => {
                tracing::debug!(status = code, "Request rejected");
                return Err(rejection.into_error(&line));
            }
        }
    }
}

/// Read a single status line and require a specific code
///
/// Returns the full line on success.
pub fn expect_status<R: BufRead>(reader: &mut R, expected: u16) -> Result<String> {
    let line = read_line(reader)?;
    match status_code(&line) {
        Some(code) if code == expected => Ok(line),
        _ => Err(DictError::Protocol(format!(
            "Expected status {}, got {:?}",
            expected, line
        ))),
    }
}

/// Item count announced by a block status line, e.g. `110 3 databases`
fn block_count(line: &str) -> Result<usize> {
    split_atoms(line)
        .get(1)
        .and_then(|atom| atom.parse().ok())
        .ok_or_else(|| DictError::Protocol(format!("Missing item count in {:?}", line)))
}

/// Read the next content line of a counted block
fn next_item<R: BufRead>(reader: &mut R, what: &str, index: usize, count: usize) -> Result<String> {
    read_text_line(reader)?.ok_or_else(|| {
        DictError::Protocol(format!(
            "{} truncated: expected {} entries, got {}",
            what, count, index
        ))
    })
}

// =============================================================================
// Command Replies
// =============================================================================

/// Parse the reply to `SHOW DB`
///
/// Entries are returned in server order; nothing is returned unless the whole
/// reply parsed, so a failed listing never half-fills a registry.
pub fn read_database_list<R: BufRead>(reader: &mut R) -> Result<Vec<Database>> {
    let mut databases = Vec::new();

    read_response(reader, SHOW_DB, |reader, count| {
        for i in 0..count {
            let line = next_item(reader, "Database list", i, count)?;
            let (name, description) = split_name_description(&line)
                .ok_or_else(|| DictError::Protocol("Empty database entry".to_string()))?;
            databases.push(Database::new(name, description));
        }
        Ok(())
    })?;

    Ok(databases)
}

/// Parse the reply to `SHOW STRAT`, dropping repeated names
pub fn read_strategy_list<R: BufRead>(reader: &mut R) -> Result<Vec<MatchingStrategy>> {
    let mut strategies = Vec::new();
    let mut seen = HashSet::new();

    read_response(reader, SHOW_STRAT, |reader, count| {
        for i in 0..count {
            let line = next_item(reader, "Strategy list", i, count)?;
            let (name, description) = split_name_description(&line)
                .ok_or_else(|| DictError::Protocol("Empty strategy entry".to_string()))?;
            if seen.insert(name.clone()) {
                strategies.push(MatchingStrategy::new(name, description));
            }
        }
        Ok(())
    })?;

    Ok(strategies)
}

/// Parse the reply to `DEFINE`
///
/// Database names in the `151` headers resolve through `registry`.
pub fn read_definitions<R: BufRead>(
    reader: &mut R,
    registry: &DatabaseRegistry,
) -> Result<Vec<Definition>> {
    let mut definitions = Vec::new();

    read_response(reader, DEFINE, |reader, count| {
        for _ in 0..count {
            definitions.push(read_definition(reader, registry)?);
        }
        Ok(())
    })?;

    Ok(definitions)
}

/// Read one `151` header and the text block after it
fn read_definition<R: BufRead>(reader: &mut R, registry: &DatabaseRegistry) -> Result<Definition> {
    let header = read_line(reader)?;
    if status_code(&header) != Some(status::DEFINITION_FOLLOWS) {
        return Err(DictError::Protocol(format!(
            "Expected definition header, got {:?}",
            header
        )));
    }

    // 151 "word" dbname "db description"
    let mut atoms = split_atoms(header.as_str()).into_iter().skip(1);
    let (word, name) = match (atoms.next(), atoms.next()) {
        (Some(word), Some(name)) => (word, name),
        _ => {
            return Err(DictError::Protocol(format!(
                "Malformed definition header {:?}",
                header
            )))
        }
    };
    let description = atoms.next().unwrap_or_default();

    let mut definition = Definition::new(word, registry.resolve(&name, &description));
    while let Some(line) = read_text_line(reader)? {
        definition.push_line(line);
    }

    Ok(definition)
}

/// Parse the reply to `MATCH`, collapsing repeated words
pub fn read_match_list<R: BufRead>(reader: &mut R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut seen = HashSet::new();

    read_response(reader, MATCH, |reader, count| {
        for i in 0..count {
            let line = next_item(reader, "Match list", i, count)?;
            // db "word", or just the word from lenient servers
            let mut atoms = split_atoms(line.as_str());
            let word = match atoms.len() {
                0 => return Err(DictError::Protocol("Empty match entry".to_string())),
                1 => atoms.remove(0),
                _ => atoms.swap_remove(1),
            };
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
        Ok(())
    })?;

    Ok(words)
}
