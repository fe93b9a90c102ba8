//! Command definitions
//!
//! Represents the commands the client sends to a DICT server.

use std::fmt;

use crate::error::{DictError, Result};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    ShowDb,
    ShowStrat,
    Define,
    Match,
    Client,
    Quit,
}

impl CommandType {
    /// Keyword(s) that open the command line
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandType::ShowDb => "SHOW DB",
            CommandType::ShowStrat => "SHOW STRAT",
            CommandType::Define => "DEFINE",
            CommandType::Match => "MATCH",
            CommandType::Client => "CLIENT",
            CommandType::Quit => "QUIT",
        }
    }
}

/// A command ready to be written to the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the databases the server offers
    ShowDb,

    /// List the matching strategies the server supports
    ShowStrat,

    /// Look up definitions of a word
    Define { database: String, word: String },

    /// Look up words matching a pattern under a strategy
    Match {
        database: String,
        strategy: String,
        word: String,
    },

    /// Identify the client
    Client { text: String },

    /// End the session
    Quit,
}

impl Command {
    /// Build a DEFINE command, validating its arguments
    pub fn define(database: &str, word: &str) -> Result<Self> {
        validate_name("database", database)?;
        validate_text("word", word)?;
        Ok(Command::Define {
            database: database.to_string(),
            word: word.to_string(),
        })
    }

    /// Build a MATCH command, validating its arguments
    pub fn match_word(database: &str, strategy: &str, word: &str) -> Result<Self> {
        validate_name("database", database)?;
        validate_name("strategy", strategy)?;
        validate_text("word", word)?;
        Ok(Command::Match {
            database: database.to_string(),
            strategy: strategy.to_string(),
            word: word.to_string(),
        })
    }

    /// Build a CLIENT command, validating its text
    pub fn client(text: &str) -> Result<Self> {
        validate_text("client text", text)?;
        Ok(Command::Client {
            text: text.to_string(),
        })
    }

    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::ShowDb => CommandType::ShowDb,
            Command::ShowStrat => CommandType::ShowStrat,
            Command::Define { .. } => CommandType::Define,
            Command::Match { .. } => CommandType::Match,
            Command::Client { .. } => CommandType::Client,
            Command::Quit => CommandType::Quit,
        }
    }
}

/// Renders the command line without its CRLF terminator
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.command_type().keyword();
        match self {
            Command::ShowDb | Command::ShowStrat | Command::Quit => f.write_str(keyword),
            Command::Define { database, word } => {
                write!(f, "{} {} {}", keyword, database, quote(word))
            }
            Command::Match {
                database,
                strategy,
                word,
            } => write!(f, "{} {} {} {}", keyword, database, strategy, quote(word)),
            Command::Client { text } => write!(f, "{} {}", keyword, quote(text)),
        }
    }
}

/// Wrap a word in double quotes, escaping `"` and `\`
pub fn quote(word: &str) -> String {
    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push('"');
    for ch in word.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

fn validate_text(what: &str, value: &str) -> Result<()> {
    if value.contains(['\r', '\n']) {
        return Err(DictError::InvalidArgument(format!(
            "{} must not contain line breaks",
            what
        )));
    }
    Ok(())
}

/// Database and strategy names travel unquoted, so they must be one atom
fn validate_name(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DictError::InvalidArgument(format!("{} name is empty", what)));
    }
    if value.chars().any(|c| c.is_whitespace() || c == '"') {
        return Err(DictError::InvalidArgument(format!(
            "{} name {:?} must be a single atom",
            what, value
        )));
    }
    Ok(())
}
