//! Error types for dictwire
//!
//! Provides a unified error type for all session operations.

use thiserror::Error;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

/// Unified error type for DICT client operations
#[derive(Debug, Error)]
pub enum DictError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// Host unreachable, handshake rejected, socket I/O failure or timeout
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Session is not connected")]
    NotConnected,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Server answered 550
    #[error("Invalid database: {0}")]
    InvalidDatabase(String),

    /// Server answered 551
    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),

    /// Server answered 501
    #[error("Syntax error: {0}")]
    Syntax(String),

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DictError {
    /// Connection error without an underlying I/O cause
    pub fn connection(message: impl Into<String>) -> Self {
        DictError::Connection {
            message: message.into(),
            source: None,
        }
    }
}

impl From<std::io::Error> for DictError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut => {
                "timed out waiting for server".to_string()
            }
            std::io::ErrorKind::UnexpectedEof => "connection closed by server".to_string(),
            _ => err.to_string(),
        };
        DictError::Connection {
            message,
            source: Some(err),
        }
    }
}
