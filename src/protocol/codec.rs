//! Line codec
//!
//! Reading and writing protocol lines over buffered streams.
//!
//! ## Wire Format
//!
//! ```text
//! client → server   COMMAND arg "quoted arg"\r\n
//! server → client   NNN status text\r\n            (status line)
//!                   text line\r\n                  (block content)
//!                   ..leading dot doubled\r\n      (dot-stuffed content)
//!                   .\r\n                          (block terminator)
//! ```
//!
//! Servers may end lines with a bare LF; both forms are accepted.

use std::io::{BufRead, Read, Write};

use super::Command;
use crate::error::{DictError, Result};

/// A line consisting of a single dot ends a text block
pub const TERMINATOR: &str = ".";

/// Maximum accepted length of a single incoming line (64 KiB)
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

// =============================================================================
// Reading
// =============================================================================

/// Read one line, without its line terminator
///
/// Blocks until a full line is received. End of stream is reported as a
/// truncated response, since the server never closes mid-reply on its own.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    // Room for the content plus a CRLF terminator
    let limit = MAX_LINE_LENGTH as u64 + 2;
    let read = reader.by_ref().take(limit).read_until(b'\n', &mut buf)?;

    if read == 0 {
        return Err(DictError::Protocol(
            "Response truncated: connection closed by server".to_string(),
        ));
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    if buf.len() > MAX_LINE_LENGTH {
        return Err(DictError::Protocol(format!(
            "Line too long: exceeds {} bytes",
            MAX_LINE_LENGTH
        )));
    }

    let line = String::from_utf8_lossy(&buf).into_owned();
    tracing::trace!(line = %line, "<<");
    Ok(line)
}

/// Read one line of block content
///
/// Returns `None` at the block terminator. Dot-stuffed lines come back with
/// their leading dot removed.
pub fn read_text_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let line = read_line(reader)?;
    Ok(unstuff(line))
}

/// Undo dot-stuffing for a block content line
pub fn unstuff(line: String) -> Option<String> {
    if line == TERMINATOR {
        None
    } else if line.starts_with("..") {
        Some(line[1..].to_string())
    } else {
        Some(line)
    }
}

// =============================================================================
// Writing
// =============================================================================

/// Encode a command as a CRLF-terminated line
pub fn encode_command(command: &Command) -> Vec<u8> {
    format!("{}\r\n", command).into_bytes()
}

/// Write a command to a stream and flush it
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    tracing::trace!(line = %command, ">>");
    writer.write_all(&encode_command(command))?;
    writer.flush()?;
    Ok(())
}
