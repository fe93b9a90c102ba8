//! Codec Tests
//!
//! Tests for command encoding and line reading.

use std::io::Cursor;

use dictwire::protocol::status::{self, status_code};
use dictwire::protocol::{
    encode_command, quote, read_line, read_text_line, write_command, Command, CommandType,
    MAX_LINE_LENGTH,
};
use dictwire::DictError;

fn cursor(script: &str) -> Cursor<Vec<u8>> {
    Cursor::new(script.as_bytes().to_vec())
}

// =============================================================================
// Command Encoding
// =============================================================================

#[test]
fn test_encode_show_commands() {
    assert_eq!(encode_command(&Command::ShowDb), b"SHOW DB\r\n");
    assert_eq!(encode_command(&Command::ShowStrat), b"SHOW STRAT\r\n");
    assert_eq!(encode_command(&Command::Quit), b"QUIT\r\n");
}

#[test]
fn test_encode_define() {
    let cmd = Command::define("wn", "cat").unwrap();
    assert_eq!(cmd.command_type(), CommandType::Define);
    assert_eq!(encode_command(&cmd), b"DEFINE wn \"cat\"\r\n");
}

#[test]
fn test_encode_define_special_databases() {
    let all = Command::define("*", "hot dog").unwrap();
    assert_eq!(all.to_string(), r#"DEFINE * "hot dog""#);

    let first = Command::define("!", "cat").unwrap();
    assert_eq!(first.to_string(), r#"DEFINE ! "cat""#);
}

#[test]
fn test_encode_match() {
    let cmd = Command::match_word("*", "prefix", "dog").unwrap();
    assert_eq!(cmd.command_type(), CommandType::Match);
    assert_eq!(encode_command(&cmd), b"MATCH * prefix \"dog\"\r\n");
}

#[test]
fn test_encode_client() {
    let cmd = Command::client("dictwire 0.1").unwrap();
    assert_eq!(cmd.to_string(), r#"CLIENT "dictwire 0.1""#);
}

#[test]
fn test_quote_escapes() {
    assert_eq!(quote("plain"), r#""plain""#);
    assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
    assert_eq!(quote(r"back\slash"), r#""back\\slash""#);
}

#[test]
fn test_write_command_flushes_line() {
    let mut out = Vec::new();
    write_command(&mut out, &Command::define("wn", "cat").unwrap()).unwrap();
    assert_eq!(out, b"DEFINE wn \"cat\"\r\n");
}

// =============================================================================
// Argument Validation
// =============================================================================

#[test]
fn test_reject_line_break_in_word() {
    let result = Command::define("wn", "cat\r\nQUIT");
    assert!(matches!(result, Err(DictError::InvalidArgument(_))));
}

#[test]
fn test_reject_bad_database_names() {
    assert!(matches!(Command::define("", "cat"), Err(DictError::InvalidArgument(_))));
    assert!(matches!(Command::define("w n", "cat"), Err(DictError::InvalidArgument(_))));
}

#[test]
fn test_reject_bad_strategy_name() {
    let result = Command::match_word("*", "pre fix", "dog");
    assert!(matches!(result, Err(DictError::InvalidArgument(_))));
}

// =============================================================================
// Line Reading
// =============================================================================

#[test]
fn test_read_line_strips_crlf_and_lf() {
    let mut reader = cursor("220 ready\r\n250 ok\nlast");
    assert_eq!(read_line(&mut reader).unwrap(), "220 ready");
    assert_eq!(read_line(&mut reader).unwrap(), "250 ok");
    assert_eq!(read_line(&mut reader).unwrap(), "last");
}

#[test]
fn test_read_line_keeps_blank_lines() {
    let mut reader = cursor("\r\n\n");
    assert_eq!(read_line(&mut reader).unwrap(), "");
    assert_eq!(read_line(&mut reader).unwrap(), "");
}

#[test]
fn test_read_line_eof_is_truncation() {
    let mut reader = cursor("");
    assert!(matches!(read_line(&mut reader), Err(DictError::Protocol(_))));
}

#[test]
fn test_read_line_rejects_oversized_line() {
    let long = "x".repeat(MAX_LINE_LENGTH + 10);
    let mut reader = cursor(&format!("{}\r\n", long));
    assert!(matches!(read_line(&mut reader), Err(DictError::Protocol(_))));
}

#[test]
fn test_read_line_accepts_max_length() {
    let long = "x".repeat(MAX_LINE_LENGTH);
    let mut reader = cursor(&format!("{}\n", long));
    assert_eq!(read_line(&mut reader).unwrap().len(), MAX_LINE_LENGTH);
}

#[test]
fn test_read_line_accepts_max_length_crlf() {
    let long = "x".repeat(MAX_LINE_LENGTH);
    let mut reader = cursor(&format!("{}\r\n250 ok\r\n", long));
    assert_eq!(read_line(&mut reader).unwrap().len(), MAX_LINE_LENGTH);
    assert_eq!(read_line(&mut reader).unwrap(), "250 ok");
}

#[test]
fn test_read_line_rejects_one_past_max_length() {
    let long = "x".repeat(MAX_LINE_LENGTH + 1);
    let mut reader = cursor(&format!("{}\n", long));
    assert!(matches!(read_line(&mut reader), Err(DictError::Protocol(_))));

    let mut reader = cursor(&format!("{}\r\n", long));
    assert!(matches!(read_line(&mut reader), Err(DictError::Protocol(_))));
}

#[test]
fn test_read_line_lossy_utf8() {
    let mut reader = Cursor::new(b"caf\xe9\r\n".to_vec());
    assert_eq!(read_line(&mut reader).unwrap(), "caf\u{fffd}");
}

#[test]
fn test_read_text_line_terminator_and_unstuffing() {
    let mut reader = cursor("..hidden\r\n.. \r\nplain\r\n.\r\n");
    assert_eq!(read_text_line(&mut reader).unwrap().as_deref(), Some(".hidden"));
    assert_eq!(read_text_line(&mut reader).unwrap().as_deref(), Some(". "));
    assert_eq!(read_text_line(&mut reader).unwrap().as_deref(), Some("plain"));
    assert_eq!(read_text_line(&mut reader).unwrap(), None);
}

// =============================================================================
// Status Codes
// =============================================================================

#[test]
fn test_status_code_constants() {
    assert_eq!(status_code("110 3 databases present"), Some(status::DATABASES_PRESENT));
    assert_eq!(status_code("552 no match"), Some(status::NO_MATCH));
    assert_eq!(status_code("555 no strategies available"), Some(status::NO_STRATEGIES));
    assert_eq!(status_code("dog-house \"doghouse\""), None);
}
