//! Status codes
//!
//! Every DICT response line starts with a three digit status code.

/// `110 n databases present`
pub const DATABASES_PRESENT: u16 = 110;
/// `111 n strategies available`
pub const STRATEGIES_AVAILABLE: u16 = 111;
/// `150 n definitions retrieved`
pub const DEFINITIONS_RETRIEVED: u16 = 150;
/// `151 word database name`
pub const DEFINITION_FOLLOWS: u16 = 151;
/// `152 n matches found`
pub const MATCHES_FOUND: u16 = 152;
/// Greeting banner
pub const READY: u16 = 220;
/// Command complete
pub const OK: u16 = 250;
/// Syntax error, illegal parameters
pub const SYNTAX_ERROR: u16 = 501;
pub const INVALID_DATABASE: u16 = 550;
pub const INVALID_STRATEGY: u16 = 551;
pub const NO_MATCH: u16 = 552;
pub const NO_DATABASES: u16 = 554;
pub const NO_STRATEGIES: u16 = 555;

/// Parse the status code at the start of a response line
///
/// Returns `None` unless the line begins with exactly three ASCII digits
/// followed by whitespace or the end of the line.
pub fn status_code(line: &str) -> Option<u16> {
    let bytes = line.as_bytes();
    if bytes.len() < 3 || !bytes[..3].iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 3 && !bytes[3].is_ascii_whitespace() {
        return None;
    }
    line[..3].parse().ok()
}
