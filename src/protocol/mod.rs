//! Protocol Module
//!
//! The DICT wire protocol (RFC 2229) as used by the client.
//!
//! ## Exchange
//! ```text
//! C: DEFINE wn "cat"
//! S: 150 1 definitions retrieved
//! S: 151 "cat" wn "WordNet (r) 3.0 (2006)"
//! S: cat
//! S:     n 1: feline mammal usually having thick soft fur
//! S: .
//! S: 250 ok [d/m/c = 1/0/18; 0.000r 0.000u 0.000s]
//! ```
//!
//! ### Status Codes
//! - 1xx: preliminary, a text block follows (110, 111, 150, 151, 152)
//! - 2xx: completion (220 greeting, 221 bye, 250 ok)
//! - 5xx: refusal (501 syntax, 550 database, 551 strategy,
//!   552 no match, 554 no databases, 555 no strategies)

pub mod atoms;
pub mod status;
mod command;
mod codec;
mod response;

pub use atoms::{split_atoms, split_name_description};
pub use command::{quote, Command, CommandType};
pub use codec::{
    encode_command, read_line, read_text_line, unstuff, write_command, MAX_LINE_LENGTH, TERMINATOR,
};
pub use response::{
    expect_status, read_database_list, read_definitions, read_match_list, read_response,
    read_strategy_list, Rejection, ResponseTable, StatusAction,
};

/// Per-command status tables used by [`read_response`]
pub mod tables {
    pub use super::response::{DEFINE, MATCH, SHOW_DB, SHOW_STRAT};
}
