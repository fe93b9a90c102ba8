//! Atom splitting
//!
//! Breaks a server line into whitespace-separated atoms. Double-quoted
//! substrings form a single atom with the quotes removed.

use super::codec::TERMINATOR;

/// Split a line into atoms
///
/// An absent line or the block terminator `.` yields no atoms, which lets
/// callers tell a data line from the end of a block without a separate check.
/// Unbalanced quotes never fail: the rest of the line becomes the last atom.
pub fn split_atoms<'a>(line: impl Into<Option<&'a str>>) -> Vec<String> {
    let line = match line.into() {
        Some(line) if line != TERMINATOR => line,
        _ => return Vec::new(),
    };

    let mut atoms = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    // A closed pair of quotes counts as an atom even when empty
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    atoms.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() || quoted {
        atoms.push(current);
    }

    atoms
}

/// Split off the first atom and return it with the rest of the line
///
/// The rest is trimmed and loses one pair of surrounding quotes, so
/// `wn "WordNet (r) 3.0"` gives `("wn", "WordNet (r) 3.0")`.
pub fn split_name_description(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    let end = line.find(char::is_whitespace).unwrap_or(line.len());
    let name = split_atoms(&line[..end]).into_iter().next()?;

    let rest = line[end..].trim();
    let description = rest
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .unwrap_or(rest);

    Some((name, description.to_string()))
}
