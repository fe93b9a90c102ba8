//! Atom Splitter Tests
//!
//! Tests for splitting server lines into atoms.

use dictwire::protocol::{split_atoms, split_name_description};

// =============================================================================
// Basic Splitting
// =============================================================================

#[test]
fn test_split_plain_words() {
    assert_eq!(split_atoms("alpha beta"), vec!["alpha", "beta"]);
}

#[test]
fn test_split_quoted_atom() {
    assert_eq!(split_atoms(r#""two words" three"#), vec!["two words", "three"]);
}

#[test]
fn test_split_terminator_is_empty() {
    assert!(split_atoms(".").is_empty());
}

#[test]
fn test_split_absent_line_is_empty() {
    assert!(split_atoms(None).is_empty());
}

#[test]
fn test_split_empty_line() {
    assert!(split_atoms("").is_empty());
    assert!(split_atoms("   \t ").is_empty());
}

#[test]
fn test_split_collapses_whitespace_runs() {
    assert_eq!(split_atoms("  a \t  b   c  "), vec!["a", "b", "c"]);
}

#[test]
fn test_split_dot_inside_line_is_data() {
    assert_eq!(split_atoms(". ."), vec![".", "."]);
    assert_eq!(split_atoms("..."), vec!["..."]);
}

// =============================================================================
// Server Lines
// =============================================================================

#[test]
fn test_split_definition_header() {
    let atoms = split_atoms(r#"151 "cat" wn "WordNet (r) 3.0 (2006)""#);
    assert_eq!(atoms, vec!["151", "cat", "wn", "WordNet (r) 3.0 (2006)"]);
}

#[test]
fn test_split_match_line() {
    assert_eq!(split_atoms(r#"dog-house "doghouse""#), vec!["dog-house", "doghouse"]);
}

#[test]
fn test_split_status_line() {
    let atoms = split_atoms("110 166 databases present");
    assert_eq!(atoms[0], "110");
    assert_eq!(atoms[1], "166");
}

// =============================================================================
// Malformed Quoting
// =============================================================================

#[test]
fn test_split_unterminated_quote_takes_rest() {
    assert_eq!(split_atoms(r#"a "b c"#), vec!["a", "b c"]);
}

#[test]
fn test_split_quote_inside_atom_joins() {
    assert_eq!(split_atoms(r#"ab"c d"e f"#), vec!["abc de", "f"]);
}

// =============================================================================
// Name / Description
// =============================================================================

#[test]
fn test_name_description_quoted() {
    let (name, description) = split_name_description(r#"wn "WordNet (r) 3.0 (2006)""#).unwrap();
    assert_eq!(name, "wn");
    assert_eq!(description, "WordNet (r) 3.0 (2006)");
}

#[test]
fn test_name_description_unquoted_is_trimmed() {
    let (name, description) = split_name_description("prefix   Match prefixes  ").unwrap();
    assert_eq!(name, "prefix");
    assert_eq!(description, "Match prefixes");
}
