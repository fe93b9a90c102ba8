//! Tests for DatabaseRegistry
//!
//! These tests verify:
//! - Insertion order is kept
//! - Names stay unique
//! - Lookups share one allocation per database
//! - Unknown names resolve to a stand-in

use std::sync::Arc;

use dictwire::{Database, DatabaseRegistry};

#[test]
fn test_registry_starts_empty() {
    let registry = DatabaseRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.databases().is_empty());
}

#[test]
fn test_registry_keeps_insertion_order() {
    let mut registry = DatabaseRegistry::new();
    for name in ["wn", "gcide", "foldoc", "jargon", "elements"] {
        registry.insert(Database::new(name, format!("{} description", name)));
    }

    let names: Vec<String> = registry
        .databases()
        .iter()
        .map(|d| d.name().to_string())
        .collect();

    assert_eq!(names, vec!["wn", "gcide", "foldoc", "jargon", "elements"]);
}

#[test]
fn test_registry_duplicate_keeps_first() {
    let mut registry = DatabaseRegistry::new();
    let first = registry.insert(Database::new("wn", "WordNet"));
    let second = registry.insert(Database::new("wn", "Something else"));

    assert_eq!(registry.len(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.get("wn").unwrap().description(), "WordNet");
}

#[test]
fn test_registry_get_shares_entry() {
    let mut registry = DatabaseRegistry::new();
    let inserted = registry.insert(Database::new("wn", "WordNet"));

    let found = registry.get("wn").unwrap();
    assert!(Arc::ptr_eq(&inserted, &found));
    assert!(registry.get("gcide").is_none());
}

#[test]
fn test_registry_resolve_known_name() {
    let mut registry = DatabaseRegistry::new();
    let inserted = registry.insert(Database::new("wn", "WordNet"));

    let resolved = registry.resolve("wn", "ignored description");
    assert!(Arc::ptr_eq(&inserted, &resolved));
}

#[test]
fn test_registry_resolve_unknown_name() {
    let registry = DatabaseRegistry::new();

    let resolved = registry.resolve("vera", "V.E.R.A. -- Virtual Entity of Relevant Acronyms");

    assert_eq!(resolved.name(), "vera");
    assert_eq!(
        resolved.description(),
        "V.E.R.A. -- Virtual Entity of Relevant Acronyms"
    );
    assert!(registry.is_empty());
}

#[test]
fn test_sentinel_names() {
    assert_eq!(Database::ALL, "*");
    assert_eq!(Database::FIRST_MATCH, "!");
}
