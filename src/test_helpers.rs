//! Shared test utilities for the cardpress test suite.
//!
//! Provides fixture-tree builders, item-index shorthands, and bulk
//! extractors over card collections.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = fixture_tree(&["gh-001a.png", "items/gh-002.png"]);
//! let cards = scan::scan(tmp.path(), &empty_index()).unwrap();
//! assert_eq!(front_names(&cards), vec!["gh-001a.png", "gh-002.png"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::card::Card;
use crate::metadata::{ItemIndex, ItemRecord};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory containing the given relative files.
///
/// Parent directories are created as needed; file contents are a stub —
/// discovery only looks at names.
pub fn fixture_tree(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for file in files {
        let path = tmp.path().join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, b"png stub").unwrap();
    }
    tmp
}

// =========================================================================
// Item index shorthands
// =========================================================================

/// An index with no records — every lookup defaults to one copy.
pub fn empty_index() -> ItemIndex {
    ItemIndex::from_records(Vec::new())
}

/// Build an index from `(number, count)` pairs.
pub fn index_of(entries: &[(u32, Option<u32>)]) -> ItemIndex {
    ItemIndex::from_records(
        entries
            .iter()
            .map(|&(number, count)| ItemRecord { number, count })
            .collect(),
    )
}

// =========================================================================
// Card builders
// =========================================================================

/// Construct cards from front paths, panicking on a parse failure.
pub fn cards_from(paths: &[&str], items: &ItemIndex) -> Vec<Card> {
    paths
        .iter()
        .map(|p| {
            Card::from_front_path(p, items)
                .unwrap_or_else(|e| panic!("fixture path '{p}' did not parse: {e}"))
        })
        .collect()
}

/// `n` distinct cards numbered `gh-001` through `gh-NNN`.
pub fn n_cards(n: usize, items: &ItemIndex) -> Vec<Card> {
    (1..=n)
        .map(|i| {
            let path = format!("gh-{i:03}.png");
            Card::from_front_path(&path, items).unwrap()
        })
        .collect()
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Front image file names (final path component) in collection order.
pub fn front_names(cards: &[Card]) -> Vec<String> {
    cards
        .iter()
        .map(|c| {
            Path::new(&c.front_path)
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

/// Qualifiers in collection order.
pub fn qualifiers(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.qualifier.clone()).collect()
}
