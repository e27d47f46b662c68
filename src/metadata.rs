//! Item metadata loading and repeat-count lookup.
//!
//! Cards share one optional metadata source: an `items.json` file listing
//! item records, each with a `number` and an optional `count`:
//!
//! ```json
//! [
//!   { "number": 1, "count": 2 },
//!   { "number": 14 },
//!   { "number": 153, "count": null }
//! ]
//! ```
//!
//! The count says how many physical copies of the item go onto the sheet.
//! Most items have no entry at all, so the lookup is deliberately forgiving:
//! a missing record, an absent `count`, a `null`, or an explicit `0` all
//! resolve to a single copy. Only a positive count changes the layout.
//!
//! The index is loaded once by the entry point and passed down explicitly.
//! Nothing mutates it after construction.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One record from `items.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub number: u32,
    /// Copies to print. Absent, `null`, and `0` all mean one copy.
    #[serde(default)]
    pub count: Option<u32>,
}

/// Read-only index over the item records, keyed by item number.
#[derive(Debug, Default)]
pub struct ItemIndex {
    records: Vec<ItemRecord>,
}

impl ItemIndex {
    /// Load the index from a JSON file.
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<ItemRecord> = serde_json::from_str(&content)?;
        Ok(Self { records })
    }

    /// Build an index from in-memory records.
    pub fn from_records(records: Vec<ItemRecord>) -> Self {
        Self { records }
    }

    /// Copies to print for an item number. Never less than 1.
    ///
    /// Linear scan, first match wins — the file holds at most a few hundred
    /// records and duplicate numbers are not expected.
    pub fn repeat_count_for(&self, number: u32) -> u32 {
        self.records
            .iter()
            .find(|r| r.number == number)
            .and_then(|r| r.count)
            .filter(|&c| c > 0)
            .unwrap_or(1)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
