//! Filesystem scanning — stage 1 of the cardpress pipeline.
//!
//! Walks the source tree and turns every front image into a [`Card`].
//!
//! ## Discovery rules
//!
//! - Any file whose name ends in `.png` is a candidate.
//! - A filename containing the substring `back` is a back image. Backs are
//!   never discovered on their own; each card derives its back path from
//!   its front, so the corresponding `-back.png` file is simply expected
//!   to exist when the document is compiled.
//! - Everything else (rule sheets, scans, stray exports) is ignored.
//!
//! Every discovered front must follow the `gh-NNN[a|b]` naming grammar.
//! A front that does not parse aborts the scan: print order comes from the
//! identifier, so an unidentifiable card cannot be placed.
//!
//! Directory entries are visited in filename order. Final print order is
//! decided later by the qualifier sort; sorted traversal just keeps scan
//! listings and error messages stable across platforms.

use crate::card::Card;
use crate::metadata::ItemIndex;
use crate::naming::ParseError;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Name(#[from] ParseError),
}

/// File extension of card images.
const IMAGE_EXT: &str = ".png";

/// Substring marking a file as a back image, excluded from discovery.
const BACK_MARKER: &str = "back";

/// Walk `root` and build a card for every front image found.
///
/// Cards come back in traversal order; callers sort them before layout.
pub fn scan(root: &Path, items: &ItemIndex) -> Result<Vec<Card>, ScanError> {
    let mut cards = Vec::new();

    let walker = WalkDir::new(root).sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(IMAGE_EXT) || name.contains(BACK_MARKER) {
            continue;
        }
        let front_path = entry.path().to_string_lossy().into_owned();
        cards.push(Card::from_front_path(&front_path, items)?);
    }

    Ok(cards)
}
