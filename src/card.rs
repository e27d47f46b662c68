//! The card value type and its print order.
//!
//! A [`Card`] is built from a single front image path; everything else is
//! derived eagerly at construction time:
//!
//! - the back image path (`gh-001a.png` → `gh-001a-back.png`)
//! - the item number and ordering qualifier from [`crate::naming`]
//! - the deck-marker flag
//! - the repeat count from the item index, defaulted to 1
//!
//! Cards are plain immutable values after that. There is no lazy state and
//! no interior mutability, so cloning, sorting and expanding them is safe
//! by construction.
//!
//! ## Identity and order
//!
//! Identity is the front path; print order is the qualifier string compared
//! lexicographically (`"001a" < "001b" < "002"`). Both are exposed as
//! explicit functions ([`identity`], [`compare`]) rather than trait impls —
//! the sorting and dedup call sites name the rule they use, and no code
//! relies on implicit operator dispatch.

use crate::metadata::ItemIndex;
use crate::naming::{self, ParseError};
use std::cmp::Ordering;

/// Suffix inserted before the extension to derive the back image path.
const BACK_SUFFIX: &str = "-back";

/// Length of the `.png` extension stripped when deriving the back path.
const EXT_LEN: usize = 4;

/// One printable card: a front/back image pair plus derived metadata.
#[derive(Debug, Clone)]
pub struct Card {
    pub front_path: String,
    pub back_path: String,
    pub item_number: u32,
    /// Three digits plus optional letter, drives print order only.
    pub qualifier: String,
    /// Random item deck placeholder — printed once, count ignored.
    pub is_deck_marker: bool,
    /// Physical copies to print, always ≥ 1.
    pub repeat_count: u32,
}

impl Card {
    /// Build a card from a front image path, consulting the item index for
    /// the repeat count. Fails if the path does not follow the card naming
    /// grammar — a malformed asset means the input set is corrupt, and
    /// guessing would scramble the print order.
    pub fn from_front_path(front_path: &str, items: &ItemIndex) -> Result<Self, ParseError> {
        let stem_len = front_path.len().saturating_sub(EXT_LEN);
        let (stem, ext) = front_path.split_at(stem_len);
        let back_path = format!("{stem}{BACK_SUFFIX}{ext}");

        let qualifier = naming::qualifier_of(front_path)?;
        let item_number = naming::item_number_of(front_path)?;
        let is_deck_marker = naming::is_deck_marker(front_path);
        let repeat_count = items.repeat_count_for(item_number);

        Ok(Self {
            front_path: front_path.to_string(),
            back_path,
            item_number,
            qualifier,
            is_deck_marker,
            repeat_count,
        })
    }

    /// Re-derive a fresh card from the same front path. This re-runs the
    /// full construction contract, including the index lookup — not a field
    /// copy.
    pub fn duplicate(&self, items: &ItemIndex) -> Result<Self, ParseError> {
        Self::from_front_path(&self.front_path, items)
    }

    /// LaTeX directive embedding the front image at card size.
    pub fn front_markup(&self) -> String {
        includegraphics(&self.front_path)
    }

    /// LaTeX directive embedding the back image at card size.
    pub fn back_markup(&self) -> String {
        includegraphics(&self.back_path)
    }
}

/// Fixed-size image embed: physical Gloomhaven card dimensions.
fn includegraphics(path: &str) -> String {
    format!("\\includegraphics[width=44mm,height=68mm]{{{path}}}")
}

/// Identity key: two cards are the same card iff their front paths match.
pub fn identity(card: &Card) -> &str {
    &card.front_path
}

/// Print order: ascending lexicographic comparison of qualifiers.
///
/// Total over constructed cards, since construction already rejected any
/// path without a qualifier.
pub fn compare(a: &Card, b: &Card) -> Ordering {
    a.qualifier.cmp(&b.qualifier)
}
