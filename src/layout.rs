//! Print layout — stage 2 of the cardpress pipeline.
//!
//! Takes the scanned cards and produces the row grid the renderer consumes:
//!
//! ```text
//! sort      by qualifier, ascending ("001a" < "001b" < "002")
//! expand    one card per physical copy (deck markers stay single)
//! paginate  rows of 4, last row may be short
//! ```
//!
//! Expansion re-derives every copy from its front path instead of cloning
//! fields, so each copy independently went through the full construction
//! contract. Rows own their cards outright; no two rows share anything.

use crate::card::{self, Card};
use crate::metadata::ItemIndex;
use crate::naming::ParseError;

/// Cards per printed row.
pub const ROW_WIDTH: usize = 4;

/// One row of the print grid: 1 to [`ROW_WIDTH`] cards.
pub type Row = Vec<Card>;

/// Sort cards into print order, ascending by qualifier.
///
/// Stable, so re-sorting an already ordered set is a no-op.
pub fn sort_cards(cards: &mut [Card]) {
    cards.sort_by(card::compare);
}

/// Replicate each card by its repeat count.
///
/// Deck markers contribute exactly one copy no matter what the metadata
/// says — the random item deck placeholder is printed once. Every copy is
/// a fresh [`Card::duplicate`], not a clone.
pub fn expand(cards: &[Card], items: &ItemIndex) -> Result<Vec<Card>, ParseError> {
    let mut expanded = Vec::new();
    for card in cards {
        let copies = if card.is_deck_marker {
            1
        } else {
            card.repeat_count
        };
        for _ in 0..copies {
            expanded.push(card.duplicate(items)?);
        }
    }
    Ok(expanded)
}

/// Partition cards into rows of [`ROW_WIDTH`], preserving order.
///
/// The final row holds whatever remains (1 to 4 cards). Empty input yields
/// no rows — a row is only ever closed after receiving cards.
pub fn paginate(cards: Vec<Card>) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut row = Vec::with_capacity(ROW_WIDTH);
    for card in cards {
        if row.len() == ROW_WIDTH {
            rows.push(row);
            row = Vec::with_capacity(ROW_WIDTH);
        }
        row.push(card);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// The full layout stage: sort, expand, paginate.
pub fn build_rows(mut cards: Vec<Card>, items: &ItemIndex) -> Result<Vec<Row>, ParseError> {
    sort_cards(&mut cards);
    let expanded = expand(&cards, items)?;
    Ok(paginate(expanded))
}
