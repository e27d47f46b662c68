//! CLI output formatting for the pipeline stages.
//!
//! Output is information-centric: the primary line for every card is its
//! semantic identity — positional index, qualifier, copy count — with the
//! filesystem path shown as secondary context via an indented `Source:`
//! line.
//!
//! ```text
//! Cards
//! 001 gh-001a  deck marker
//!     Source: ./items/gh-001a.png
//! 002 gh-002  x3
//!     Source: ./items/gh-002.png
//!
//! Sheet
//! 4 copies in 1 row of 4
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::card::Card;
use crate::layout::{ROW_WIDTH, Row};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// One line per card: index, qualifier, and either the deck-marker tag or
/// a copy count when it differs from 1.
fn card_line(index: usize, card: &Card) -> String {
    let mut line = format!("{} gh-{}", format_index(index), card.qualifier);
    if card.is_deck_marker {
        line.push_str("  deck marker");
    } else if card.repeat_count > 1 {
        line.push_str(&format!("  x{}", card.repeat_count));
    }
    line
}

/// Format the scan stage: every discovered card with its source path.
pub fn format_scan_output(cards: &[Card]) -> Vec<String> {
    let mut lines = vec!["Cards".to_string()];
    for (idx, card) in cards.iter().enumerate() {
        lines.push(card_line(idx + 1, card));
        lines.push(format!("    Source: {}", card.front_path));
    }
    if cards.is_empty() {
        lines.push("    (no front images found)".to_string());
    }
    lines
}

/// Format the layout stage: copy total and grid shape.
pub fn format_layout_output(rows: &[Row]) -> Vec<String> {
    let copies: usize = rows.iter().map(Vec::len).sum();
    let full_rows = rows.iter().filter(|r| r.len() == ROW_WIDTH).count();
    let shape = match rows.len() - full_rows {
        0 => format!("{} rows of {}", full_rows, ROW_WIDTH),
        _ => format!(
            "{} rows of {} + 1 short row",
            full_rows,
            ROW_WIDTH
        ),
    };
    vec![
        "Sheet".to_string(),
        format!("{} copies in {}", copies, shape),
    ]
}

pub fn print_scan_output(cards: &[Card]) {
    for line in format_scan_output(cards) {
        println!("{}", line);
    }
}

pub fn print_layout_output(rows: &[Row]) {
    for line in format_layout_output(rows) {
        println!("{}", line);
    }
}
