//! Centralized path parsing for the card naming convention.
//!
//! Every card front image carries an identifier somewhere in its path:
//! the prefix token `gh-`, exactly three digits, and an optional trailing
//! letter `a` or `b`:
//!
//! ```text
//! ./items/gh-001a.png    → number 1,  qualifier "001a", deck marker
//! ./items/gh-014b.png    → number 14, qualifier "014b"
//! ./solo/gh-153.png      → number 153, qualifier "153"
//! ```
//!
//! The identifier is located by scanning, not anchoring: the first position
//! where the full prefix-plus-digits grammar matches wins, and a `gh-` not
//! followed by three digits is skipped rather than treated as a failure.
//!
//! ## Deck markers
//!
//! A path containing `gh-` + three digits + `a` marks the card as a random
//! item deck placeholder, printed exactly once regardless of its configured
//! count. The deck-marker check is an independent scan over the same string:
//! it may match at a later position than the qualifier (and in degenerate
//! inputs one check can succeed where the other fails). Callers must not
//! assume the two agree.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no card identifier matching `gh-NNN[a|b]` in path: {0}")]
    UnrecognizedPath(String),
}

/// Fixed prefix token bounding every card identifier.
const PREFIX: &str = "gh-";

/// One candidate identifier found in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ident<'a> {
    /// The three-digit group, as written (leading zeros preserved).
    digits: &'a str,
    /// The letter immediately after the digits, if it is `a` or `b`.
    letter: Option<char>,
}

/// Iterate every position where `gh-` is followed by exactly three ASCII
/// digits, in path order. Prefix occurrences without digits are skipped.
fn idents(path: &str) -> impl Iterator<Item = Ident<'_>> {
    let mut from = 0;
    std::iter::from_fn(move || {
        while let Some(pos) = path[from..].find(PREFIX) {
            let at = from + pos;
            from = at + 1;
            let rest = &path[at + PREFIX.len()..];
            let digits = match rest.get(..3) {
                Some(d) if d.bytes().all(|b| b.is_ascii_digit()) => d,
                _ => continue,
            };
            let letter = rest[3..].chars().next().filter(|c| *c == 'a' || *c == 'b');
            return Some(Ident { digits, letter });
        }
        None
    })
}

/// Whether the path names a random item deck marker: `gh-` + three digits
/// with the letter `a` directly after. Scans the whole path, so a marker
/// match may sit past a non-marker identifier.
pub fn is_deck_marker(path: &str) -> bool {
    idents(path).any(|i| i.letter == Some('a'))
}

/// Extract the ordering qualifier: the three digits plus the optional
/// trailing letter, e.g. `"001a"` or `"153"`.
pub fn qualifier_of(path: &str) -> Result<String, ParseError> {
    let ident = idents(path)
        .next()
        .ok_or_else(|| ParseError::UnrecognizedPath(path.to_string()))?;
    let mut qualifier = ident.digits.to_string();
    if let Some(letter) = ident.letter {
        qualifier.push(letter);
    }
    Ok(qualifier)
}

/// Extract the three-digit item number.
pub fn item_number_of(path: &str) -> Result<u32, ParseError> {
    let ident = idents(path)
        .next()
        .ok_or_else(|| ParseError::UnrecognizedPath(path.to_string()))?;
    // Three ASCII digits always parse into a u32
    Ok(ident.digits.parse().unwrap_or_default())
}
