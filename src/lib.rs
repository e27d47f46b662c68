//! # Cardpress
//!
//! Typesets print-and-play card sheets from image assets into a LaTeX
//! document. Your filesystem is the data source: front images anywhere
//! under the source tree are discovered by name, ordered by their embedded
//! identifier, replicated per the item metadata, and laid out on a 4-wide
//! grid with mirrored backs for two-sided printing.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan    source tree  →  Vec<Card>      (filesystem → card values)
//! 2. Layout  cards        →  Vec<Row>       (sort, expand, paginate)
//! 3. Render  rows         →  main.tex       (LaTeX front/back tables)
//! ```
//!
//! Each stage is a function from values to values (only scan touches the
//! filesystem), so pipeline logic is unit-testable without fixtures and the
//! CLI is thin glue. Compiling the `.tex` output to PDF is left to an
//! external `pdflatex` invocation.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `gh-NNN[a\|b]` identifier grammar: qualifier, number, deck marker |
//! | [`metadata`] | `items.json` index — item number → repeat count |
//! | [`card`] | The card value type: paths, markup directives, print order |
//! | [`scan`] | Stage 1 — walks the source tree, builds cards from front images |
//! | [`layout`] | Stage 2 — sorts, expands and paginates cards into the row grid |
//! | [`render`] | Stage 3 — renders the grid into the final LaTeX document |
//! | [`output`] | CLI output formatting — card listings and sheet summaries |
//!
//! # Design Decisions
//!
//! ## Structured Parsing Over Regex
//!
//! The identifier grammar (fixed `gh-` token, three digits, optional
//! `a`/`b`) is simple enough that [`naming`] parses it with a hand-rolled
//! scan instead of a regex dependency. The grammar is documented in one
//! place, failures carry the offending path, and there is no pattern
//! dialect to get subtly wrong.
//!
//! ## Eager Card Construction
//!
//! Every derived field of a [`card::Card`] — back path, number, qualifier,
//! deck-marker flag, repeat count — is computed at construction. A card
//! that constructs is fully ordered and fully printable; malformed assets
//! fail up front instead of mid-sort. Print order needs every card's
//! qualifier, so there is nothing useful to salvage from a partial parse.
//!
//! ## Explicit Metadata Injection
//!
//! The item index is loaded once by the CLI and passed into every stage
//! that needs it. No globals, no lazy statics: tests build throwaway
//! indexes inline, and [`card::Card::duplicate`] can honestly re-run the
//! whole construction contract against whatever index it is handed.
//!
//! ## LaTeX Over Direct PDF
//!
//! The renderer emits `longtable` LaTeX source rather than driving a PDF
//! library. TeX already solves page breaking and exact physical sizing
//! (44mm × 68mm cards on A4 with 1mm margins), the intermediate `.tex`
//! file is inspectable when a sheet comes out wrong, and `pdflatex` is a
//! one-line delegation.
//!
//! ## Mirrored Back Rows
//!
//! The back table reverses each row so that flipping the printed sheet
//! lines every back up under its front. This is the one piece of layout
//! logic that is easy to get wrong by hand and the reason this tool
//! exists.

pub mod card;
pub mod layout;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
