//! LaTeX rendering — stage 3 of the cardpress pipeline.
//!
//! Turns the row grid into a single `.tex` source: a front table, a page
//! break, and a back table, inside a minimal A4 document. All functions
//! here are pure string builders; writing the file and invoking `pdflatex`
//! happen in the CLI.
//!
//! ## Duplex mirroring
//!
//! The back table reverses each row left-to-right. Print the front page,
//! flip the sheet on its long edge, print the back page: every back lands
//! under its own front. Row order between the two tables stays identical —
//! only the cards within a row mirror.
//!
//! ## Table shape
//!
//! Both tables are 4-column `longtable`s with 1mm column separation, so a
//! row of 44mm cards fits an A4 page with 1mm margins. `longtable` rather
//! than `tabular` because the grid routinely spans several pages.

use crate::card::Card;
use crate::layout::Row;

/// Row terminator: LaTeX line break plus a newline for readable source.
const ROW_END: &str = "\\\\ \n";

/// Cell separator: alignment tab on its own line.
const CELL_SEP: &str = " &\n";

/// Render the front table: cards left-to-right in grid order.
pub fn front_table(rows: &[Row]) -> String {
    grid_table(rows, Card::front_markup, false)
}

/// Render the back table: each row mirrored for two-sided printing.
pub fn back_table(rows: &[Row]) -> String {
    grid_table(rows, Card::back_markup, true)
}

fn grid_table(rows: &[Row], cell: impl Fn(&Card) -> String, mirrored: bool) -> String {
    let mut contents = String::new();
    for row in rows {
        let cells: Vec<String> = if mirrored {
            row.iter().rev().map(&cell).collect()
        } else {
            row.iter().map(&cell).collect()
        };
        let line = cells.join(CELL_SEP);
        contents.push_str(line.trim_end());
        contents.push_str(ROW_END);
    }

    format!(
        "{{\\setlength{{\\tabcolsep}}{{1mm}}\n\
         \\begin{{longtable}}{{llll}}\n\
         {contents}\
         \\end{{longtable}}}}\n"
    )
}

/// Render the complete document: preamble, front table, page break, back
/// table.
///
/// The `\pdfximage` prologue forces immediate image embedding — without it
/// pdflatex defers reading the PNGs and can exhaust memory on large sheets.
pub fn render_document(rows: &[Row]) -> String {
    let fronts = front_table(rows);
    let backs = back_table(rows);

    format!(
        "\\let\\mypdfximage\\pdfximage\n\
         \\def\\pdfximage{{\\immediate\\mypdfximage}}\n\
         \\documentclass{{minimal}}\n\
         \\usepackage{{graphicx}}\n\
         \\usepackage[a4paper,margin=1mm]{{geometry}}\n\
         \\usepackage{{longtable}}\n\
         \\begin{{document}}\n\
         \\noindent\n\
         {fronts}\
         \\newpage\n\
         {backs}\
         \\end{{document}}\n"
    )
}
