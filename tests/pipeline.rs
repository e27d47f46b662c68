//! End-to-end pipeline tests: fixture tree in, LaTeX document out.
//!
//! These exercise the library the way the CLI does — load the item index,
//! scan a real directory, lay out the sheet, render the document — without
//! invoking pdflatex.

use cardpress::metadata::ItemIndex;
use cardpress::{layout, render, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build a source tree with the given front images and an items.json.
fn fixture(files: &[&str], items_json: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for file in files {
        let path = tmp.path().join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"png stub").unwrap();
    }
    fs::write(tmp.path().join("items.json"), items_json).unwrap();
    tmp
}

fn load_index(root: &Path) -> ItemIndex {
    ItemIndex::load(&root.join("items.json")).unwrap()
}

#[test]
fn deck_marker_and_defaulted_count_make_one_short_row() {
    // The deck marker's count of 3 is ignored; 002b has no count and
    // defaults to one copy. Two cards, one row.
    let tmp = fixture(
        &["gh-001a.png", "gh-002b.png"],
        r#"[{"number": 1, "count": 3}, {"number": 2}]"#,
    );
    let items = load_index(tmp.path());

    let cards = scan::scan(tmp.path(), &items).unwrap();
    assert_eq!(cards.len(), 2);

    let rows = layout::build_rows(cards, &items).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[0][0].qualifier, "001a");
    assert_eq!(rows[0][1].qualifier, "002b");
}

#[test]
fn counts_expand_into_full_grid() {
    // 1a (marker, 1) + 002 x4 + 003 x3 + 004, 005 = 10 copies → 4/4/2
    let tmp = fixture(
        &[
            "items/gh-001a.png",
            "items/gh-002.png",
            "items/gh-003.png",
            "solo/gh-004.png",
            "solo/gh-005.png",
        ],
        r#"[{"number": 1, "count": 5}, {"number": 2, "count": 4}, {"number": 3, "count": 3}]"#,
    );
    let items = load_index(tmp.path());

    let cards = scan::scan(tmp.path(), &items).unwrap();
    let rows = layout::build_rows(cards, &items).unwrap();

    let sizes: Vec<usize> = rows.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![4, 4, 2]);

    let order: Vec<&str> = rows
        .iter()
        .flatten()
        .map(|c| c.qualifier.as_str())
        .collect();
    assert_eq!(
        order,
        vec!["001a", "002", "002", "002", "002", "003", "003", "003", "004", "005"]
    );
}

#[test]
fn back_images_are_never_scanned_but_always_rendered() {
    let tmp = fixture(
        &["gh-010.png", "gh-010-back.png", "gh-011b.png", "gh-011b-back.png"],
        "[]",
    );
    let items = load_index(tmp.path());

    let cards = scan::scan(tmp.path(), &items).unwrap();
    assert_eq!(cards.len(), 2);

    let rows = layout::build_rows(cards, &items).unwrap();
    let doc = render::render_document(&rows);
    assert!(doc.contains("gh-010-back.png}"));
    assert!(doc.contains("gh-011b-back.png}"));
}

#[test]
fn document_mirrors_back_rows_for_duplex_printing() {
    let tmp = fixture(
        &["gh-001a.png", "gh-002.png", "gh-003.png", "gh-004.png"],
        "[]",
    );
    let items = load_index(tmp.path());

    let cards = scan::scan(tmp.path(), &items).unwrap();
    let rows = layout::build_rows(cards, &items).unwrap();
    let doc = render::render_document(&rows);

    let (fronts, backs) = doc.split_once("\\newpage").unwrap();

    // Fronts ascend left to right; backs descend
    let front_001 = fronts.find("gh-001a.png}").unwrap();
    let front_004 = fronts.find("gh-004.png}").unwrap();
    assert!(front_001 < front_004);

    let back_001 = backs.find("gh-001a-back.png}").unwrap();
    let back_004 = backs.find("gh-004-back.png}").unwrap();
    assert!(back_004 < back_001);
}

#[test]
fn empty_source_tree_renders_a_valid_empty_document() {
    let tmp = fixture(&[], "[]");
    let items = load_index(tmp.path());

    let cards = scan::scan(tmp.path(), &items).unwrap();
    let rows = layout::build_rows(cards, &items).unwrap();
    assert!(rows.is_empty());

    let doc = render::render_document(&rows);
    assert!(doc.contains("\\begin{document}"));
    assert!(doc.ends_with("\\end{document}\n"));
    assert!(!doc.contains("includegraphics"));
}

#[test]
fn malformed_front_aborts_the_scan() {
    let tmp = fixture(&["gh-001a.png", "cover-art.png"], "[]");
    let items = load_index(tmp.path());
    assert!(scan::scan(tmp.path(), &items).is_err());
}
