mod common;

use common::numbered_symbols;
use keylegend::consts::DEFAULT_PLACEHOLDER;
use keylegend::Grid;

const PH: &str = DEFAULT_PLACEHOLDER;

#[test]
fn test_exactly_thirty_fills_main_grid() {
    let grid = Grid::assemble(&numbered_symbols(30), PH);

    assert!(grid.rows.iter().flatten().all(|c| c != PH));
    assert!(grid.thumb_row.is_none());
    assert_eq!(grid.discarded, 0);
    assert_eq!(grid.rows[2][9], "K29");
}

#[test]
fn test_thirty_five_gives_partial_thumb_row() {
    let grid = Grid::assemble(&numbered_symbols(35), PH);

    assert!(grid.rows.iter().flatten().all(|c| c != PH));
    let thumb = grid.thumb_row.as_ref().expect("thumb row");
    assert_eq!(thumb.len(), 5);
    assert_eq!(thumb[0], "K30");
    assert_eq!(thumb[4], "K34");
    assert_eq!(grid.discarded, 0);
}

#[test]
fn test_forty_five_caps_thumb_row_and_reports_overflow() {
    let grid = Grid::assemble(&numbered_symbols(45), PH);

    let thumb = grid.thumb_row.as_ref().expect("thumb row");
    assert_eq!(thumb.len(), 10);
    assert_eq!(thumb[9], "K39");
    assert_eq!(grid.discarded, 5);
}

#[test]
fn test_twelve_leaves_placeholders() {
    let grid = Grid::assemble(&numbered_symbols(12), PH);

    assert_eq!(grid.rows[0].to_vec(), numbered_symbols(10));
    assert_eq!(grid.rows[1][0], "K10");
    assert_eq!(grid.rows[1][1], "K11");
    assert!(grid.rows[1][2..].iter().all(|c| c == PH));
    assert!(grid.rows[2].iter().all(|c| c == PH));
    assert!(grid.thumb_row.is_none());
}

#[test]
fn test_empty_layer_is_all_placeholders() {
    let grid = Grid::assemble(&[], "·");
    assert!(grid.rows.iter().flatten().all(|c| c == "·"));
    assert!(grid.thumb_row.is_none());
}

#[test]
fn test_thirty_one_gives_single_thumb_key() {
    let grid = Grid::assemble(&numbered_symbols(31), PH);
    assert_eq!(grid.thumb_row, Some(vec!["K30".to_string()]));
}

#[test]
fn test_cells_reading_order_and_halves() {
    let grid = Grid::assemble(&numbered_symbols(32), PH);

    let cells: Vec<&String> = grid.cells().collect();
    assert_eq!(cells.len(), 32);
    assert_eq!(cells[31], "K31");

    let left = grid.left_half(1).unwrap();
    let right = grid.right_half(1).unwrap();
    assert_eq!(left[0], "K10");
    assert_eq!(right[0], "K15");
    assert!(grid.left_half(3).is_none());
}
