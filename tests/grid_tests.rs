//! Grid tests - slide/merge rules and end-of-game detection

use tui_2048::core::{merge_row, compact_row, Grid, GridError, Row};
use tui_2048::types::{Direction, MAX_TILE, NUM_COLS, NUM_ROWS};

fn grid(values: [[u32; NUM_COLS]; NUM_ROWS]) -> Grid {
    Grid::from_values(values).unwrap()
}

fn values(grid: &Grid) -> [[u32; NUM_COLS]; NUM_ROWS] {
    let mut out = [[0; NUM_COLS]; NUM_ROWS];
    grid.write_u32_grid(&mut out);
    out
}

#[test]
fn test_left_merges_leading_pair_only() {
    let mut g = grid([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]);
    let gained = g.slide(Direction::Left);
    assert_eq!(values(&g)[0], [4, 4, 0, 0]);
    assert_eq!(gained, 4);
}

#[test]
fn test_left_merges_four_equal_tiles_pairwise() {
    let mut g = grid([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let gained = g.slide(Direction::Left);
    assert_eq!(values(&g)[0], [4, 4, 0, 0]);
    assert_eq!(gained, 8);
}

#[test]
fn test_merge_across_gaps() {
    let mut g = grid([[2, 0, 0, 2], [4, 0, 4, 4], [0; 4], [0; 4]]);
    let gained = g.slide(Direction::Left);
    assert_eq!(values(&g)[0], [4, 0, 0, 0]);
    assert_eq!(values(&g)[1], [8, 4, 0, 0]);
    assert_eq!(gained, 12);
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    let mut g = grid([[4, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
    g.slide(Direction::Left);
    assert_eq!(values(&g)[0], [4, 4, 0, 0]);
}

#[test]
fn test_right_is_mirrored_left() {
    let mut g = grid([[2, 2, 4, 0], [0, 2, 0, 2], [0; 4], [0; 4]]);
    let gained = g.slide(Direction::Right);
    assert_eq!(values(&g)[0], [0, 0, 4, 4]);
    assert_eq!(values(&g)[1], [0, 0, 0, 4]);
    assert_eq!(gained, 8);
}

#[test]
fn test_up_and_down_work_on_columns() {
    let start = grid([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 8], [0, 0, 0, 8]]);

    let mut up = start;
    assert_eq!(up.slide(Direction::Up), 20);
    assert_eq!(
        values(&up),
        [[4, 0, 0, 16], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
    );

    let mut down = start;
    assert_eq!(down.slide(Direction::Down), 20);
    assert_eq!(
        values(&down),
        [[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 16]]
    );
}

#[test]
fn test_packed_merge_free_grid_stays_put() {
    // All values distinct, so no slide can ever merge.
    let start = grid([
        [2, 0, 4, 0],
        [0, 8, 0, 16],
        [32, 0, 0, 64],
        [0, 128, 256, 0],
    ]);
    for direction in Direction::ALL {
        let mut g = start;
        g.slide(direction);
        let packed = g;
        assert_eq!(g.slide(direction), 0, "{direction}");
        assert_eq!(g, packed, "second {direction} move changed the grid");
    }
}

#[test]
fn test_row_helpers() {
    let mut row: Row = [None, Some(2), None, Some(2)];
    compact_row(&mut row);
    assert_eq!(row, [Some(2), Some(2), None, None]);
    assert_eq!(merge_row(&mut row), 4);
    assert_eq!(row, [Some(4), None, None, None]);
}

#[test]
fn test_full_grid_with_pair_is_not_stuck() {
    let horizontal = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
    assert!(horizontal.is_full());
    assert!(horizontal.has_adjacent_pair());

    let vertical = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 4, 2]]);
    assert!(vertical.has_adjacent_pair());
}

#[test]
fn test_checkerboard_has_no_pair() {
    let stuck = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(stuck.is_full());
    assert!(!stuck.has_adjacent_pair());
}

#[test]
fn test_empty_cells_and_counts() {
    let g = grid([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]);
    assert_eq!(g.tile_count(), 2);
    assert_eq!(g.empty_cells().len(), 14);
    assert_eq!(g.max_tile(), Some(2048));
    assert!(g.contains(2048));
    assert!(!g.is_full());
    assert_eq!(Grid::new().max_tile(), None);
}

#[test]
fn test_invalid_tiles_rejected() {
    assert_eq!(
        Grid::from_values([[0, 6, 0, 0], [0; 4], [0; 4], [0; 4]]),
        Err(GridError::InvalidTile {
            row: 0,
            col: 1,
            value: 6
        })
    );
    assert!(Grid::from_values([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());

    let mut g = Grid::new();
    assert_eq!(
        g.set(4, 0, Some(2)),
        Err(GridError::OutOfBounds { row: 4, col: 0 })
    );
    assert!(g.set(0, 0, Some(12)).is_err());
    assert_eq!(g, Grid::new());
}

#[test]
fn test_tiles_above_reachable_maximum_rejected() {
    assert!(Grid::from_values([[1 << 31, 1 << 31, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    assert_eq!(
        Grid::from_values([[0, 0, 0, 0], [0, 0, MAX_TILE * 2, 0], [0; 4], [0; 4]]),
        Err(GridError::InvalidTile {
            row: 1,
            col: 2,
            value: MAX_TILE * 2
        })
    );

    // The largest valid tiles still slide and merge without overflowing.
    let mut g = grid([[MAX_TILE, MAX_TILE, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(g.slide(Direction::Left), MAX_TILE * 2);
    assert_eq!(values(&g)[0], [MAX_TILE * 2, 0, 0, 0]);
}
