//! Grid module - the 4x4 tile matrix and the slide/merge algorithm
//!
//! Cells are stored row-major as `[[Tile; NUM_COLS]; NUM_ROWS]`.
//! Coordinates: (row, col) where row 0 is the top and col 0 the left edge.
//!
//! Every move is computed with the left slide. The other directions mirror
//! and/or transpose the grid first and undo the transform afterwards.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Direction, Tile, MAX_TILE, NUM_COLS, NUM_ROWS};

/// Total number of cells on the grid
pub const GRID_SIZE: usize = NUM_ROWS * NUM_COLS;

/// One row of the grid
pub type Row = [Tile; NUM_COLS];

/// Errors raised when building a grid from external data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) holds {value}, which is not a power of two in 2..={max}", max = MAX_TILE)]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// The playfield - 4 rows x 4 columns of optional tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [Row; NUM_ROWS],
}

/// Whether `value` may sit on the grid: a power of two from 2 to [`MAX_TILE`]
#[inline]
pub fn is_valid_tile(value: u32) -> bool {
    (2..=MAX_TILE).contains(&value) && value.is_power_of_two()
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [[None; NUM_COLS]; NUM_ROWS],
        }
    }

    /// Build a grid from explicit rows, validating every tile
    pub fn from_rows(rows: [Row; NUM_ROWS]) -> Result<Self, GridError> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, tile) in cells.iter().enumerate() {
                if let Some(value) = *tile {
                    if !is_valid_tile(value) {
                        return Err(GridError::InvalidTile { row, col, value });
                    }
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Build a grid from plain numbers, with 0 meaning an empty cell
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_values([
    ///     [2, 2, 4, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 2048],
    /// ])
    /// .unwrap();
    /// assert_eq!(grid.get(0, 2), Some(Some(4)));
    /// assert_eq!(grid.get(1, 0), Some(None));
    /// assert!(Grid::from_values([[3, 0, 0, 0]; 4]).is_err());
    /// ```
    pub fn from_values(values: [[u32; NUM_COLS]; NUM_ROWS]) -> Result<Self, GridError> {
        let mut rows = [[None; NUM_COLS]; NUM_ROWS];
        for (dst, src) in rows.iter_mut().zip(values.iter()) {
            for (cell, &v) in dst.iter_mut().zip(src.iter()) {
                *cell = if v == 0 { None } else { Some(v) };
            }
        }
        Self::from_rows(rows)
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        NUM_ROWS
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        NUM_COLS
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set cell at (row, col), validating bounds and tile value
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> Result<(), GridError> {
        if row >= NUM_ROWS || col >= NUM_COLS {
            return Err(GridError::OutOfBounds { row, col });
        }
        if let Some(value) = tile {
            if !is_valid_tile(value) {
                return Err(GridError::InvalidTile { row, col, value });
            }
        }
        self.cells[row][col] = tile;
        Ok(())
    }

    /// Put a tile on a cell taken from [`Grid::empty_cells`]
    pub(crate) fn place(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(self.cells[row][col].is_none() && is_valid_tile(value));
        self.cells[row][col] = Some(value);
    }

    /// Borrow the rows
    pub fn as_rows(&self) -> &[Row; NUM_ROWS] {
        &self.cells
    }

    /// Iterate `(row, col, tile)` over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &tile)| (r, c, tile))
        })
    }

    /// Positions of all empty cells, row-major (stack-only)
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), GRID_SIZE> {
        self.iter()
            .filter(|&(_, _, tile)| tile.is_none())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.iter().filter(|&(_, _, tile)| tile.is_some()).count()
    }

    /// True when every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|tile| tile.is_some())
    }

    /// True when any cell holds exactly `value`
    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|&tile| tile == Some(value))
    }

    /// Largest tile on the grid
    pub fn max_tile(&self) -> Option<u32> {
        self.cells.iter().flatten().filter_map(|&tile| tile).max()
    }

    /// True when two horizontally or vertically adjacent cells hold the same tile.
    ///
    /// Empty cells never pair with each other.
    pub fn has_adjacent_pair(&self) -> bool {
        for r in 0..NUM_ROWS {
            for c in 0..NUM_COLS {
                let Some(v) = self.cells[r][c] else {
                    continue;
                };
                if c + 1 < NUM_COLS && self.cells[r][c + 1] == Some(v) {
                    return true;
                }
                if r + 1 < NUM_ROWS && self.cells[r + 1][c] == Some(v) {
                    return true;
                }
            }
        }
        false
    }

    /// Slide every tile in `direction`, merging equal neighbours.
    ///
    /// Returns the sum of the merged tile values (the score gained).
    pub fn slide(&mut self, direction: Direction) -> u32 {
        match direction {
            Direction::Left => self.slide_left(),
            Direction::Right => {
                self.mirror();
                let gained = self.slide_left();
                self.mirror();
                gained
            }
            Direction::Up => {
                self.transpose();
                let gained = self.slide_left();
                self.transpose();
                gained
            }
            Direction::Down => {
                self.transpose();
                self.mirror();
                let gained = self.slide_left();
                self.mirror();
                self.transpose();
                gained
            }
        }
    }

    /// Slide toward the left edge: compact, merge, compact again.
    pub fn slide_left(&mut self) -> u32 {
        let mut gained = 0;
        for row in &mut self.cells {
            compact_row(row);
            gained += merge_row(row);
            compact_row(row);
        }
        gained
    }

    /// Reverse the order of the columns in every row
    pub fn mirror(&mut self) {
        for row in &mut self.cells {
            row.reverse();
        }
    }

    /// Swap rows and columns
    pub fn transpose(&mut self) {
        for r in 0..NUM_ROWS {
            for c in (r + 1)..NUM_COLS {
                let tmp = self.cells[r][c];
                self.cells[r][c] = self.cells[c][r];
                self.cells[c][r] = tmp;
            }
        }
    }

    /// Write the grid as plain numbers (0 for empty) into `out`
    pub fn write_u32_grid(&self, out: &mut [[u32; NUM_COLS]; NUM_ROWS]) {
        for (dst, src) in out.iter_mut().zip(self.cells.iter()) {
            for (cell, tile) in dst.iter_mut().zip(src.iter()) {
                *cell = tile.unwrap_or(0);
            }
        }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [[None; NUM_COLS]; NUM_ROWS];
    }
}

/// Slide all tiles of a row to the left, keeping their order.
pub fn compact_row(row: &mut Row) {
    let mut write = 0;
    for read in 0..NUM_COLS {
        if let Some(v) = row[read] {
            row[write] = Some(v);
            write += 1;
        }
    }
    for cell in &mut row[write..] {
        *cell = None;
    }
}

/// Merge equal neighbours left to right in a compacted row.
///
/// A merged cell is skipped, so `[2, 2, 2, 2]` yields two 4s rather than an 8.
/// Returns the sum of the merged values.
pub fn merge_row(row: &mut Row) -> u32 {
    let mut gained = 0;
    let mut c = 0;
    while c + 1 < NUM_COLS {
        match (row[c], row[c + 1]) {
            (Some(a), Some(b)) if a == b => {
                let merged = a * 2;
                row[c] = Some(merged);
                row[c + 1] = None;
                gained += merged;
                c += 2;
            }
            _ => c += 1,
        }
    }
    gained
}
