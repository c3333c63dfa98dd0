//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for 2048.
//! It has **no dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule and edge case
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile grid with the compact/merge/compact slide algorithm
//! - [`game_state`]: Score, single-slot undo, tile spawns, win/loss checks
//! - [`rng`]: Seeded spawn cell and spawn value selection
//! - [`snapshot`]: Plain-data view of a game for renderers
//!
//! # Game Rules
//!
//! - **Moves**: Every tile slides as far as it can; equal neighbours merge once
//!   per move, and the merged value is added to the score
//! - **Spawns**: After a move that changed the grid, a 2 (90%) or a 4 (10%)
//!   appears on a random empty cell
//! - **Undo**: 3 tokens per game, one level deep; the score is not rolled back
//! - **Win**: Any tile reaches 2048 (play may continue)
//! - **Loss**: Grid full with no mergeable neighbours (play may continue)
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, Grid};
//! use tui_2048_types::Direction;
//!
//! let grid = Grid::from_values([
//!     [2, 2, 4, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ])
//! .unwrap();
//! let mut game = GameState::with_grid(12345, grid);
//!
//! assert!(game.attempt_move(Direction::Left));
//! assert_eq!(game.tiles().as_rows()[0], [Some(4), Some(4), None, None]);
//! assert_eq!(game.score(), 4);
//!
//! game.add_random_tile();
//! assert_eq!(game.tiles().tile_count(), 3);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::{compact_row, merge_row, Grid, GridError, Row, GRID_SIZE};
pub use rng::{SimpleRng, TileSpawner};
pub use snapshot::GameSnapshot;
