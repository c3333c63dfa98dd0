//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, controller, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The classic 2048 playfield:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_UNDOS` | 3 | Undo tokens per game |
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `MAX_TILE` | 131072 | Largest tile a 4x4 grid can ever hold |
//! | `NEW_TILE_DELAY_MS` | 150 | Pause between a move and the tile spawn |
//! | `TICK_MS` | 16 | Fixed timestep of the terminal loop (~60 FPS) |
//!
//! # Tile Spawns
//!
//! New tiles are a 2 nine times out of ten and a 4 otherwise
//! (`SPAWN_FOUR_WEIGHT` out of `SPAWN_WEIGHT_TOTAL`).
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, NUM_COLS, NUM_ROWS};
//!
//! // Parse from a name or a WASD key (case-insensitive)
//! let left: Direction = "left".parse().unwrap();
//! assert_eq!(left, Direction::Left);
//! assert_eq!(Direction::try_from('W'), Ok(Direction::Up));
//!
//! // Unknown directions are rejected
//! assert!("sideways".parse::<Direction>().is_err());
//!
//! // Parse a controller action
//! let action = GameAction::from_str("undo").unwrap();
//! assert_eq!(action, GameAction::Undo);
//!
//! assert_eq!(NUM_ROWS, 4);
//! assert_eq!(NUM_COLS, 4);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Grid height in cells (4 rows)
pub const NUM_ROWS: usize = 4;

/// Grid width in cells (4 columns)
pub const NUM_COLS: usize = 4;

/// Undo tokens available at the start of every game
pub const MAX_UNDOS: u32 = 3;

/// Reaching this tile value wins the game
pub const WIN_TILE: u32 = 2048;

/// Largest tile reachable on a full 4x4 grid fed with 4s (2^17)
pub const MAX_TILE: u32 = 1 << 17;

/// Delay between a successful move and the spawn of the next tile
pub const NEW_TILE_DELAY_MS: u32 = 150;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Weight of a 4 among freshly spawned tiles
pub const SPAWN_FOUR_WEIGHT: u32 = 1;

/// Total spawn weight (a 2 otherwise)
pub const SPAWN_WEIGHT_TOTAL: u32 = 10;

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(value)`: Tile holding a power of two ≥ 2
pub type Tile = Option<u32>;

/// Error returned when a string or key does not name a move direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move direction: {input:?}")]
pub struct ParseDirectionError {
    pub input: String,
}

/// The four directions a move can slide tiles in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order the controller tries them
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.as_str(), "left");
    /// assert_eq!(Direction::Down.as_str(), "down");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// The WASD key bound to this direction
    pub fn key(&self) -> char {
        match self {
            Direction::Left => 'a',
            Direction::Right => 'd',
            Direction::Up => 'w',
            Direction::Down => 's',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts full names or WASD letters (case-insensitive):
    /// "left" | "a", "right" | "d", "up" | "w", "down" | "s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = ParseDirectionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'a' => Ok(Direction::Left),
            'd' => Ok(Direction::Right),
            'w' => Ok(Direction::Up),
            's' => Ok(Direction::Down),
            _ => Err(ParseDirectionError {
                input: c.to_string(),
            }),
        }
    }
}

/// Actions the controller accepts from any input source
///
/// Human key presses and headless drivers both go through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in a direction, merging equal neighbours
    Move(Direction),
    /// Restore the grid from before the last move (costs one token)
    Undo,
    /// Throw the current game away and deal a fresh one
    NewGame,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "undo" => Some(GameAction::Undo),
            "newgame" | "new" | "restart" => Some(GameAction::NewGame),
            other => other.parse().ok().map(GameAction::Move),
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Undo => "undo",
            GameAction::NewGame => "newGame",
        }
    }
}

/// Informational game status
///
/// Neither `Won` nor `Lost` locks the game; moves keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "inProgress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}
