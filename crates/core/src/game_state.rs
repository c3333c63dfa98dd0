//! Game state module - manages the complete game state
//!
//! Ties the grid, the score, the single-slot undo history and the tile
//! spawner together. Handles moves, undo, tile spawns and the game lifecycle.

use log::{debug, info};

use crate::{snapshot::GameSnapshot, Grid, TileSpawner};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    /// Grid as it was right before the last attempted move.
    ///
    /// One slot only: every attempt overwrites it and undo does not clear it.
    history: Grid,
    score: u32,
    undos_remaining: u32,
    /// Moves that changed the grid since the game started.
    moves: u32,
    /// Monotonic episode id (increments on new game).
    episode_id: u32,
    spawner: TileSpawner,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The grid starts with two tiles on distinct random cells.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            history: Grid::new(),
            score: 0,
            undos_remaining: MAX_UNDOS,
            moves: 0,
            episode_id: 0,
            spawner: TileSpawner::new(seed),
        };
        state.deal();
        state
    }

    /// Start from a given position instead of a random deal.
    ///
    /// Score, undos and history are fresh; the seed drives later spawns.
    pub fn with_grid(seed: u32, grid: Grid) -> Self {
        Self {
            grid,
            history: grid,
            score: 0,
            undos_remaining: MAX_UNDOS,
            moves: 0,
            episode_id: 0,
            spawner: TileSpawner::new(seed),
        }
    }

    /// Reset everything and deal a fresh grid.
    ///
    /// The spawner keeps its sequence, so successive games differ but stay
    /// reproducible from the original seed.
    pub fn new_game(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.undos_remaining = MAX_UNDOS;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.deal();
        info!(
            "new game: episode {} seed state {}",
            self.episode_id,
            self.spawner.seed()
        );
    }

    fn deal(&mut self) {
        self.add_random_tile();
        self.add_random_tile();
        self.history = self.grid;
    }

    /// Read-only copy of the grid
    pub fn tiles(&self) -> Grid {
        self.grid
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn undos_remaining(&self) -> u32 {
        self.undos_remaining
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Grid held in the undo slot
    pub fn history(&self) -> &Grid {
        &self.history
    }

    /// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns `(row, col, value)` of the new tile, or `None` if the grid is full.
    pub fn add_random_tile(&mut self) -> Option<(usize, usize, u32)> {
        let empty = self.grid.empty_cells();
        let idx = self.spawner.pick_cell(empty.len())?;
        let (row, col) = empty[idx];
        let value = self.spawner.pick_value();
        self.grid.place(row, col, value);
        debug!("spawned {} at ({}, {})", value, row, col);
        Some((row, col, value))
    }

    /// Slide the tiles and add any merged values to the score.
    ///
    /// Returns true if the grid changed. Does not touch the undo slot.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        let before = self.grid;
        let gained = self.grid.slide(direction);
        self.score = self.score.saturating_add(gained);
        let changed = self.grid != before;
        if changed {
            self.moves = self.moves.wrapping_add(1);
        }
        changed
    }

    /// Remember the current grid for undo, then move.
    ///
    /// The undo slot is overwritten even when nothing moves.
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        self.history = self.grid;
        let score_before = self.score;
        let changed = self.move_tiles(direction);
        debug!(
            "move {}: changed={} gained={}",
            direction,
            changed,
            self.score - score_before
        );
        changed
    }

    /// Restore the grid from before the last move, spending one undo token.
    ///
    /// The score is kept. Undoing twice in a row restores the same grid and
    /// spends two tokens. With no tokens left nothing happens.
    /// Returns true if a token was spent.
    pub fn use_undo(&mut self) -> bool {
        if self.undos_remaining == 0 {
            return false;
        }
        self.grid = self.history;
        self.undos_remaining -= 1;
        info!("undo used, {} remaining", self.undos_remaining);
        true
    }

    /// True once any tile reaches [`WIN_TILE`]
    pub fn has_won(&self) -> bool {
        self.grid.contains(WIN_TILE)
    }

    /// True when the grid is full and no two neighbours can merge
    pub fn has_lost(&self) -> bool {
        self.grid.is_full() && !self.grid.has_adjacent_pair()
    }

    /// Current status; a win is reported even when the grid is also stuck
    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.has_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Whether moving in `direction` would change the grid
    pub fn can_move(&self, direction: Direction) -> bool {
        let mut probe = self.grid;
        probe.slide(direction);
        probe != self.grid
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u32_grid(&mut out.tiles);
        out.score = self.score;
        out.undos_remaining = self.undos_remaining;
        out.status = self.status();
        out.max_tile = self.grid.max_tile().unwrap_or(0);
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.spawn_pending = false;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Get the current RNG state
    pub fn seed(&self) -> u32 {
        self.spawner.seed()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GRID_SIZE;

    fn grid(values: [[u32; NUM_COLS]; NUM_ROWS]) -> Grid {
        Grid::from_values(values).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.score, 0);
        assert_eq!(state.undos_remaining, MAX_UNDOS);
        assert_eq!(state.moves, 0);
        assert_eq!(state.episode_id, 0);
        assert_eq!(state.grid.tile_count(), 2);
        assert_eq!(state.history, state.grid);
    }

    #[test]
    fn test_new_game_resets_fields() {
        let mut state = GameState::with_grid(
            7,
            grid([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]),
        );
        assert!(state.attempt_move(Direction::Left));
        assert!(state.use_undo());
        assert_eq!(state.score, 4);

        state.new_game();
        assert_eq!(state.score, 0);
        assert_eq!(state.undos_remaining, MAX_UNDOS);
        assert_eq!(state.moves, 0);
        assert_eq!(state.episode_id, 1);
        assert_eq!(state.grid.tile_count(), 2);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_add_random_tile_fills_last_cell() {
        let mut state = GameState::with_grid(
            3,
            grid([[2, 4, 8, 16], [32, 64, 128, 256], [2, 4, 8, 16], [32, 64, 128, 0]]),
        );
        let (row, col, value) = state.add_random_tile().unwrap();
        assert_eq!((row, col), (3, 3));
        assert!(value == 2 || value == 4);
        assert!(state.grid.is_full());
        assert_eq!(state.add_random_tile(), None);
    }

    #[test]
    fn test_add_random_tile_fills_every_empty_cell() {
        let mut state = GameState::with_grid(21, Grid::new());
        for placed in 1..=GRID_SIZE {
            let (row, col, value) = state.add_random_tile().unwrap();
            assert_eq!(state.grid.get(row, col), Some(Some(value)));
            assert_eq!(state.grid.tile_count(), placed);
        }
        assert!(state.grid.is_full());
        assert_eq!(state.add_random_tile(), None);
    }

    #[test]
    fn test_attempt_move_overwrites_history_even_without_change() {
        let packed = grid([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut state = GameState::with_grid(1, packed);
        assert!(state.attempt_move(Direction::Right));
        let after_right = state.tiles();
        assert!(!state.attempt_move(Direction::Right));
        assert_eq!(state.history, after_right);
    }

    #[test]
    fn test_move_tiles_leaves_history_alone() {
        let start = grid([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let mut state = GameState::with_grid(1, start);
        assert!(state.move_tiles(Direction::Left));
        assert_eq!(state.history, start);
    }

    #[test]
    fn test_moves_counts_only_changes() {
        let mut state = GameState::with_grid(1, grid([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]));
        state.attempt_move(Direction::Right);
        assert_eq!(state.moves, 0);
        state.attempt_move(Direction::Left);
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn test_status_prefers_won() {
        let won_and_stuck = grid([
            [2048, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let state = GameState::with_grid(1, won_and_stuck);
        assert!(state.has_won());
        assert!(state.has_lost());
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn test_can_move() {
        let state = GameState::with_grid(1, grid([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]));
        assert!(!state.can_move(Direction::Left));
        assert!(!state.can_move(Direction::Up));
        assert!(state.can_move(Direction::Right));
        assert!(state.can_move(Direction::Down));
    }

    #[test]
    fn test_snapshot() {
        let mut state = GameState::with_grid(1, grid([[2, 2, 0, 0], [0; 4], [0; 4], [0, 0, 0, 8]]));
        state.attempt_move(Direction::Left);
        let snap = state.snapshot();
        assert_eq!(snap.tiles[0], [4, 0, 0, 0]);
        assert_eq!(snap.tiles[3], [8, 0, 0, 0]);
        assert_eq!(snap.score, 4);
        assert_eq!(snap.max_tile, 8);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.undos_remaining, MAX_UNDOS);
        assert_eq!(snap.status, GameStatus::InProgress);
        assert_eq!(snap.tile(0, 0), Some(4));
        assert_eq!(snap.tile(0, 1), None);
    }

    #[test]
    fn test_tiles_is_a_copy() {
        let state = GameState::new(5);
        let mut copy = state.tiles();
        copy.clear();
        assert_eq!(state.grid.tile_count(), 2);
    }
}
