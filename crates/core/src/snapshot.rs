use crate::types::{GameStatus, MAX_UNDOS, NUM_COLS, NUM_ROWS};

/// Everything a view needs to draw one frame.
///
/// Plain `Copy` data detached from the live [`crate::GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Tile values, 0 for an empty cell
    pub tiles: [[u32; NUM_COLS]; NUM_ROWS],
    pub score: u32,
    pub undos_remaining: u32,
    pub status: GameStatus,
    /// Highest tile on the grid (0 when empty)
    pub max_tile: u32,
    /// Number of moves that changed the grid in this game
    pub moves: u32,
    /// Incremented on every new game
    pub episode_id: u32,
    /// A tile spawn is scheduled but has not landed yet
    pub spawn_pending: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles = [[0u32; NUM_COLS]; NUM_ROWS];
        self.score = 0;
        self.undos_remaining = MAX_UNDOS;
        self.status = GameStatus::InProgress;
        self.max_tile = 0;
        self.moves = 0;
        self.episode_id = 0;
        self.spawn_pending = false;
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<u32> {
        match self.tiles.get(row).and_then(|r| r.get(col)) {
            Some(&0) | None => None,
            Some(&v) => Some(v),
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            tiles: [[0u32; NUM_COLS]; NUM_ROWS],
            score: 0,
            undos_remaining: 0,
            status: GameStatus::InProgress,
            max_tile: 0,
            moves: 0,
            episode_id: 0,
            spawn_pending: false,
        };
        s.clear();
        s
    }
}
