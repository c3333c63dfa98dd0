use log::{debug, info};

use crate::core::{GameSnapshot, GameState};
use crate::types::{Direction, GameAction, NEW_TILE_DELAY_MS};

/// User-facing event raised by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A move produced the winning tile
    Won,
    /// A spawn filled the grid and nothing can merge
    Lost,
}

impl Notice {
    pub fn code(self) -> &'static str {
        match self {
            Notice::Won => "won",
            Notice::Lost => "lost",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Won => "You won!",
            Notice::Lost => "You lost!",
        }
    }
}

/// One player's session: a game plus the pacing around it.
///
/// A move that changes the grid schedules one tile spawn `new_tile_delay_ms`
/// later (driven by [`Session::tick`]). A delay of 0 spawns right away.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    new_tile_delay_ms: u32,
    /// Remaining time before the scheduled spawn lands.
    spawn_timer_ms: Option<u32>,
    /// Last notice, shown until the next action that changes the game.
    notice: Option<Notice>,
    /// The win notice is raised once per game.
    won_announced: bool,
}

impl Session {
    pub fn new(seed: u32, new_tile_delay_ms: u32) -> Self {
        Self::with_state(GameState::new(seed), new_tile_delay_ms)
    }

    /// Wrap an existing game (e.g. one built from a fixed grid).
    pub fn with_state(state: GameState, new_tile_delay_ms: u32) -> Self {
        let won_announced = state.has_won();
        Self {
            state,
            new_tile_delay_ms,
            spawn_timer_ms: None,
            notice: None,
            won_announced,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn spawn_pending(&self) -> bool {
        self.spawn_timer_ms.is_some()
    }

    pub fn new_tile_delay_ms(&self) -> u32 {
        self.new_tile_delay_ms
    }

    /// Apply one action.
    ///
    /// Returns the notice raised by this action, if any.
    pub fn dispatch(&mut self, action: GameAction) -> Option<Notice> {
        match action {
            GameAction::Move(direction) => self.on_move(direction),
            GameAction::Undo => {
                // Without a token the grid stays, so its pending tile must too.
                if self.state.use_undo() {
                    self.cancel_spawn();
                    self.notice = None;
                }
                None
            }
            GameAction::NewGame => {
                self.cancel_spawn();
                self.state.new_game();
                self.notice = None;
                self.won_announced = false;
                None
            }
        }
    }

    fn on_move(&mut self, direction: Direction) -> Option<Notice> {
        // A spawn still in flight lands before the next move is applied.
        let flushed = self.flush();

        if !self.state.attempt_move(direction) {
            return flushed;
        }
        self.notice = None;

        if self.state.has_won() && !self.won_announced {
            self.won_announced = true;
            info!(
                "game won: score {} after {} moves",
                self.state.score(),
                self.state.moves()
            );
            return self.raise(Notice::Won);
        }

        if self.new_tile_delay_ms == 0 {
            self.spawn_now()
        } else {
            self.spawn_timer_ms = Some(self.new_tile_delay_ms);
            None
        }
    }

    /// Advance the spawn timer by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Notice> {
        let remaining = self.spawn_timer_ms?;
        if elapsed_ms >= remaining {
            self.spawn_now()
        } else {
            self.spawn_timer_ms = Some(remaining - elapsed_ms);
            None
        }
    }

    /// Land a scheduled spawn immediately.
    pub fn flush(&mut self) -> Option<Notice> {
        if self.spawn_timer_ms.is_some() {
            self.spawn_now()
        } else {
            None
        }
    }

    fn cancel_spawn(&mut self) {
        if self.spawn_timer_ms.take().is_some() {
            debug!("pending spawn cancelled");
        }
    }

    fn spawn_now(&mut self) -> Option<Notice> {
        self.spawn_timer_ms = None;
        self.state.add_random_tile();
        if self.state.has_lost() {
            info!(
                "game lost: score {} max tile {}",
                self.state.score(),
                self.state.grid().max_tile().unwrap_or(0)
            );
            return self.raise(Notice::Lost);
        }
        None
    }

    fn raise(&mut self, notice: Notice) -> Option<Notice> {
        self.notice = Some(notice);
        Some(notice)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
        out.spawn_pending = self.spawn_pending();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1, NEW_TILE_DELAY_MS)
    }
}
