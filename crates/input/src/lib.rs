//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Nothing
//! here touches game state; the controller decides what an action does.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
