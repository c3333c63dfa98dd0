//! Controller layer between input sources and the game core.
//!
//! [`Session`] receives [`GameAction`]s from any front end (terminal keys,
//! scripted drivers, tests), applies them to a [`GameState`], paces the tile
//! spawn that follows a move, and raises win/loss notices for the view.
//!
//! ```
//! use tui_2048_engine::Session;
//! use tui_2048_types::{Direction, GameAction};
//!
//! // Delay 0: the follow-up tile lands immediately.
//! let mut session = Session::new(7, 0);
//! for dir in Direction::ALL {
//!     session.dispatch(GameAction::Move(dir));
//! }
//! assert!(session.snapshot().max_tile >= 2);
//! ```

pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use session::{Notice, Session};

#[doc(no_inline)]
pub use tui_2048_core::GameState;
#[doc(no_inline)]
pub use tui_2048_types::GameAction;
