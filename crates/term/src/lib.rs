//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. The view draws a
//! [`core::GameSnapshot`] into a plain framebuffer of styled characters, and the
//! renderer flushes that framebuffer to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of any drawing concern
//! - Keep the view pure so layouts can be unit-tested without a terminal
//! - Redraw only the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
