//! Terminal 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_2048::{core,engine,input,term,types}` and hosts the runtime
//! configuration shared by the binary.

pub mod config;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
