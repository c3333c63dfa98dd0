//! Runtime configuration read from environment variables.
//!
//! - `TUI_2048_SEED`: RNG seed (default: derived from the clock)
//! - `TUI_2048_TILE_DELAY_MS`: pause before a new tile lands (default: 150)
//! - `TUI_2048_LOG_PATH`: directory for log files (default: logging off)
//!
//! Values that fail to parse fall back to the defaults.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::NEW_TILE_DELAY_MS;

pub const SEED_VAR: &str = "TUI_2048_SEED";
pub const TILE_DELAY_VAR: &str = "TUI_2048_TILE_DELAY_MS";
pub const LOG_PATH_VAR: &str = "TUI_2048_LOG_PATH";

/// Binary configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub new_tile_delay_ms: u32,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            new_tile_delay_ms: NEW_TILE_DELAY_MS,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests)
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let new_tile_delay_ms = lookup(TILE_DELAY_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(NEW_TILE_DELAY_MS);

        let log_dir = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            new_tile_delay_ms,
            log_dir,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
