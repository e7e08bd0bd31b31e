//! Driver configuration from environment variables.

use blockfall_core::SessionConfig;
use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_MS};

/// Gravity and board settings for a [`crate::Driver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Milliseconds between gravity ticks.
    pub gravity_ms: u32,
    pub board: SessionConfig,
    /// RNG seed; `None` lets the binary pick one.
    pub seed: Option<u32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            gravity_ms: GRAVITY_MS,
            board: SessionConfig::default(),
            seed: None,
        }
    }
}

impl DriverConfig {
    /// Read `BLOCKFALL_*` environment variables, falling back to defaults for
    /// anything missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(mut get_env: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut parse = |key: &str| get_env(key).and_then(|v| v.trim().parse::<u32>().ok());

        let gravity_ms = parse("BLOCKFALL_GRAVITY_MS")
            .filter(|&ms| ms > 0)
            .unwrap_or(GRAVITY_MS);
        let width = parse("BLOCKFALL_BOARD_WIDTH")
            .and_then(|w| u8::try_from(w).ok())
            .unwrap_or(BOARD_WIDTH);
        let height = parse("BLOCKFALL_BOARD_HEIGHT")
            .and_then(|h| u8::try_from(h).ok())
            .unwrap_or(BOARD_HEIGHT);
        let seed = parse("BLOCKFALL_SEED");

        Self {
            gravity_ms,
            board: SessionConfig::new(width, height),
            seed,
        }
    }
}
