//! Session configuration and validation.

use std::fmt;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MIN_BOARD_DIM};

/// Board dimensions for a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u8,
    pub height: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

impl SessionConfig {
    pub fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        Ok(())
    }
}

/// Rejected board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    Width(u8),
    Height(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Width(w) => write!(
                f,
                "board width {} out of range {}..={}",
                w, MIN_BOARD_DIM, MAX_BOARD_DIM
            ),
            ConfigError::Height(h) => write!(
                f,
                "board height {} out of range {}..={}",
                h, MIN_BOARD_DIM, MAX_BOARD_DIM
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
