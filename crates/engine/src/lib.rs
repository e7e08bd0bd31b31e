//! Engine module - drives a [`blockfall_core::Session`] from timers and input.
//!
//! The core crate knows nothing about time. This crate adds the pieces a
//! front end needs around it:
//!
//! - a gravity timer that turns elapsed milliseconds into `Tick` commands
//! - the pause gate (while paused only `TogglePause` and `Restart` get through)
//! - score-change notification for score displays
//! - configuration from `BLOCKFALL_*` environment variables

pub mod config;
pub mod driver;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::DriverConfig;
pub use driver::{Dispatch, Driver, ScoreDisplay};
