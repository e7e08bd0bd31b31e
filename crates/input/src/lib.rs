//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press is one discrete command; terminal auto-repeat is left to the caller.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, KEY_HELP};
