//! Terminal "game renderer" module.
//!
//! Renders a [`GameSnapshot`](crate::core::GameSnapshot) into a simple
//! framebuffer that is flushed to the terminal with `crossterm`.
//!
//! Goals:
//! - Keep `core` free of any drawing concerns
//! - Read only snapshots, never the live session
//! - Draw board cells 2 characters wide to offset the glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
