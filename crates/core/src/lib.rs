//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and session state. It has **no
//! dependencies** on terminals, networking or timers, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every rule can be exercised headlessly
//! - **Portable**: Any front end can drive it through [`Session::apply`]
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision detection and line clearing
//! - [`pieces`]: the seven shape templates and clockwise rotation
//! - [`rng`]: uniform random piece selection
//! - [`session`]: active piece, score, pause and game-over state
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - A new piece spawns horizontally centered on row 0; if it collides there
//!   the game is over until restart
//! - Left, right and rotate are rejected when they would collide (no kicks)
//! - Moving down into an obstacle locks the piece, clears full rows and spawns
//!   the next piece
//! - Each cleared row is worth 100 points
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::{GameAction, MoveOutcome};
//!
//! let mut game = Session::new(12345);
//!
//! game.apply(GameAction::MoveRight);
//! game.apply(GameAction::Rotate);
//! assert_eq!(game.apply(GameAction::MoveDown), MoveOutcome::Moved);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, 0);
//! assert!(snap.active.is_some());
//! ```

pub mod board;
pub mod config;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, SessionConfig};
pub use pieces::{spawn_x, template, Shape};
pub use rng::SimpleRng;
pub use session::{Piece, Session};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
