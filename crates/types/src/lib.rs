//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, headless tests).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! Sessions may be created with other dimensions; see [`MIN_BOARD_DIM`] and
//! [`MAX_BOARD_DIM`].
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 1000 | One gravity tick per second |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board dimension (fits the 4-wide I piece)
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest accepted board dimension (keeps coordinates inside `i8`)
pub const MAX_BOARD_DIM: u8 = 64;

/// Gravity interval in milliseconds (one row per second)
pub const GRAVITY_MS: u32 = 1000;

/// Points awarded per cleared row. Every row scores the same, there is no
/// multi-line bonus.
pub const LINE_CLEAR_SCORE: u32 = 100;

/// A cell on the game board
///
/// - `0`: empty
/// - `> 0`: occupied
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// Marker written into the board when a piece locks.
pub const FILLED: Cell = 1;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in template order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Index into [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }
}

/// Commands accepted by a game session
///
/// Each command takes no arguments. `Tick` and `MoveDown` do the same thing to
/// the board; they are kept apart so the input boundary can tell the gravity
/// timer from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Gravity step from the periodic timer
    Tick,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    TogglePause,
    /// Restart the game (at any time)
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("togglePause"), Some(GameAction::TogglePause));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tick" => Some(GameAction::Tick),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "togglepause" | "pause" => Some(GameAction::TogglePause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Tick => "tick",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
        }
    }

    /// Whether the command is still accepted while the game is paused.
    pub fn allowed_while_paused(&self) -> bool {
        matches!(self, GameAction::TogglePause | GameAction::Restart)
    }
}

/// Result of applying a command to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MoveOutcome {
    /// The piece moved or rotated.
    Moved,
    /// The move would collide; state is unchanged.
    Blocked,
    /// The piece could not move down and was written into the board.
    #[serde(rename_all = "camelCase")]
    Locked { lines_cleared: u32 },
    /// Pause flag flipped.
    Toggled,
    /// Session reset to a fresh game.
    Restarted,
    /// The session is over (or has no active piece); nothing changed.
    Ignored,
}

impl MoveOutcome {
    /// True when the command changed session state.
    pub fn committed(&self) -> bool {
        !matches!(self, MoveOutcome::Blocked | MoveOutcome::Ignored)
    }
}
