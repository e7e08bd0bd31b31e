//! Session module - owns the board, the active piece and the score
//!
//! Every command checks a move before committing it, so a rejected move never
//! touches state and the caller gets a [`MoveOutcome`] saying what happened.
//! The session does not look at the pause flag when handling movement; pause
//! gating belongs to whoever feeds it commands (see the engine crate).

use crate::board::Board;
use crate::config::{ConfigError, SessionConfig};
use crate::pieces::{spawn_x, template, Shape};
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` at its spawn position on a board `board_width` wide
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = template(kind);
        Self {
            kind,
            shape,
            x: spawn_x(board_width, &shape),
            y: 0,
        }
    }

    /// Check whether the piece overlaps the board or leaves it
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    score: u32,
    paused: bool,
    game_over: bool,
}

impl Session {
    /// Create a running 12x20 session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let config = SessionConfig::default();
        let mut session = Self::blank(config, Board::new(), seed);
        session.spawn_piece();
        session
    }

    /// Create a running session with custom board dimensions
    pub fn with_config(config: SessionConfig, seed: u32) -> Result<Self, ConfigError> {
        let board = Board::with_size(config.width, config.height)?;
        let mut session = Self::blank(config, board, seed);
        session.spawn_piece();
        Ok(session)
    }

    fn blank(config: SessionConfig, board: Board, seed: u32) -> Self {
        Self {
            config,
            board,
            active: None,
            rng: SimpleRng::new(seed),
            episode_id: 0,
            piece_id: 0,
            score: 0,
            paused: false,
            game_over: false,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up scenarios.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_into(&mut out.board);

        out.active = self.active.map(|p| ActiveSnapshot {
            kind: p.kind,
            shape: p.shape,
            x: p.x,
            y: p.y,
        });
        out.score = self.score;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Check a placement against the board
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        self.board.collides(shape, x, y)
    }

    /// Spawn a random piece
    ///
    /// Returns false (and ends the game) when the spawn position is blocked.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.next_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a piece of the given kind, replacing the active piece
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if self.game_over {
            return false;
        }

        let piece = Piece::spawn(kind, self.board.width());
        if piece.collides(&self.board) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        true
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i8) -> MoveOutcome {
        let Some(active) = self.movable() else {
            return MoveOutcome::Ignored;
        };

        let x = active.x + dx;
        if self.board.collides(&active.shape, x, active.y) {
            return MoveOutcome::Blocked;
        }

        self.active = Some(Piece { x, ..active });
        MoveOutcome::Moved
    }

    /// Move the active piece down one row, locking it if it cannot move
    ///
    /// This is both the player's soft drop and the gravity tick.
    pub fn move_down(&mut self) -> MoveOutcome {
        let Some(active) = self.movable() else {
            return MoveOutcome::Ignored;
        };

        let y = active.y + 1;
        if !self.board.collides(&active.shape, active.x, y) {
            self.active = Some(Piece { y, ..active });
            return MoveOutcome::Moved;
        }

        let lines_cleared = self.lock_active();
        MoveOutcome::Locked { lines_cleared }
    }

    /// Rotate the active piece clockwise in place (no wall kicks)
    pub fn rotate(&mut self) -> MoveOutcome {
        let Some(active) = self.movable() else {
            return MoveOutcome::Ignored;
        };

        let shape = active.shape.rotated_cw();
        if self.board.collides(&shape, active.x, active.y) {
            return MoveOutcome::Blocked;
        }

        self.active = Some(Piece { shape, ..active });
        MoveOutcome::Moved
    }

    /// Write the active piece into the board, clear lines and spawn the next
    /// piece. Returns the number of rows cleared.
    fn lock_active(&mut self) -> u32 {
        let Some(active) = self.active.take() else {
            return 0;
        };

        self.board.lock(&active.shape, active.x, active.y);
        let lines_cleared = self.clear_lines();
        self.spawn_piece();
        lines_cleared
    }

    /// Clear full rows and award [`LINE_CLEAR_SCORE`] for each one
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_lines();
        self.score = self
            .score
            .saturating_add(cleared.saturating_mul(LINE_CLEAR_SCORE));
        cleared
    }

    pub fn toggle_pause(&mut self) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Ignored;
        }
        self.paused = !self.paused;
        MoveOutcome::Toggled
    }

    /// Reset to a fresh running game: empty board, zero score, new piece
    pub fn restart(&mut self) -> MoveOutcome {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_piece();
        MoveOutcome::Restarted
    }

    /// Apply a game action
    ///
    /// Once the game is over every action except `Restart` is ignored.
    pub fn apply(&mut self, action: GameAction) -> MoveOutcome {
        if self.game_over && action != GameAction::Restart {
            return MoveOutcome::Ignored;
        }

        match action {
            GameAction::Tick | GameAction::MoveDown => self.move_down(),
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }

    fn movable(&self) -> Option<Piece> {
        if self.game_over {
            return None;
        }
        self.active
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
