use serde::Serialize;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

/// Read-only view of a session for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major cells, `height * width` long.
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board.clear();
        self.board
            .resize(self.width as usize * self.height as usize, EMPTY);
        self.active = None;
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.episode_id = 0;
        self.piece_id = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Cell at (x, y); empty when out of range.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width as usize || y >= self.height as usize {
            return EMPTY;
        }
        self.board
            .get(y * self.width as usize + x)
            .copied()
            .unwrap_or(EMPTY)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.board.chunks(self.width.max(1) as usize)
    }

    /// Board coordinates covered by the active piece.
    pub fn active_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.active.iter().flat_map(|a| {
            a.shape
                .occupied()
                .into_iter()
                .map(move |(dx, dy)| (a.x + dx, a.y + dy))
        })
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: Vec::new(),
            active: None,
            score: 0,
            paused: false,
            game_over: false,
            episode_id: 0,
            piece_id: 0,
        };
        s.clear();
        s
    }
}
