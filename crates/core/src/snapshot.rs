use crate::board::cell_at;
use crate::engine::Piece;
use crate::pieces::Shape;
use crate::types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute (x, y) of every filled cell, hidden rows included.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .offsets()
            .filter_map(move |(dx, dy)| cell_at(self.x, self.y, dx, dy))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs for one frame. Plain data, no references into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Visible rows as `u8` codes, `0` = empty (see [`PieceKind::code`]).
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub phase: GamePhase,
    pub score: u32,
    pub best_score: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            phase: GamePhase::Playing,
            score: 0,
            best_score: 0,
            lines: 0,
        }
    }
}
