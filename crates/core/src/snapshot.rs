//! Copyable view of the engine for renderers.

use crate::game_state::Piece;
use crate::types::{Phase, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub x: i8,
    pub y: i8,
    /// Absolute board cells occupied by the piece
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Shape tags indexed `[y][x]`, row 0 at the bottom
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub max_score: u32,
    pub lines: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    /// Locked cell at (x, y); `Empty` when out of bounds.
    pub fn cell(&self, x: i8, y: i8) -> ShapeKind {
        if x < 0 || y < 0 {
            return ShapeKind::Empty;
        }
        self.board
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .and_then(|&v| ShapeKind::from_index(v))
            .unwrap_or(ShapeKind::Empty)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            max_score: 0,
            lines: 0,
            phase: Phase::Idle,
        }
    }
}
