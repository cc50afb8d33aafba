//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so they
//! can be shared by the engine, the session layer, and the terminal front end.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, **row 0 is the bottom**)
//! - **Spawn column**: `BOARD_WIDTH / 2 + 1`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPEED_MS` | 300 | Interval between automatic advance ticks |
//! | `FRAME_MS` | 16 | Host frame interval used to poll input |
//!
//! # Examples
//!
//! ```
//! use tetromino_types::{GameAction, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("line").unwrap();
//! assert_eq!(kind, ShapeKind::Line);
//! assert_eq!(kind.index(), 3);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Number of shape tags, including [`ShapeKind::Empty`]
pub const SHAPES_COUNT: usize = 8;

/// Interval between automatic advance ticks in milliseconds
pub const SPEED_MS: u32 = 300;

/// Host frame interval in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points awarded per cleared line. Multi-line clears earn no bonus.
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Shape tag stored in every board cell and carried by the active piece.
///
/// `Empty` is a valid steady state for a cell. The discriminants match the
/// row order of the shape coordinate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ShapeKind {
    #[default]
    Empty = 0,
    Z = 1,
    S = 2,
    Line = 3,
    T = 4,
    Square = 5,
    L = 6,
    MirroredL = 7,
}

impl ShapeKind {
    /// The seven playable shapes, in tag order.
    pub const PLAYABLE: [ShapeKind; 7] = [
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::Line,
        ShapeKind::T,
        ShapeKind::Square,
        ShapeKind::L,
        ShapeKind::MirroredL,
    ];

    /// Look up a tag by its numeric index (0..=7).
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(0), Some(ShapeKind::Empty));
    /// assert_eq!(ShapeKind::from_index(5), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_index(8), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(ShapeKind::Empty),
            1 => Some(ShapeKind::Z),
            2 => Some(ShapeKind::S),
            3 => Some(ShapeKind::Line),
            4 => Some(ShapeKind::T),
            5 => Some(ShapeKind::Square),
            6 => Some(ShapeKind::L),
            7 => Some(ShapeKind::MirroredL),
            _ => None,
        }
    }

    /// Numeric tag (0 for `Empty`).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn is_empty(self) -> bool {
        self == ShapeKind::Empty
    }

    /// Parse a tag from its name (case-insensitive)
    ///
    /// Accepts the long names as well as the usual one-letter aliases
    /// (`i` for Line, `o` for Square, `j` for MirroredL).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" => Some(ShapeKind::Empty),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "line" | "i" => Some(ShapeKind::Line),
            "t" => Some(ShapeKind::T),
            "square" | "o" => Some(ShapeKind::Square),
            "l" => Some(ShapeKind::L),
            "mirroredl" | "mirrored_l" | "j" => Some(ShapeKind::MirroredL),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Empty => "empty",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::Line => "line",
            ShapeKind::T => "t",
            ShapeKind::Square => "square",
            ShapeKind::L => "l",
            ShapeKind::MirroredL => "mirrored_l",
        }
    }
}

/// A cell on the game board.
pub type Cell = ShapeKind;

/// Player inputs understood by the engine.
///
/// These are logical actions; the terminal key mapping lives in the input crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Toggle pause (accepted while paused)
    Pause,
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate with `(x, y) -> (-y, x)` (bound to the down key)
    RotateRight,
    /// Rotate with `(x, y) -> (y, -x)` (bound to the up key)
    RotateLeft,
    /// Drop piece to its lowest legal row and land it
    HardDrop,
    /// Move piece down exactly one row, landing it if blocked
    OneLineDown,
    /// Ask whether to start a new game
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ONELINEDOWN"), Some(GameAction::OneLineDown));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::Pause),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotateright" => Some(GameAction::RotateRight),
            "rotateleft" => Some(GameAction::RotateLeft),
            "harddrop" => Some(GameAction::HardDrop),
            "onelinedown" => Some(GameAction::OneLineDown),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Pause => "pause",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateRight => "rotateRight",
            GameAction::RotateLeft => "rotateLeft",
            GameAction::HardDrop => "hardDrop",
            GameAction::OneLineDown => "oneLineDown",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle phase of the board engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Never started
    #[default]
    Idle,
    /// Active piece falling, timer running
    Running,
    /// Timer suspended, movement ignored
    Paused,
    /// A piece just landed; the next tick spawns a fresh piece
    LineClearPause,
    /// Spawn collided; waiting for a restart decision
    GameOver,
}

/// Text shown on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    Score { score: u32, max_score: u32 },
    Paused,
    GameOver,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Score { score, max_score } => {
                write!(f, "Score: {} | Max Score: {}", score, max_score)
            }
            StatusMessage::Paused => f.write_str("Paused"),
            StatusMessage::GameOver => f.write_str("Game Over"),
        }
    }
}

/// Engine-side notification, queued in order with the mutation that caused it.
///
/// The session layer drains these after every engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// New status line text
    Status(StatusMessage),
    /// Full rows were removed by a landing piece
    LinesCleared { count: u32, score: u32 },
    /// Current score to append to the score store
    RecordScore(u32),
    /// Spawn collided; the restart flow should run
    GameOver,
    /// The player pressed restart
    RestartRequested,
}
