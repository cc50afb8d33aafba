//! Terminal render surface.
//!
//! [`GameView`] turns a [`core::GameSnapshot`] plus the host's status line
//! into a character [`FrameBuffer`]; [`TerminalRenderer`] flushes frames to
//! the terminal, redrawing only the cells that changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetromino_core as core;
pub use tetromino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{shape_color, GameView, Hud, Viewport, COLOR_TABLE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
