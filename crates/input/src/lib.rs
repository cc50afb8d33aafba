//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values and
//! answers to the "play again?" question. Repeat handling is left to the
//! terminal's own key repeat.

pub mod map;

pub use tetromino_types as types;

pub use map::{confirm_key, handle_key_event, should_quit};
