//! Game session - lifecycle and persistence around the board engine.
//!
//! A [`GameSession`] is an explicit value owned by the host application. It
//! drives the [`GameState`](tetromino_core::GameState) engine, appends score
//! records to a [`ScoreStore`](tetromino_store::ScoreStore), and forwards the
//! engine's notifications to the host through two seams:
//!
//! - [`StatusSink`]: fire-and-forget status line text (and store failures)
//! - [`RestartPrompt`]: the yes/no "play again?" decision after game over
//!
//! Every session call applies its engine mutation first and then delivers
//! the resulting notifications synchronously, in order, before returning.

pub mod session;
pub mod shell;

pub use tetromino_core as core;
pub use tetromino_store as store;
pub use tetromino_types as types;

pub use session::GameSession;
pub use shell::{Flow, RestartPrompt, StatusSink};
