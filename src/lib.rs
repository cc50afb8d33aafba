//! Tetromino (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration
//! tests and benches can reach every layer as `tetromino::{core, session, ...}`.

pub use tetromino_core as core;
pub use tetromino_input as input;
pub use tetromino_session as session;
pub use tetromino_store as store;
pub use tetromino_term as term;
pub use tetromino_types as types;
