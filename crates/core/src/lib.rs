//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board engine: every rule that decides whether a
//! move is legal and what happens to the board next. It has no dependencies
//! on terminal I/O or persistence, which makes it:
//!
//! - **Deterministic**: an injected [`ShapeSource`] fixes the piece sequence
//! - **Testable**: the whole lifecycle can be driven with plain method calls
//! - **Portable**: the host decides how to draw, prompt, and store scores
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 grid of shape tags with full-row compaction
//! - [`shape`]: tetromino coordinate table and rotation transforms
//! - [`randomizer`]: uniform random and scripted shape sources
//! - [`game_state`]: the engine state machine (spawn, move, land, clear, score)
//! - [`config`]: engine tuning knobs
//! - [`snapshot`]: copyable render surface for front ends
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tetromino_core::{EngineConfig, GameState, RandomShapes};
//! use tetromino_types::{GameAction, Phase};
//!
//! let shapes = RandomShapes::new(StdRng::seed_from_u64(7));
//! let mut game = GameState::new(shapes, EngineConfig::default());
//! game.start();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::HardDrop);
//!
//! // A landed piece always waits for the next tick before the next spawn.
//! assert_eq!(game.phase(), Phase::LineClearPause);
//! game.advance();
//! assert!(game.active().is_some());
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod randomizer;
pub mod shape;
pub mod snapshot;

pub use tetromino_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::EngineConfig;
pub use game_state::{GameState, Piece};
pub use randomizer::{RandomShapes, ScriptedShapes, ShapeSource};
pub use shape::{table_coords, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
