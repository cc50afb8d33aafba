//! Randomizer module - where new pieces come from
//!
//! The engine draws every spawn from a [`ShapeSource`]. Production play uses
//! [`RandomShapes`] (uniform over the seven playable shapes, driven by any
//! [`rand::Rng`]); tests and replays use [`ScriptedShapes`].

use rand::Rng;

use crate::shape::Shape;
use crate::types::ShapeKind;

/// Supplies the shape kind of each newly spawned piece.
///
/// Implementations must never return [`ShapeKind::Empty`].
pub trait ShapeSource {
    fn next_shape(&mut self) -> ShapeKind;
}

/// Uniform random choice among the seven playable shapes.
#[derive(Debug, Clone)]
pub struct RandomShapes<R> {
    rng: R,
}

impl<R: Rng> RandomShapes<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ShapeSource for RandomShapes<R> {
    fn next_shape(&mut self) -> ShapeKind {
        Shape::random(&mut self.rng).kind()
    }
}

/// Repeats a fixed sequence of shapes forever.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    script: Vec<ShapeKind>,
    cursor: usize,
}

impl ScriptedShapes {
    /// `Empty` entries are skipped; an empty script falls back to all
    /// playable shapes in tag order.
    pub fn new(script: impl IntoIterator<Item = ShapeKind>) -> Self {
        let mut script: Vec<ShapeKind> = script.into_iter().filter(|k| !k.is_empty()).collect();
        if script.is_empty() {
            script = ShapeKind::PLAYABLE.to_vec();
        }
        Self { script, cursor: 0 }
    }

    /// The same shape on every spawn.
    pub fn repeat(kind: ShapeKind) -> Self {
        Self::new([kind])
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_shape(&mut self) -> ShapeKind {
        let kind = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        kind
    }
}
