//! Shape module - tetromino geometry and rotation
//!
//! Every shape is four `(dx, dy)` offsets taken from a fixed table. Rotation
//! never edits the table or the receiver; it derives a new [`Shape`] that the
//! engine validates before accepting.
//!
//! Offsets are applied to an anchor as `(x + dx, y - dy)`, so a positive `dy`
//! points toward the bottom of the board.

use rand::Rng;

use crate::types::{ShapeKind, SHAPES_COUNT};

/// Offset of a single cell relative to the piece anchor
pub type Offset = (i8, i8);

/// Coordinate table, one row per [`ShapeKind`] in tag order.
const COORDS_TABLE: [[Offset; 4]; SHAPES_COUNT] = [
    // Empty
    [(0, 0), (0, 0), (0, 0), (0, 0)],
    // Z
    [(0, -1), (0, 0), (-1, 0), (-1, 1)],
    // S
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    // Line
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    // T
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    // Square
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    // L
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    // MirroredL
    [(1, -1), (0, -1), (0, 0), (0, 1)],
];

/// Table offsets for a shape kind in spawn orientation.
pub fn table_coords(kind: ShapeKind) -> [Offset; 4] {
    COORDS_TABLE[kind.index() as usize]
}

/// A shape tag plus its four cell offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    coords: [Offset; 4],
}

impl Shape {
    /// Shape in table orientation for `kind`.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            coords: table_coords(kind),
        }
    }

    pub fn empty() -> Self {
        Self::new(ShapeKind::Empty)
    }

    /// Uniformly random playable shape; never `Empty`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut shape = Self::empty();
        shape.set_random_shape(rng);
        shape
    }

    /// Reset to the table orientation of `kind`.
    pub fn set_shape(&mut self, kind: ShapeKind) {
        self.coords = table_coords(kind);
        self.kind = kind;
    }

    pub fn set_random_shape<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let index = rng.gen_range(1..=ShapeKind::PLAYABLE.len() as u8);
        self.set_shape(ShapeKind::from_index(index).unwrap_or(ShapeKind::Line));
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn coords(&self) -> &[Offset; 4] {
        &self.coords
    }

    pub fn x(&self, index: usize) -> i8 {
        self.coords[index].0
    }

    pub fn y(&self, index: usize) -> i8 {
        self.coords[index].1
    }

    pub fn min_x(&self) -> i8 {
        self.coords.iter().map(|&(x, _)| x).min().unwrap_or(0)
    }

    pub fn max_x(&self) -> i8 {
        self.coords.iter().map(|&(x, _)| x).max().unwrap_or(0)
    }

    pub fn min_y(&self) -> i8 {
        self.coords.iter().map(|&(_, y)| y).min().unwrap_or(0)
    }

    pub fn max_y(&self) -> i8 {
        self.coords.iter().map(|&(_, y)| y).max().unwrap_or(0)
    }

    /// Rotated copy, `(x, y) -> (y, -x)`.
    ///
    /// The square is returned unchanged.
    pub fn rotate_left(&self) -> Self {
        if self.kind == ShapeKind::Square {
            return *self;
        }
        Self {
            kind: self.kind,
            coords: self.coords.map(|(x, y)| (y, -x)),
        }
    }

    /// Rotated copy, `(x, y) -> (-y, x)`.
    ///
    /// The square is returned unchanged.
    pub fn rotate_right(&self) -> Self {
        if self.kind == ShapeKind::Square {
            return *self;
        }
        Self {
            kind: self.kind,
            coords: self.coords.map(|(x, y)| (-y, x)),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        Self::new(kind)
    }
}
