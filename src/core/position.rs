//! Board coordinates and displacements.
//!
//! ## Position
//!
//! A coordinate on the board grid. `x` grows rightward, `y` grows downward.
//!
//! ## Offset
//!
//! A displacement between positions, used by movement archetypes to describe
//! reachable squares relative to a pawn.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A coordinate on the board grid.
///
/// Coordinates are signed so that off-board results of applying an [`Offset`]
/// stay representable; the board itself rejects them on lookup.
///
/// ```
/// use tactics_core::core::{Offset, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos + Offset::new(1, 0), Position::new(3, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The position reached by applying `offset`, saturating at the i8 range.
    #[must_use]
    pub fn offset(self, offset: Offset) -> Self {
        Self {
            x: self.x.saturating_add(offset.dx),
            y: self.y.saturating_add(offset.dy),
        }
    }
}

impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, offset: Offset) -> Position {
        self.offset(offset)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement applied to a [`Position`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub dx: i8,
    pub dy: i8,
}

impl Offset {
    /// Create a new offset.
    #[must_use]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }
}
