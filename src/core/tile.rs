//! Board tiles.
//!
//! A tile is one square of the board grid, either empty or occupied by a
//! pawn. The position identifies the square; selection code compares tiles
//! by it (a picked square stays picked when its occupancy changes), while
//! `Tile` equality itself is structural so that whole-board comparisons see
//! occupancy changes.

use serde::{Deserialize, Serialize};

use super::pawn::PawnId;
use super::position::Position;

/// One square of the board.
///
/// ```
/// use tactics_core::core::{PawnId, Position, Tile};
///
/// let occupied = Tile::occupied(Position::new(2, 3), PawnId::new(0));
/// assert_eq!(occupied.position(), Position::new(2, 3));
/// assert_eq!(occupied.pawn(), Some(PawnId::new(0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// An empty square.
    Empty { position: Position },
    /// A square holding a pawn.
    Occupied { position: Position, pawn: PawnId },
}

impl Tile {
    /// Create an empty tile.
    #[must_use]
    pub const fn empty(position: Position) -> Self {
        Self::Empty { position }
    }

    /// Create a tile occupied by `pawn`.
    #[must_use]
    pub const fn occupied(position: Position, pawn: PawnId) -> Self {
        Self::Occupied { position, pawn }
    }

    /// The tile's board position.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Empty { position } | Self::Occupied { position, .. } => *position,
        }
    }

    /// The occupying pawn, if any.
    #[must_use]
    pub const fn pawn(&self) -> Option<PawnId> {
        match self {
            Self::Empty { .. } => None,
            Self::Occupied { pawn, .. } => Some(*pawn),
        }
    }

    /// Whether the tile is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Whether the tile holds a pawn.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_accessors() {
        let tile = Tile::occupied(Position::new(1, 2), PawnId::new(4));
        assert_eq!(tile.position(), Position::new(1, 2));
        assert_eq!(tile.pawn(), Some(PawnId::new(4)));
        assert!(tile.is_occupied());
        assert!(!tile.is_empty());
    }

    #[test]
    fn test_tile_equality_is_structural() {
        let empty = Tile::empty(Position::new(3, 3));
        let occupied = Tile::occupied(Position::new(3, 3), PawnId::new(0));

        // Occupancy changes the tile value even though the square survives.
        assert_ne!(empty, occupied);
        assert_eq!(empty.position(), occupied.position());
        assert_eq!(empty, Tile::empty(Position::new(3, 3)));
    }

    #[test]
    fn test_tile_serialization() {
        let tile = Tile::occupied(Position::new(0, 7), PawnId::new(2));
        let json = serde_json::to_string(&tile).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pawn(), Some(PawnId::new(2)));
        assert_eq!(back.position(), Position::new(0, 7));
    }
}
