//! Pawns and their lifecycle.
//!
//! A pawn is granted to a player (`Staging`), then deployed onto the board
//! (`Placed`). The id is the pawn's index in the game's pawn list; selection
//! code identifies pawns by it (a pick survives the pawn being deployed),
//! while `Pawn` equality itself is structural so that whole-state
//! comparisons see lifecycle changes.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;

/// Pawn identifier: the index of the pawn in [`Game::pawns`].
///
/// [`Game::pawns`]: crate::core::Game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PawnId(pub u32);

impl PawnId {
    /// Create a new pawn ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the ID as a list index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PawnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pawn {}", self.0)
    }
}

/// A pawn in one of its lifecycle states.
///
/// ```
/// use tactics_core::core::{Pawn, PawnId, PlayerId, Position};
///
/// let staged = Pawn::staging(PawnId::new(0), PlayerId::new(1));
/// let placed = Pawn::placed(PawnId::new(0), PlayerId::new(1), Position::new(2, 3));
///
/// // Identity survives deployment.
/// assert_eq!(staged.id(), placed.id());
/// assert_eq!(staged.position(), None);
/// assert_eq!(placed.position(), Some(Position::new(2, 3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pawn {
    /// Granted to a player but not yet on the board.
    Staging { id: PawnId, owner: PlayerId },
    /// Standing on a board tile.
    Placed {
        id: PawnId,
        owner: PlayerId,
        position: Position,
    },
}

impl Pawn {
    /// Create a pawn in the staging area.
    #[must_use]
    pub const fn staging(id: PawnId, owner: PlayerId) -> Self {
        Self::Staging { id, owner }
    }

    /// Create a pawn standing on the board.
    #[must_use]
    pub const fn placed(id: PawnId, owner: PlayerId, position: Position) -> Self {
        Self::Placed {
            id,
            owner,
            position,
        }
    }

    /// The pawn's identifier.
    #[must_use]
    pub const fn id(&self) -> PawnId {
        match self {
            Self::Staging { id, .. } | Self::Placed { id, .. } => *id,
        }
    }

    /// The seat that owns this pawn.
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        match self {
            Self::Staging { owner, .. } | Self::Placed { owner, .. } => *owner,
        }
    }

    /// The pawn's board position, if deployed.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Staging { .. } => None,
            Self::Placed { position, .. } => Some(*position),
        }
    }

    /// Whether the pawn is still in the staging area.
    #[must_use]
    pub const fn is_staging(&self) -> bool {
        matches!(self, Self::Staging { .. })
    }

    /// Whether the pawn stands on the board.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_accessors() {
        let pawn = Pawn::placed(PawnId::new(3), PlayerId::new(1), Position::new(4, 5));
        assert_eq!(pawn.id(), PawnId::new(3));
        assert_eq!(pawn.owner(), PlayerId::new(1));
        assert_eq!(pawn.position(), Some(Position::new(4, 5)));
        assert!(pawn.is_placed());
        assert!(!pawn.is_staging());
    }

    #[test]
    fn test_pawn_equality_is_structural() {
        let staged = Pawn::staging(PawnId::new(2), PlayerId::new(0));
        let placed = Pawn::placed(PawnId::new(2), PlayerId::new(0), Position::new(0, 0));

        // Deployment changes the pawn value even though the id survives.
        assert_ne!(staged, placed);
        assert_eq!(staged.id(), placed.id());
        assert_eq!(staged, Pawn::staging(PawnId::new(2), PlayerId::new(0)));
    }

    #[test]
    fn test_pawn_serialization() {
        let pawn = Pawn::placed(PawnId::new(7), PlayerId::new(1), Position::new(1, 6));
        let json = serde_json::to_string(&pawn).unwrap();
        let back: Pawn = serde_json::from_str(&json).unwrap();
        assert_eq!(back.position(), Some(Position::new(1, 6)));
    }
}
