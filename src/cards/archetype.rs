//! Movement archetypes.
//!
//! An archetype is a named displacement table: the set of squares a pawn may
//! jump to relative to where it stands. Cards grant archetypes; the standard
//! tables live here as constructors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, GameRng, Offset, Position};

/// A named displacement table.
///
/// ```
/// use tactics_core::cards::MoveArchetype;
/// use tactics_core::core::Position;
///
/// let knight = MoveArchetype::knight();
/// assert!(knight.reaches(Position::new(4, 4), Position::new(6, 5)));
/// assert!(!knight.reaches(Position::new(4, 4), Position::new(5, 5)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveArchetype {
    /// Display name.
    pub name: String,

    /// Activation cost of the card granting this movement.
    pub cost: u8,

    /// Reachable squares relative to the pawn.
    pub steps: SmallVec<[Offset; 8]>,
}

impl MoveArchetype {
    /// Create an archetype from a displacement table.
    pub fn new(name: impl Into<String>, cost: u8, steps: impl IntoIterator<Item = Offset>) -> Self {
        Self {
            name: name.into(),
            cost,
            steps: steps.into_iter().collect(),
        }
    }

    /// The four orthogonal unit steps.
    #[must_use]
    pub fn small_rivers() -> Self {
        Self::new(
            "Small Rivers",
            1,
            [
                Offset::new(0, 1),
                Offset::new(1, 0),
                Offset::new(0, -1),
                Offset::new(-1, 0),
            ],
        )
    }

    /// The eight knight jumps.
    #[must_use]
    pub fn knight() -> Self {
        Self::new(
            "Knight",
            2,
            [
                Offset::new(1, 2),
                Offset::new(2, 1),
                Offset::new(2, -1),
                Offset::new(1, -2),
                Offset::new(-1, -2),
                Offset::new(-2, -1),
                Offset::new(-2, 1),
                Offset::new(-1, 2),
            ],
        )
    }

    /// Whether `to` is reachable from `from` by this table.
    #[must_use]
    pub fn reaches(&self, from: Position, to: Position) -> bool {
        self.steps.iter().any(|&step| from + step == to)
    }

    /// The on-board squares reachable from `from`.
    ///
    /// Legality beyond the board edge (occupancy, whose turn) is the
    /// modifier system's concern, not the table's.
    #[must_use]
    pub fn destinations(&self, board: &Board, from: Position) -> Vec<Position> {
        self.steps
            .iter()
            .map(|&step| from + step)
            .filter(|&target| board.contains(target))
            .collect()
    }
}

/// An ordered pile of archetype cards with an active cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeStack {
    cards: Vec<MoveArchetype>,
    active: usize,
}

impl ArchetypeStack {
    /// Create a stack with the cursor on the first card.
    #[must_use]
    pub fn new(cards: Vec<MoveArchetype>) -> Self {
        Self { cards, active: 0 }
    }

    /// The standard beginner pile: four Small Rivers.
    #[must_use]
    pub fn small_rivers_stack() -> Self {
        Self::new(vec![MoveArchetype::small_rivers(); 4])
    }

    /// A single Knight.
    #[must_use]
    pub fn knight_stack() -> Self {
        Self::new(vec![MoveArchetype::knight()])
    }

    /// The card under the cursor.
    #[must_use]
    pub fn active(&self) -> Option<&MoveArchetype> {
        self.cards.get(self.active)
    }

    /// Move the cursor to the next card, wrapping around.
    pub fn advance(&mut self) {
        if !self.cards.is_empty() {
            self.active = (self.active + 1) % self.cards.len();
        }
    }

    /// Shuffle the pile and reset the cursor.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        self.active = 0;
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
