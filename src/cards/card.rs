//! Cards and their identity.

use serde::{Deserialize, Serialize};

use super::archetype::MoveArchetype;

/// Card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card {}", self.0)
    }
}

/// A playable card granting a movement archetype.
///
/// The id identifies the card within its registry; selection code compares
/// cards by it. The registry assigns ids, so two cards never share one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within a registry.
    pub id: CardId,

    /// The movement this card grants.
    pub archetype: MoveArchetype,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(id: CardId, archetype: MoveArchetype) -> Self {
        Self { id, archetype }
    }
}
