//! Card registry for lookup by id.
//!
//! The `CardRegistry` owns a game's card pool. Cards are minted from
//! archetypes with auto-assigned ids, then looked up by [`CardId`] when a
//! selection or a hand refers to them.

use rustc_hash::FxHashMap;

use super::archetype::MoveArchetype;
use super::card::{Card, CardId};

/// Registry of a game's cards.
///
/// ## Example
///
/// ```
/// use tactics_core::cards::{CardRegistry, MoveArchetype};
///
/// let mut registry = CardRegistry::new();
/// let id = registry.register(MoveArchetype::knight());
///
/// assert_eq!(registry.get(id).unwrap().archetype.name, "Knight");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a card from an archetype with an auto-assigned id.
    ///
    /// Returns the assigned id.
    pub fn register(&mut self, archetype: MoveArchetype) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        self.cards.insert(id, Card::new(id, archetype));
        id
    }

    /// The original game's pool: four Small Rivers and one Knight.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for _ in 0..4 {
            registry.register(MoveArchetype::small_rivers());
        }
        registry.register(MoveArchetype::knight());
        registry
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
