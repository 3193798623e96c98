//! Selectable elements and selection results.
//!
//! ## Selectable
//!
//! The unit the input layer feeds into selectors: a tile, a pawn, a card,
//! or `None`. Equality follows each payload's identity (tiles by position,
//! pawns and cards by id); values of different variants never match, and
//! `None` never matches anything, itself included. `None` behaves like an
//! unknown: a selector holding it will never report it as selected, so it
//! cannot be deselected, only evicted.
//!
//! ## SelectedTree
//!
//! What a finished selector emits: a `Leaf` of picked items for leaf
//! selectors, or a `Root` of child trees for staged shapes.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Pawn, Tile};

/// An element offered to, and picked by, selectors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Selectable {
    /// The absence of a pick.
    None,
    /// A board square.
    Tile(Tile),
    /// A pawn in any lifecycle state.
    Pawn(Pawn),
    /// A card.
    Card(Card),
}

impl Selectable {
    /// The tile payload, if this is a tile.
    #[must_use]
    pub const fn as_tile(&self) -> Option<&Tile> {
        match self {
            Self::Tile(tile) => Some(tile),
            _ => None,
        }
    }

    /// The pawn payload, if this is a pawn.
    #[must_use]
    pub const fn as_pawn(&self) -> Option<&Pawn> {
        match self {
            Self::Pawn(pawn) => Some(pawn),
            _ => None,
        }
    }

    /// The card payload, if this is a card.
    #[must_use]
    pub const fn as_card(&self) -> Option<&Card> {
        match self {
            Self::Card(card) => Some(card),
            _ => None,
        }
    }
}

// Identity equality per variant: a picked square stays picked when its
// occupancy changes, a picked pawn when it is deployed. None carries no
// identity, so it matches nothing. Intentionally not Eq.
impl PartialEq for Selectable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Tile(a), Self::Tile(b)) => a.position() == b.position(),
            (Self::Pawn(a), Self::Pawn(b)) => a.id() == b.id(),
            (Self::Card(a), Self::Card(b)) => a.id == b.id,
            _ => false,
        }
    }
}

impl From<Tile> for Selectable {
    fn from(tile: Tile) -> Self {
        Self::Tile(tile)
    }
}

impl From<Pawn> for Selectable {
    fn from(pawn: Pawn) -> Self {
        Self::Pawn(pawn)
    }
}

impl From<Card> for Selectable {
    fn from(card: Card) -> Self {
        Self::Card(card)
    }
}

/// The result a finished selector emits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SelectedTree {
    /// Picks of a single selector, in selection order.
    Leaf { items: Vec<Selectable> },
    /// One child tree per stage or branch.
    Root { children: Vec<SelectedTree> },
}

impl SelectedTree {
    /// A leaf holding `items`.
    #[must_use]
    pub fn leaf(items: Vec<Selectable>) -> Self {
        Self::Leaf { items }
    }

    /// A leaf with no picks.
    #[must_use]
    pub fn empty_leaf() -> Self {
        Self::Leaf { items: Vec::new() }
    }

    /// A root over `children`.
    #[must_use]
    pub fn root(children: Vec<SelectedTree>) -> Self {
        Self::Root { children }
    }

    /// The items, if this is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&[Selectable]> {
        match self {
            Self::Leaf { items } => Some(items),
            Self::Root { .. } => None,
        }
    }

    /// The child trees, if this is a root.
    #[must_use]
    pub fn children(&self) -> Option<&[SelectedTree]> {
        match self {
            Self::Leaf { .. } => None,
            Self::Root { children } => Some(children),
        }
    }

    /// The first item of a leaf, if any.
    #[must_use]
    pub fn single(&self) -> Option<&Selectable> {
        self.as_leaf().and_then(<[Selectable]>::first)
    }

    /// Whether this is a leaf with no picks.
    #[must_use]
    pub fn is_empty_leaf(&self) -> bool {
        self.as_leaf().is_some_and(<[Selectable]>::is_empty)
    }
}
