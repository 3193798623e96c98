//! Candidacy filters.
//!
//! A filter decides whether a [`Selectable`] may be offered by a selector,
//! given the session asking. Filters compose by conjunction with [`filters`];
//! the `filter_as_*` builders add a payload predicate on top of the variant
//! check, which is how the gameplay layer expresses "a tile such that ...".

use crate::cards::Card;
use crate::core::{Pawn, Tile};
use crate::session::GameSession;

use super::selectable::Selectable;

/// A candidacy predicate over selectable elements.
pub type SelectableFilter = Box<dyn Fn(&GameSession, &Selectable) -> bool>;

/// The conjunction of `parts`: every filter must accept the element.
///
/// An empty list accepts everything.
#[must_use]
pub fn filters(parts: Vec<SelectableFilter>) -> SelectableFilter {
    Box::new(move |session, element| parts.iter().all(|part| part(session, element)))
}

/// Accepts any tile.
#[must_use]
pub fn filter_tiles() -> SelectableFilter {
    Box::new(|_, element| element.as_tile().is_some())
}

/// Accepts any pawn.
#[must_use]
pub fn filter_pawns() -> SelectableFilter {
    Box::new(|_, element| element.as_pawn().is_some())
}

/// Accepts any card.
#[must_use]
pub fn filter_cards() -> SelectableFilter {
    Box::new(|_, element| element.as_card().is_some())
}

/// Accepts tiles for which `predicate` holds.
#[must_use]
pub fn filter_as_tiles(
    predicate: impl Fn(&GameSession, &Tile) -> bool + 'static,
) -> SelectableFilter {
    Box::new(move |session, element| {
        element
            .as_tile()
            .is_some_and(|tile| predicate(session, tile))
    })
}

/// Accepts pawns for which `predicate` holds.
#[must_use]
pub fn filter_as_pawns(
    predicate: impl Fn(&GameSession, &Pawn) -> bool + 'static,
) -> SelectableFilter {
    Box::new(move |session, element| {
        element
            .as_pawn()
            .is_some_and(|pawn| predicate(session, pawn))
    })
}

/// Accepts cards for which `predicate` holds.
#[must_use]
pub fn filter_as_cards(
    predicate: impl Fn(&GameSession, &Card) -> bool + 'static,
) -> SelectableFilter {
    Box::new(move |session, element| {
        element
            .as_card()
            .is_some_and(|card| predicate(session, card))
    })
}
