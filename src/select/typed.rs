//! Single-pick selectors with typed completion.
//!
//! Convenience constructors for the most common leaf shape: pick exactly
//! one tile or pawn and hand the payload, already coerced, to a callback.
//! The candidacy filter is the variant check conjoined with the caller's
//! domain filter, so the callback only ever sees well-formed picks.

use crate::core::{Pawn, Tile};

use super::amount::AmountSelector;
use super::filter::{filter_pawns, filter_tiles, filters, SelectableFilter};
use super::selectable::Selectable;
use super::selector::Selector;

/// A single-tile selector delivering the picked [`Tile`] to `callback`.
#[must_use]
pub fn one_tile(filter: SelectableFilter, mut callback: impl FnMut(Tile) + 'static) -> AmountSelector {
    let mut selector = AmountSelector::once(filters(vec![filter_tiles(), filter]));
    selector.on_finished(Box::new(move |tree| {
        if let Some(tile) = tree.single().and_then(Selectable::as_tile) {
            callback(*tile);
        }
    }));
    selector
}

/// A single-pawn selector delivering the picked [`Pawn`] to `callback`.
#[must_use]
pub fn one_pawn(filter: SelectableFilter, mut callback: impl FnMut(Pawn) + 'static) -> AmountSelector {
    let mut selector = AmountSelector::once(filters(vec![filter_pawns(), filter]));
    selector.on_finished(Box::new(move |tree| {
        if let Some(pawn) = tree.single().and_then(Selectable::as_pawn) {
            callback(*pawn);
        }
    }));
    selector
}
