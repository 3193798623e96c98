//! Selection system: accumulating player picks into structured results.
//!
//! ## Key Types
//!
//! - `Selectable`: the unit of pickable content (tile, pawn, card, none)
//! - `SelectedTree`: what a finished selection produces (leaf or root)
//! - `Selector`: the state-machine contract all selectors share
//! - `AmountSelector` / `DummySelector` / `InlineSelector`: leaves
//! - `OrSelector` / `MergeSelector` / `ChainedSelector`: combinators
//! - `SelectableFilter`: candidacy predicates, composed with `filters`
//!
//! ## Composing a selection
//!
//! An effect describes the input it needs as a tree of selectors: leaves
//! accumulate picks against a filter, `Or` offers alternatives and commits
//! to the first branch picked into, `Merge` routes each pick to every
//! matching branch, and `Chained` runs stages in order with the previous
//! stage reachable for revision until the new one has picks. The input
//! layer drives the tree one [`Selector::toggle`] at a time and reads
//! [`Selector::is_candidate`] to know what to highlight.

pub mod amount;
pub mod chain;
pub mod filter;
pub mod gameplay;
pub mod merge;
pub mod or;
pub mod selectable;
pub mod selector;
pub mod typed;

pub use amount::{AmountSelector, DummySelector};
pub use chain::ChainedSelector;
pub use filter::{
    filter_as_cards, filter_as_pawns, filter_as_tiles, filter_cards, filter_pawns, filter_tiles,
    filters, SelectableFilter,
};
pub use gameplay::{
    filter_pawns_owned_by_enemy_of_session_player_if_current,
    filter_pawns_owned_by_session_player_if_current, filter_tiles_if_session_player_can_play,
};
pub use merge::MergeSelector;
pub use or::OrSelector;
pub use selectable::{Selectable, SelectedTree};
pub use selector::{FinishCallback, InlineSelector, Selector};
pub use typed::{one_pawn, one_tile};
