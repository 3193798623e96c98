//! # tactics-core
//!
//! The input-resolution and state-mutation core of a turn-based grid
//! tactics game: players deploy pawns onto a board and move them with
//! cards, and this crate decides what they may click next and how the
//! resulting move changes (and un-changes) the match.
//!
//! ## Design Principles
//!
//! 1. **Selection Is a Tree**: A move's input shape is composed from small
//!    selector state machines (pick N of these, one of those, this then
//!    that). The input layer drives the tree one toggle at a time and never
//!    knows what it is selecting for.
//!
//! 2. **Mutations Are Commands**: Every state change is a modifier value
//!    with its own legality checks, `apply`, and `rollback`. Undo and
//!    speculative "would this move be legal" probing both fall out of the
//!    same contract.
//!
//! 3. **Configuration Over Convention**: Board dimensions, seat count, and
//!    pawn allotments come from `Rules` at startup; nothing is hardcoded.
//!
//! ## Architecture
//!
//! - **Candidacy Before Toggling**: Selectors answer `is_candidate` so the
//!   UI only offers elements the current selection stage would accept; the
//!   gameplay filters probe modifier legality to keep illegal moves from
//!   ever lighting up.
//!
//! - **Boolean Legality, No Error Plumbing**: Misuse is prevented by gating
//!   (`can_play`, `is_candidate`), not detected by the mutation path:
//!   `apply` re-checks nothing, and lookups fall back on `Option` so
//!   misuse cannot panic.
//!
//! - **Deterministic RNG**: Shuffles go through a seeded `GameRng`, so the
//!   same seed always produces the same match.
//!
//! ## Modules
//!
//! - `core`: players, positions, pawns, tiles, the board, rules, match
//!   state, RNG
//! - `session`: a seat-scoped view of a match
//! - `select`: selectables, the selector contract, leaves and combinators,
//!   candidacy filters
//! - `modifier`: reversible precondition-gated mutations
//! - `cards`: movement archetypes, cards, and the registry
//! - `games`: a reference game wiring the crate together

pub mod core;
pub mod session;
pub mod select;
pub mod modifier;
pub mod cards;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Board, Game, GameRng, Offset, Pawn, PawnId, PlayerId, Position, Rules, Tile,
};

pub use crate::session::GameSession;

pub use crate::select::{
    AmountSelector, ChainedSelector, DummySelector, FinishCallback, InlineSelector,
    MergeSelector, OrSelector, Selectable, SelectableFilter, SelectedTree, Selector,
};

pub use crate::modifier::{can_play, AddPawn, Modifier, MovePawn, PlacePawn};

pub use crate::cards::{ArchetypeStack, Card, CardId, CardRegistry, MoveArchetype};
