//! Reversible state mutations.
//!
//! Every change to a [`Game`] goes through a modifier: a small command value
//! that knows how to check its own legality, perform its mutation, and undo
//! it. Selection code probes modifiers speculatively (build one, ask if it
//! is allowed, throw it away) so the UI only ever offers legal moves.
//!
//! ## Contract
//!
//! - [`Modifier::is_allowed`] checks the state-level precondition.
//! - [`Modifier::is_playable`] checks whether a given seat may initiate the
//!   change. System-granted effects return `false` here and are applied by
//!   the game flow directly.
//! - [`Modifier::apply`] mutates the game. Callers gate it with
//!   `is_allowed`; `apply` itself re-checks nothing. Misuse never panics:
//!   lookups fall back on `Option`, and an operation whose referent is
//!   missing falls through untouched.
//! - [`Modifier::rollback`] is the trusted inverse of this value's most
//!   recent `apply`. It re-checks nothing, so rollbacks must mirror apply
//!   order (last applied, first rolled back).
//!
//! ## Modifiers
//!
//! - [`AddPawn`]: grant a staging pawn to a seat.
//! - [`PlacePawn`]: deploy a staging pawn onto an empty tile.
//! - [`MovePawn`]: move a placed pawn to an empty tile.

pub mod add_pawn;
pub mod move_pawn;
pub mod place_pawn;

pub use add_pawn::AddPawn;
pub use move_pawn::MovePawn;
pub use place_pawn::PlacePawn;

use crate::core::{Game, PlayerId};

/// A reversible, precondition-gated mutation of a [`Game`].
pub trait Modifier {
    /// State-level precondition: is this change legal right now.
    fn is_allowed(&self, game: &Game) -> bool;

    /// Actor-level precondition: may `player` initiate this change.
    fn is_playable(&self, game: &Game, player: PlayerId) -> bool;

    /// Perform the mutation. Callers gate this with [`Self::is_allowed`].
    fn apply(&mut self, game: &mut Game);

    /// Undo this value's most recent [`Self::apply`]. No re-checks.
    fn rollback(&mut self, game: &mut Game);
}

/// Whether `player` may play `modifier` right now.
///
/// Checks, in order and short-circuiting: `player` is the current seat, the
/// modifier is allowed, and the modifier is playable by `player`.
#[must_use]
pub fn can_play(game: &Game, modifier: &dyn Modifier, player: PlayerId) -> bool {
    if !game.is_current_player(player) {
        return false;
    }
    if !modifier.is_allowed(game) {
        return false;
    }
    modifier.is_playable(game, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use std::cell::Cell;

    /// Records which checks ran, to observe `can_play`'s short-circuit order.
    struct Probe {
        allowed: bool,
        playable: bool,
        allowed_calls: Cell<u32>,
        playable_calls: Cell<u32>,
    }

    impl Probe {
        fn new(allowed: bool, playable: bool) -> Self {
            Self {
                allowed,
                playable,
                allowed_calls: Cell::new(0),
                playable_calls: Cell::new(0),
            }
        }
    }

    impl Modifier for Probe {
        fn is_allowed(&self, _game: &Game) -> bool {
            self.allowed_calls.set(self.allowed_calls.get() + 1);
            self.allowed
        }

        fn is_playable(&self, _game: &Game, _player: PlayerId) -> bool {
            self.playable_calls.set(self.playable_calls.get() + 1);
            self.playable
        }

        fn apply(&mut self, _game: &mut Game) {}

        fn rollback(&mut self, _game: &mut Game) {}
    }

    #[test]
    fn test_can_play_requires_current_player() {
        let game = Game::new(Rules::default());
        let probe = Probe::new(true, true);

        assert!(!can_play(&game, &probe, PlayerId::new(1)));
        assert_eq!(probe.allowed_calls.get(), 0);
        assert_eq!(probe.playable_calls.get(), 0);
    }

    #[test]
    fn test_can_play_stops_at_disallowed() {
        let game = Game::new(Rules::default());
        let probe = Probe::new(false, true);

        assert!(!can_play(&game, &probe, PlayerId::new(0)));
        assert_eq!(probe.allowed_calls.get(), 1);
        assert_eq!(probe.playable_calls.get(), 0);
    }

    #[test]
    fn test_can_play_checks_playability_last() {
        let game = Game::new(Rules::default());
        let probe = Probe::new(true, false);

        assert!(!can_play(&game, &probe, PlayerId::new(0)));
        assert_eq!(probe.allowed_calls.get(), 1);
        assert_eq!(probe.playable_calls.get(), 1);
    }

    #[test]
    fn test_can_play_all_checks_pass() {
        let game = Game::new(Rules::default());
        let probe = Probe::new(true, true);

        assert!(can_play(&game, &probe, PlayerId::new(0)));
    }
}
