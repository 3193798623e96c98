//! Granting pawns.

use serde::{Deserialize, Serialize};

use super::Modifier;
use crate::core::{Game, Pawn, PlayerId};

/// Grant a new staging pawn to a seat.
///
/// This is a system-granted effect (game setup, a card's reward): it is
/// never playable directly, only allowed or not. The new pawn takes the next
/// free id, so rollback is a pop of the pawn list; interleaving rollbacks
/// with other grants is a contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPawn {
    /// The seat receiving the pawn.
    pub owner: PlayerId,
}

impl AddPawn {
    /// Create a grant for `owner`.
    #[must_use]
    pub const fn new(owner: PlayerId) -> Self {
        Self { owner }
    }
}

impl Modifier for AddPawn {
    fn is_allowed(&self, game: &Game) -> bool {
        game.pawn_count(self.owner) < game.rules.max_pawns_per_player
    }

    fn is_playable(&self, _game: &Game, _player: PlayerId) -> bool {
        false
    }

    fn apply(&mut self, game: &mut Game) {
        let id = game.next_pawn_id();
        log::debug!("granting {} to {}", id, self.owner);
        game.pawns.push(Pawn::staging(id, self.owner));
    }

    fn rollback(&mut self, game: &mut Game) {
        log::debug!("revoking the latest pawn of {}", self.owner);
        game.pawns.pop();
    }
}
