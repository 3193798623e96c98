//! Moving placed pawns.

use serde::{Deserialize, Serialize};

use super::Modifier;
use crate::core::{Game, Pawn, PawnId, PlayerId, Position, Tile};

/// Move a placed pawn to an empty tile.
///
/// Not directly playable: movement is granted through cards, so the game
/// flow applies it after a selection completes. `apply` captures the pawn's
/// prior position; `rollback` consumes that capture and applies the inverse
/// move, so a second rollback without a fresh apply is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePawn {
    /// The pawn to move.
    pub pawn: PawnId,

    /// The target square.
    pub position: Position,

    /// Where the pawn stood before the last `apply`, if any.
    previous: Option<Position>,
}

impl MovePawn {
    /// Create a move of `pawn` to `position`.
    #[must_use]
    pub const fn new(pawn: PawnId, position: Position) -> Self {
        Self {
            pawn,
            position,
            previous: None,
        }
    }

    /// The inverse move of the last `apply`, if one happened.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        self.previous.map(|origin| Self::new(self.pawn, origin))
    }
}

impl Modifier for MovePawn {
    fn is_allowed(&self, game: &Game) -> bool {
        let tile_free = game.board.tile(self.position).is_some_and(Tile::is_empty);
        let pawn_placed = game.pawn(self.pawn).is_some_and(Pawn::is_placed);
        tile_free && pawn_placed
    }

    fn is_playable(&self, _game: &Game, _player: PlayerId) -> bool {
        false
    }

    fn apply(&mut self, game: &mut Game) {
        let Some(pawn) = game.pawn(self.pawn).copied() else {
            return;
        };
        let Some(origin) = pawn.position() else {
            return;
        };

        log::debug!("moving {} from {} to {}", self.pawn, origin, self.position);
        self.previous = Some(origin);
        game.pawns[self.pawn.index()] = Pawn::placed(self.pawn, pawn.owner(), self.position);
        game.board.put(Tile::occupied(self.position, self.pawn));
        game.board.put(Tile::empty(origin));
    }

    fn rollback(&mut self, game: &mut Game) {
        if let Some(mut inverse) = self.inverse() {
            self.previous = None;
            inverse.apply(game);
        }
    }
}
