//! Deploying pawns onto the board.

use serde::{Deserialize, Serialize};

use super::Modifier;
use crate::core::{Game, Pawn, PawnId, PlayerId, Position, Tile};

/// Deploy a staging pawn onto an empty tile.
///
/// The one directly playable move: a seat places its own pawn. Rollback
/// returns the pawn to staging and empties the tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacePawn {
    /// The pawn to deploy.
    pub pawn: PawnId,

    /// The target square.
    pub position: Position,
}

impl PlacePawn {
    /// Create a deployment of `pawn` to `position`.
    #[must_use]
    pub const fn new(pawn: PawnId, position: Position) -> Self {
        Self { pawn, position }
    }
}

impl Modifier for PlacePawn {
    fn is_allowed(&self, game: &Game) -> bool {
        let tile_free = game.board.tile(self.position).is_some_and(Tile::is_empty);
        let pawn_staged = game.pawn(self.pawn).is_some_and(Pawn::is_staging);
        tile_free && pawn_staged
    }

    fn is_playable(&self, game: &Game, player: PlayerId) -> bool {
        game.pawn(self.pawn).is_some_and(|p| p.owner() == player)
    }

    fn apply(&mut self, game: &mut Game) {
        log::debug!("placing {} at {}", self.pawn, self.position);
        if let Some(pawn) = game.pawn_mut(self.pawn) {
            let owner = pawn.owner();
            *pawn = Pawn::placed(self.pawn, owner, self.position);
            game.board.put(Tile::occupied(self.position, self.pawn));
        }
    }

    fn rollback(&mut self, game: &mut Game) {
        log::debug!("recalling {} from {}", self.pawn, self.position);
        if let Some(pawn) = game.pawn_mut(self.pawn) {
            let owner = pawn.owner();
            *pawn = Pawn::staging(self.pawn, owner);
            game.board.put(Tile::empty(self.position));
        }
    }
}
