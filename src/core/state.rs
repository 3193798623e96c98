//! Match state.
//!
//! [`Game`] is the single mutable value the modifier system operates on:
//! the board, the pawn list, the rules, and whose turn it is. Pawns are
//! identified by their index in the pawn list, so granting a pawn is a push
//! and revoking the most recent grant is a pop.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::pawn::{Pawn, PawnId};
use super::player::PlayerId;
use super::rules::Rules;

/// Complete state of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// The board grid.
    pub board: Board,

    /// All pawns ever granted, indexed by [`PawnId`].
    pub pawns: Vec<Pawn>,

    /// Match parameters.
    pub rules: Rules,

    /// The seat whose turn it is.
    pub current_player: PlayerId,
}

impl Game {
    /// Create a fresh match: empty board, no pawns, seat 0 to act.
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self {
            board: Board::new(rules.board_width, rules.board_height),
            pawns: Vec::new(),
            rules,
            current_player: PlayerId::new(0),
        }
    }

    /// Look up a pawn by id.
    #[must_use]
    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.pawns.get(id.index())
    }

    /// Look up a pawn by id, mutably.
    pub fn pawn_mut(&mut self, id: PawnId) -> Option<&mut Pawn> {
        self.pawns.get_mut(id.index())
    }

    /// How many pawns `owner` has been granted (in any lifecycle state).
    #[must_use]
    pub fn pawn_count(&self, owner: PlayerId) -> usize {
        self.pawns.iter().filter(|p| p.owner() == owner).count()
    }

    /// The id the next granted pawn will receive.
    #[must_use]
    pub fn next_pawn_id(&self) -> PawnId {
        PawnId::new(self.pawns.len() as u32)
    }

    /// Whether `player` is the seat currently to act.
    #[must_use]
    pub fn is_current_player(&self, player: PlayerId) -> bool {
        self.current_player == player
    }

    /// Pass the turn to the next seat, round-robin.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.next(self.rules.player_count);
    }

    /// Serialize the match into a compact binary snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        bincode::serialize(self).ok()
    }

    /// Restore a match from a [`Self::snapshot`], or `None` on malformed
    /// bytes.
    #[must_use]
    pub fn from_snapshot(bytes: &[u8]) -> Option<Self> {
        bincode::deserialize(bytes).ok()
    }
}
