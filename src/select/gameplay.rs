//! Gameplay filters.
//!
//! Candidacy rules expressed in terms of the match: whose pawn is this,
//! whose turn is it, and would the resulting move even be legal. The
//! turn-aware pawn filters test currentness of different seats on purpose:
//! picking one of *your* pawns requires the pawn's owner to be the seat to
//! act, while picking an *enemy* pawn requires the session's own seat to be.
//!
//! [`filter_tiles_if_session_player_can_play`] is the bridge between the
//! two subsystems: it builds a throwaway [`Modifier`] per probed tile and
//! offers the tile only when that modifier would pass its legality checks.

use crate::core::Tile;
use crate::modifier::Modifier;
use crate::session::GameSession;

use super::filter::{filter_as_pawns, filter_as_tiles, SelectableFilter};

/// Accepts the session player's own pawns while their owner is the seat to
/// act.
#[must_use]
pub fn filter_pawns_owned_by_session_player_if_current() -> SelectableFilter {
    filter_as_pawns(|session, pawn| {
        session.player == pawn.owner() && session.game.is_current_player(pawn.owner())
    })
}

/// Accepts other seats' pawns while the session player is the seat to act.
#[must_use]
pub fn filter_pawns_owned_by_enemy_of_session_player_if_current() -> SelectableFilter {
    filter_as_pawns(|session, pawn| {
        session.player != pawn.owner() && session.game.is_current_player(session.player)
    })
}

/// Accepts tiles whose move, as built by `build`, would be legal for the
/// session player.
///
/// `build` constructs the modifier the tile stands for, or `None` when one
/// cannot be formed yet (an earlier selection stage has not filled in its
/// part). The tile is a candidate when the modifier is allowed by the game
/// state and playable by the session player; the modifier is then discarded.
#[must_use]
pub fn filter_tiles_if_session_player_can_play<M: Modifier>(
    build: impl Fn(&GameSession, &Tile) -> Option<M> + 'static,
) -> SelectableFilter {
    filter_as_tiles(move |session, tile| {
        build(session, tile).is_some_and(|modifier| {
            modifier.is_allowed(&session.game) && modifier.is_playable(&session.game, session.player)
        })
    })
}
