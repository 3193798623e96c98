//! Skirmish game implementation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cards::Card;
use crate::core::{Game, Pawn, PawnId, PlayerId, Rules};
use crate::modifier::{AddPawn, Modifier, MovePawn, PlacePawn};
use crate::select::{
    filter_as_pawns, filter_as_tiles, filter_pawns_owned_by_session_player_if_current,
    filter_tiles_if_session_player_can_play, filters, one_pawn, AmountSelector, ChainedSelector,
    SelectedTree,
};

/// Create a match and grant every seat its full pawn allotment.
#[must_use]
pub fn setup(rules: Rules) -> Game {
    let mut game = Game::new(rules);
    for player in PlayerId::all(game.rules.player_count as usize) {
        let mut grant = AddPawn::new(player);
        while grant.is_allowed(&game) {
            grant.apply(&mut game);
        }
    }
    game
}

/// The deployment pick: one of the session player's staged pawns, then a
/// square where placing it would be legal.
///
/// The stage-2 filter probes a [`PlacePawn`] built from the stage-1 choice,
/// so only squares forming a legal placement light up, and they follow the
/// pawn choice when the player revises it.
#[must_use]
pub fn deployment_selector() -> ChainedSelector {
    let slot: Rc<RefCell<Option<PawnId>>> = Rc::new(RefCell::new(None));

    let picked = Rc::clone(&slot);
    let pick_pawn = one_pawn(
        filters(vec![
            filter_pawns_owned_by_session_player_if_current(),
            filter_as_pawns(|_, pawn| pawn.is_staging()),
        ]),
        move |pawn| *picked.borrow_mut() = Some(pawn.id()),
    );

    let chosen = Rc::clone(&slot);
    let pick_tile = AmountSelector::once(filter_tiles_if_session_player_can_play(
        move |_, tile| chosen.borrow().map(|pawn| PlacePawn::new(pawn, tile.position())),
    ));

    ChainedSelector::new(vec![Box::new(pick_pawn), Box::new(pick_tile)])
}

/// Rebuild the [`PlacePawn`] a finished deployment selection stands for.
#[must_use]
pub fn deployment_modifier(tree: &SelectedTree) -> Option<PlacePawn> {
    let children = tree.children()?;
    let pawn = children.first()?.single()?.as_pawn()?.id();
    let position = children.get(1)?.single()?.as_tile()?.position();
    Some(PlacePawn::new(pawn, position))
}

/// The movement pick granted by `card`: one of the session player's placed
/// pawns, then an empty square its archetype reaches.
///
/// The stage-2 filter checks reachability per the card's displacement table
/// and [`MovePawn::is_allowed`]; playability is not probed because movement
/// is applied by the game flow, not initiated directly.
#[must_use]
pub fn movement_selector(card: Card) -> ChainedSelector {
    let slot: Rc<RefCell<Option<PawnId>>> = Rc::new(RefCell::new(None));

    let picked = Rc::clone(&slot);
    let pick_pawn = one_pawn(
        filters(vec![
            filter_pawns_owned_by_session_player_if_current(),
            filter_as_pawns(|_, pawn| pawn.is_placed()),
        ]),
        move |pawn| *picked.borrow_mut() = Some(pawn.id()),
    );

    let chosen = Rc::clone(&slot);
    let pick_tile = AmountSelector::once(filter_as_tiles(move |session, tile| {
        let Some(pawn) = *chosen.borrow() else {
            return false;
        };
        let Some(origin) = session.game.pawn(pawn).and_then(Pawn::position) else {
            return false;
        };
        card.archetype.reaches(origin, tile.position())
            && MovePawn::new(pawn, tile.position()).is_allowed(&session.game)
    }));

    ChainedSelector::new(vec![Box::new(pick_pawn), Box::new(pick_tile)])
}

/// Rebuild the [`MovePawn`] a finished movement selection stands for.
#[must_use]
pub fn movement_modifier(tree: &SelectedTree) -> Option<MovePawn> {
    let children = tree.children()?;
    let pawn = children.first()?.single()?.as_pawn()?.id();
    let position = children.get(1)?.single()?.as_tile()?.position();
    Some(MovePawn::new(pawn, position))
}
