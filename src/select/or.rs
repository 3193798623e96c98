//! Alternatives with narrowing.

use std::fmt;

use super::selectable::{Selectable, SelectedTree};
use super::selector::{Callbacks, FinishCallback, Selector};
use crate::session::GameSession;

/// Offers several alternative selectors and commits to one.
///
/// While widened, every branch's candidates are on offer; the first toggle
/// that matches a branch narrows the selection to it. A narrowed branch
/// receives every following toggle unconditionally. When its picks empty
/// out again the selector widens back to all branches.
///
/// `is_finished` and `is_selected` only answer for a narrowed branch:
/// while widened nothing is committed, so both are false.
pub struct OrSelector {
    branches: Vec<Box<dyn Selector>>,
    live: Vec<usize>,
    callbacks: Callbacks,
    pending: Option<SelectedTree>,
}

impl OrSelector {
    /// Create an alternative over `branches`, initially widened.
    #[must_use]
    pub fn new(branches: Vec<Box<dyn Selector>>) -> Self {
        let live = (0..branches.len()).collect();
        Self {
            branches,
            live,
            callbacks: Callbacks::default(),
            pending: None,
        }
    }

    fn narrowed(&self) -> Option<usize> {
        match self.live.as_slice() {
            [index] => Some(*index),
            _ => None,
        }
    }

    /// Toggle against the single live branch, then propagate completion
    /// and widen if the branch emptied out.
    fn toggle_narrowed(&mut self, session: &GameSession, element: &Selectable) -> bool {
        let index = self.live[0];
        let branch = &mut self.branches[index];
        let toggled = branch.toggle(session, element);
        if let Some(tree) = branch.take_finished() {
            self.callbacks.fire(&tree);
            self.pending = Some(tree);
        }
        if self.branches[index].is_empty() {
            log::trace!("alternative branch {index} emptied, widening");
            self.live = (0..self.branches.len()).collect();
        }
        toggled
    }
}

impl Selector for OrSelector {
    fn toggle(&mut self, session: &GameSession, element: &Selectable) -> bool {
        if self.narrowed().is_some() {
            return self.toggle_narrowed(session, element);
        }

        let matched = self
            .live
            .iter()
            .copied()
            .find(|&i| self.branches[i].is_candidate(session, element));
        match matched {
            Some(index) => {
                log::trace!("narrowing alternative to branch {index}");
                self.live = vec![index];
                self.toggle_narrowed(session, element)
            }
            None => false,
        }
    }

    fn is_finished(&self) -> bool {
        self.narrowed()
            .is_some_and(|index| self.branches[index].is_finished())
    }

    fn is_candidate(&self, session: &GameSession, element: &Selectable) -> bool {
        self.live
            .iter()
            .any(|&i| self.branches[i].is_candidate(session, element))
    }

    fn is_selected(&self, session: &GameSession, element: &Selectable) -> bool {
        self.narrowed()
            .is_some_and(|index| self.branches[index].is_selected(session, element))
    }

    fn is_empty(&self) -> bool {
        self.live.iter().all(|&i| self.branches[i].is_empty())
    }

    fn on_finished(&mut self, callback: FinishCallback) {
        self.callbacks.push(callback);
    }

    fn on_finished_first(&mut self, callback: FinishCallback) {
        self.callbacks.push_front(callback);
    }

    fn take_finished(&mut self) -> Option<SelectedTree> {
        self.pending.take()
    }
}

impl fmt::Debug for OrSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrSelector")
            .field("branches", &self.branches.len())
            .field("live", &self.live)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, Pawn, PawnId, PlayerId, Position, Rules, Tile};
    use crate::select::amount::AmountSelector;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session() -> GameSession {
        GameSession::new(Game::new(Rules::default()), PlayerId::new(0))
    }

    fn tile_at(x: i8, y: i8) -> Selectable {
        Selectable::Tile(Tile::empty(Position::new(x, y)))
    }

    fn pawn_no(id: u32) -> Selectable {
        Selectable::Pawn(Pawn::staging(PawnId::new(id), PlayerId::new(0)))
    }

    /// One branch collecting tiles, one collecting pawns.
    fn tiles_or_pawns(tile_max: usize, pawn_max: usize) -> OrSelector {
        OrSelector::new(vec![
            Box::new(AmountSelector::new(
                tile_max,
                Box::new(|_, el| el.as_tile().is_some()),
            )),
            Box::new(AmountSelector::new(
                pawn_max,
                Box::new(|_, el| el.as_pawn().is_some()),
            )),
        ])
    }

    #[test]
    fn test_widened_offers_all_branches() {
        let session = session();
        let selector = tiles_or_pawns(1, 1);

        assert!(selector.is_candidate(&session, &tile_at(0, 0)));
        assert!(selector.is_candidate(&session, &pawn_no(0)));
        assert!(!selector.is_candidate(&session, &Selectable::None));
        assert!(selector.is_empty());
        assert!(!selector.is_finished());
    }

    #[test]
    fn test_first_matching_toggle_narrows() {
        let session = session();
        let mut selector = tiles_or_pawns(2, 1);

        assert!(selector.toggle(&session, &tile_at(0, 0)));

        // Committed to the tile branch: pawns are no longer candidates.
        assert!(selector.is_candidate(&session, &tile_at(1, 0)));
        assert!(!selector.is_candidate(&session, &pawn_no(0)));
        assert!(selector.is_selected(&session, &tile_at(0, 0)));
        assert!(!selector.is_empty());
    }

    #[test]
    fn test_narrowed_branch_finishes_and_propagates() {
        let session = session();
        let mut selector = tiles_or_pawns(2, 1);

        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&fired);
        selector.on_finished(Box::new(move |tree| sink.borrow_mut().push(tree.clone())));

        selector.toggle(&session, &tile_at(0, 0));
        selector.toggle(&session, &tile_at(1, 0));

        assert!(selector.is_finished());
        assert_eq!(fired.borrow().len(), 1);
        assert_eq!(
            selector.take_finished().unwrap().as_leaf().unwrap(),
            &[tile_at(0, 0), tile_at(1, 0)]
        );
    }

    #[test]
    fn test_emptied_branch_widens_again() {
        let session = session();
        let mut selector = tiles_or_pawns(2, 1);

        selector.toggle(&session, &tile_at(0, 0));
        assert!(!selector.is_candidate(&session, &pawn_no(0)));

        // Deselecting the only pick releases the commitment.
        assert!(!selector.toggle(&session, &tile_at(0, 0)));
        assert!(selector.is_empty());
        assert!(selector.is_candidate(&session, &pawn_no(0)));

        // And the other branch can be committed to now.
        assert!(selector.toggle(&session, &pawn_no(0)));
        assert!(selector.is_finished());
    }

    #[test]
    fn test_no_matching_branch_rejects() {
        let session = session();
        let mut selector = tiles_or_pawns(1, 1);

        assert!(!selector.toggle(&session, &Selectable::None));
        assert!(selector.is_empty());
    }

    #[test]
    fn test_narrowed_delegation_skips_candidacy() {
        let session = session();
        let mut selector = tiles_or_pawns(2, 1);

        selector.toggle(&session, &tile_at(0, 0));

        // The committed branch receives toggles unconditionally, even for
        // elements its filter would reject.
        assert!(selector.toggle(&session, &pawn_no(0)));
        assert!(selector.is_finished());
        assert_eq!(
            selector.take_finished().unwrap().as_leaf().unwrap(),
            &[tile_at(0, 0), pawn_no(0)]
        );
    }
}
