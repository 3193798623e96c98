//! Staged selection.

use std::fmt;

use super::selectable::{Selectable, SelectedTree};
use super::selector::{Callbacks, FinishCallback, Selector};
use crate::session::GameSession;

/// Runs selectors as consecutive stages of one pick.
///
/// Stage `i + 1` opens when stage `i` completes; the emitted result is a
/// root holding one child tree per stage, re-fired every time the last
/// stage completes. Until the newly opened stage has picks of its own, the
/// previous stage stays reachable: its candidates are still offered, a
/// toggle that only matches the previous stage revises that stage's pick
/// in place, and deselecting the previous stage's last pick steps the
/// chain back one stage.
pub struct ChainedSelector {
    stages: Vec<Box<dyn Selector>>,
    current_id: usize,
    children: Vec<SelectedTree>,
    callbacks: Callbacks,
    pending: Option<SelectedTree>,
}

impl ChainedSelector {
    /// Create a chain over `stages`, opened at the first one.
    ///
    /// Panics if `stages` is empty.
    #[must_use]
    pub fn new(stages: Vec<Box<dyn Selector>>) -> Self {
        assert!(!stages.is_empty(), "A chain needs at least one stage");

        let children = vec![SelectedTree::empty_leaf(); stages.len()];
        Self {
            stages,
            current_id: 0,
            children,
            callbacks: Callbacks::default(),
            pending: None,
        }
    }

    /// The index of the stage currently accepting picks.
    #[must_use]
    pub fn current_stage(&self) -> usize {
        self.current_id
    }

    /// Record a completion of stage `index`, advancing past a completed
    /// current stage and emitting the root when the last stage completes.
    fn absorb(&mut self, index: usize) {
        let Some(tree) = self.stages[index].take_finished() else {
            return;
        };
        self.children[index] = tree;

        let last = self.stages.len() - 1;
        if index == last {
            let root = SelectedTree::root(self.children.clone());
            self.callbacks.fire(&root);
            self.pending = Some(root);
        } else if index == self.current_id {
            self.current_id += 1;
            log::trace!("stage {index} complete, opening stage {}", self.current_id);
        }
    }

    /// Whether a toggle of `element` should be routed to the previous
    /// stage: the current stage has no picks yet, does not want the
    /// element, and the previous stage does.
    fn reaches_previous(&self, session: &GameSession, element: &Selectable) -> bool {
        self.current_id > 0
            && self.stages[self.current_id].is_empty()
            && !self.stages[self.current_id].is_candidate(session, element)
            && self.stages[self.current_id - 1].is_candidate(session, element)
    }
}

impl Selector for ChainedSelector {
    fn toggle(&mut self, session: &GameSession, element: &Selectable) -> bool {
        if self.reaches_previous(session, element) {
            let previous_id = self.current_id - 1;
            let toggled = self.stages[previous_id].toggle(session, element);
            self.absorb(previous_id);
            if !toggled && self.stages[previous_id].is_empty() {
                log::trace!("stage {} emptied, stepping back", previous_id);
                self.current_id = previous_id;
            }
            return toggled;
        }

        let index = self.current_id;
        let toggled = self.stages[index].toggle(session, element);
        self.absorb(index);
        toggled
    }

    fn is_finished(&self) -> bool {
        self.current_id == self.stages.len() - 1 && self.stages[self.current_id].is_finished()
    }

    fn is_candidate(&self, session: &GameSession, element: &Selectable) -> bool {
        let current = &self.stages[self.current_id];
        if self.current_id > 0 && current.is_empty() && !current.is_candidate(session, element) {
            return self.stages[self.current_id - 1].is_candidate(session, element);
        }
        current.is_candidate(session, element)
    }

    fn is_selected(&self, session: &GameSession, element: &Selectable) -> bool {
        let current = &self.stages[self.current_id];
        // A candidate of the open stage reads as unselected so it can be
        // picked again there, whatever earlier stages hold.
        if !current.is_selected(session, element) && current.is_candidate(session, element) {
            return false;
        }
        self.stages
            .iter()
            .any(|stage| stage.is_selected(session, element))
    }

    fn is_empty(&self) -> bool {
        self.current_id == 0 && self.stages[0].is_empty()
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

impl fmt::Debug for ChainedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedSelector")
            .field("stages", &self.stages.len())
            .field("current_id", &self.current_id)
            .field("children", &self.children)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
