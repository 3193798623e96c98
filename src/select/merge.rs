//! Parallel routing.

use std::fmt;

use super::selectable::{Selectable, SelectedTree};
use super::selector::{Callbacks, FinishCallback, Selector};
use crate::session::GameSession;

/// Runs several selectors in parallel over the same input stream.
///
/// Each toggled element is routed to every branch whose filter accepts it,
/// in branch order, and the pass always visits all branches even after one
/// of them completes mid-pass. The merge counts as finished as soon as any
/// branch is.
pub struct MergeSelector {
    branches: Vec<Box<dyn Selector>>,
    callbacks: Callbacks,
    pending: Option<SelectedTree>,
}

impl MergeSelector {
    /// Create a parallel selector over `branches`.
    #[must_use]
    pub fn new(branches: Vec<Box<dyn Selector>>) -> Self {
        Self {
            branches,
            callbacks: Callbacks::default(),
            pending: None,
        }
    }
}

impl Selector for MergeSelector {
    fn toggle(&mut self, session: &GameSession, element: &Selectable) -> bool {
        let mut toggled = false;
        for branch in &mut self.branches {
            if !branch.is_candidate(session, element) {
                continue;
            }
            if branch.toggle(session, element) {
                toggled = true;
            }
            if let Some(tree) = branch.take_finished() {
                self.callbacks.fire(&tree);
                self.pending = Some(tree);
            }
        }
        toggled
    }

    fn is_finished(&self) -> bool {
        self.branches.iter().any(|branch| branch.is_finished())
    }

    fn is_candidate(&self, session: &GameSession, element: &Selectable) -> bool {
        self.branches
            .iter()
            .any(|branch| branch.is_candidate(session, element))
    }

    fn is_selected(&self, session: &GameSession, element: &Selectable) -> bool {
        self.branches
            .iter()
            .any(|branch| branch.is_selected(session, element))
    }

    fn is_empty(&self) -> bool {
        self.branches.iter().all(|branch| branch.is_empty())
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

impl fmt::Debug for MergeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeSelector")
            .field("branches", &self.branches.len())
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
