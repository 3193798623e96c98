//! Fixed-capacity leaf selectors.

use std::fmt;

use super::filter::SelectableFilter;
use super::selectable::{Selectable, SelectedTree};
use super::selector::{Callbacks, FinishCallback, Selector};
use crate::session::GameSession;

/// Accumulates up to `max` picks, then emits them as a leaf.
///
/// Toggling a selected element deselects it. Toggling a new element while
/// at capacity evicts the most recent pick first, so a finished selection
/// can be revised in place; every revision that refills the capacity fires
/// the completion callbacks again.
///
/// Candidacy comes from the filter; `toggle` itself does not consult it.
pub struct AmountSelector {
    max: usize,
    filter: SelectableFilter,
    selected: Vec<Selectable>,
    callbacks: Callbacks,
    pending: Option<SelectedTree>,
}

impl AmountSelector {
    /// A selector collecting `max` elements matching `filter`.
    #[must_use]
    pub fn new(max: usize, filter: SelectableFilter) -> Self {
        Self {
            max,
            filter,
            selected: Vec::new(),
            callbacks: Callbacks::default(),
            pending: None,
        }
    }

    /// A selector collecting a single element.
    #[must_use]
    pub fn once(filter: SelectableFilter) -> Self {
        Self::new(1, filter)
    }

    /// The current picks, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[Selectable] {
        &self.selected
    }
}

impl Selector for AmountSelector {
    fn toggle(&mut self, session: &GameSession, element: &Selectable) -> bool {
        if self.is_selected(session, element) {
            self.selected.retain(|existing| existing != element);
            return false;
        }

        if self.selected.len() >= self.max {
            // Evict the most recent pick to make room.
            self.selected.pop();
        }
        self.selected.push(element.clone());

        if self.is_finished() {
            let tree = SelectedTree::leaf(self.selected.clone());
            self.callbacks.fire(&tree);
            self.pending = Some(tree);
        }
        true
    }

    fn is_finished(&self) -> bool {
        self.selected.len() >= self.max
    }

    fn is_candidate(&self, session: &GameSession, element: &Selectable) -> bool {
        (self.filter)(session, element)
    }

    fn is_selected(&self, _session: &GameSession, element: &Selectable) -> bool {
        self.selected.contains(element)
    }

    fn is_empty(&self) -> bool {
        self.selected.is_empty()
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

impl fmt::Debug for AmountSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmountSelector")
            .field("max", &self.max)
            .field("selected", &self.selected)
            .field("callbacks", &self.callbacks)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

/// A selector that never completes.
///
/// Candidate of nothing, so the input layer never offers it anything; a
/// forced toggle is still buffered (one element, most recent wins) but no
/// callback ever fires. Stubs out a branch in a composite shape.
#[derive(Default)]
pub struct DummySelector {
    selected: Vec<Selectable>,
    callbacks: Callbacks,
}

impl DummySelector {
    /// Create a dummy selector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Selector for DummySelector {
    fn toggle(&mut self, session: &GameSession, element: &Selectable) -> bool {
        if self.is_selected(session, element) {
            self.selected.retain(|existing| existing != element);
            return false;
        }
        self.selected.pop();
        self.selected.push(element.clone());
        true
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn is_candidate(&self, _session: &GameSession, _element: &Selectable) -> bool {
        false
    }

    fn is_selected(&self, _session: &GameSession, element: &Selectable) -> bool {
        self.selected.contains(element)
    }

    fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    fn on_finished(&mut self, callback: FinishCallback) {
        self.callbacks.push(callback);
    }

    fn on_finished_first(&mut self, callback: FinishCallback) {
        self.callbacks.push_front(callback);
    }

    fn take_finished(&mut self) -> Option<SelectedTree> {
        None
    }
}

impl fmt::Debug for DummySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummySelector")
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
