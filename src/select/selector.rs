//! The selector contract.
//!
//! A selector is a small state machine fed one [`Selectable`] at a time.
//! It accumulates picks, answers candidacy queries so the UI knows what to
//! highlight, and emits a [`SelectedTree`] every time it completes.
//!
//! ## Completion
//!
//! Completion is observed two ways:
//!
//! - **Callbacks** registered with [`Selector::on_finished`] run inside the
//!   completing `toggle`, in registration order
//!   ([`Selector::on_finished_first`] prepends). A selector can complete
//!   more than once: deselecting and re-picking at capacity re-fires.
//! - **Polling** with [`Selector::take_finished`]: each completion buffers
//!   the produced tree, and `take_finished` yields and clears it. Composite
//!   selectors delegate `toggle` to a child and then poll the child, which
//!   is how completion propagates up a tree of selectors.
//!
//! ## Candidacy
//!
//! `toggle` on a leaf selector does not re-check candidacy; gating is the
//! caller's job (combinators gate where their contract says so, the input
//! layer gates with `is_candidate` before offering an element).

use std::fmt;

use crate::session::GameSession;

use super::selectable::{Selectable, SelectedTree};

/// Callback invoked each time a selector completes.
pub type FinishCallback = Box<dyn FnMut(&SelectedTree)>;

/// A state machine accumulating picks toward a [`SelectedTree`].
pub trait Selector {
    /// Feed one element: select it, or deselect it if already selected.
    ///
    /// Returns whether the element ended up selected.
    fn toggle(&mut self, session: &GameSession, element: &Selectable) -> bool;

    /// Whether the selector has accumulated a complete pick.
    fn is_finished(&self) -> bool;

    /// Whether `element` may be offered next.
    fn is_candidate(&self, session: &GameSession, element: &Selectable) -> bool;

    /// Whether `element` is part of the current picks.
    fn is_selected(&self, session: &GameSession, element: &Selectable) -> bool;

    /// Whether nothing is picked yet.
    fn is_empty(&self) -> bool;

    /// Append a completion callback.
    fn on_finished(&mut self, callback: FinishCallback);

    /// Prepend a completion callback, running it before existing ones.
    fn on_finished_first(&mut self, callback: FinishCallback);

    /// Take the tree produced by the most recent completion, if any.
    fn take_finished(&mut self) -> Option<SelectedTree>;
}

/// An ordered list of completion callbacks.
#[derive(Default)]
pub(crate) struct Callbacks {
    list: Vec<FinishCallback>,
}

impl Callbacks {
    pub fn push(&mut self, callback: FinishCallback) {
        self.list.push(callback);
    }

    pub fn push_front(&mut self, callback: FinishCallback) {
        self.list.insert(0, callback);
    }

    pub fn fire(&mut self, tree: &SelectedTree) {
        for callback in &mut self.list {
            callback(tree);
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callbacks({})", self.list.len())
    }
}

/// A selector assembled from closures.
///
/// For bespoke behavior that does not warrant its own type: scripted test
/// stages, adapters around external state. The toggle closure reports both
/// the toggle verdict and, when the pick completed, the produced tree.
pub struct InlineSelector {
    finished: Box<dyn Fn() -> bool>,
    empty: Box<dyn Fn() -> bool>,
    candidate: Box<dyn Fn(&GameSession, &Selectable) -> bool>,
    selected: Box<dyn Fn(&GameSession, &Selectable) -> bool>,
    toggle: Box<dyn FnMut(&GameSession, &Selectable) -> (bool, Option<SelectedTree>)>,
    callbacks: Callbacks,
    pending: Option<SelectedTree>,
}

impl InlineSelector {
    /// Assemble a selector from its five behaviors.
    pub fn new(
        finished: impl Fn() -> bool + 'static,
        empty: impl Fn() -> bool + 'static,
        candidate: impl Fn(&GameSession, &Selectable) -> bool + 'static,
        selected: impl Fn(&GameSession, &Selectable) -> bool + 'static,
        toggle: impl FnMut(&GameSession, &Selectable) -> (bool, Option<SelectedTree>) + 'static,
    ) -> Self {
        Self {
            finished: Box::new(finished),
            empty: Box::new(empty),
            candidate: Box::new(candidate),
            selected: Box::new(selected),
            toggle: Box::new(toggle),
            callbacks: Callbacks::default(),
            pending: None,
        }
    }
}

impl Selector for InlineSelector {
    fn toggle(&mut self, session: &GameSession, element: &Selectable) -> bool {
        let (toggled, finished) = (self.toggle)(session, element);
        if let Some(tree) = finished {
            self.callbacks.fire(&tree);
            self.pending = Some(tree);
        }
        toggled
    }

    fn is_finished(&self) -> bool {
        (self.finished)()
    }

    fn is_candidate(&self, session: &GameSession, element: &Selectable) -> bool {
        (self.candidate)(session, element)
    }

    fn is_selected(&self, session: &GameSession, element: &Selectable) -> bool {
        (self.selected)(session, element)
    }

    fn is_empty(&self) -> bool {
        (self.empty)()
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

impl fmt::Debug for InlineSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineSelector")
            .field("callbacks", &self.callbacks)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, PlayerId, Position, Rules, Tile};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session() -> GameSession {
        GameSession::new(Game::new(Rules::default()), PlayerId::new(0))
    }

    fn tile_at(x: i8, y: i8) -> Selectable {
        Selectable::Tile(Tile::empty(Position::new(x, y)))
    }

    /// An inline selector holding at most one tile.
    fn one_tile_inline() -> InlineSelector {
        let slot: Rc<RefCell<Option<Selectable>>> = Rc::new(RefCell::new(None));

        let finished = Rc::clone(&slot);
        let empty = Rc::clone(&slot);
        let selected = Rc::clone(&slot);
        let toggled = Rc::clone(&slot);

        InlineSelector::new(
            move || finished.borrow().is_some(),
            move || empty.borrow().is_none(),
            |_, el| el.as_tile().is_some(),
            move |_, el| selected.borrow().as_ref() == Some(el),
            move |_, el| {
                let held = toggled.borrow().as_ref() == Some(el);
                if held {
                    *toggled.borrow_mut() = None;
                    (false, None)
                } else {
                    *toggled.borrow_mut() = Some(el.clone());
                    (true, Some(SelectedTree::leaf(vec![el.clone()])))
                }
            },
        )
    }

    #[test]
    fn test_inline_selector_contract() {
        let session = session();
        let mut selector = one_tile_inline();

        assert!(selector.is_empty());
        assert!(!selector.is_finished());
        assert!(selector.is_candidate(&session, &tile_at(0, 0)));
        assert!(!selector.is_candidate(&session, &Selectable::None));

        assert!(selector.toggle(&session, &tile_at(0, 0)));
        assert!(selector.is_finished());
        assert!(selector.is_selected(&session, &tile_at(0, 0)));

        let tree = selector.take_finished().unwrap();
        assert_eq!(tree.single(), Some(&tile_at(0, 0)));
        assert!(selector.take_finished().is_none());

        // Toggling the held tile releases it.
        assert!(!selector.toggle(&session, &tile_at(0, 0)));
        assert!(selector.is_empty());
    }

    #[test]
    fn test_callback_registration_order() {
        let session = session();
        let mut selector = one_tile_inline();

        let order = Rc::new(RefCell::new(Vec::new()));
        for label in ["a", "b"] {
            let order = Rc::clone(&order);
            selector.on_finished(Box::new(move |_| order.borrow_mut().push(label)));
        }
        let first = Rc::clone(&order);
        selector.on_finished_first(Box::new(move |_| first.borrow_mut().push("z")));

        selector.toggle(&session, &tile_at(1, 1));
        assert_eq!(*order.borrow(), vec!["z", "a", "b"]);
    }
}
