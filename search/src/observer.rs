//! Diagnostic hooks.
//!
//! Every strategy has an `_observed` variant that reports frontier and
//! recursion events to a [`SearchObserver`]. All methods default to no-ops,
//! and the plain entry points pass [`NoopObserver`], so an unobserved run pays
//! nothing for the hooks after monomorphization.
//!
//! Observers compose: `&mut O` forwards to `O`, and a pair `(A, B)` forwards
//! every event to `A` then `B`.

use crate::node::Node;

/// How an RBFS frame ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RbfsOutcome<C> {
    /// A goal was found below this frame.
    Goal,
    /// No goal within the bound; carries the revised cost for the subtree.
    Cutoff(C),
}

/// Receives search events. Implement only the methods you need.
pub trait SearchObserver<S, A, C> {
    /// A node entered the open list with evaluation `f`.
    fn on_push(&mut self, _node: &Node<S, A, C>, _f: C) {}

    /// A node left the open list with evaluation `f`.
    fn on_pop(&mut self, _node: &Node<S, A, C>, _f: C) {}

    /// A frontier entry was replaced by a cheaper path to the same state.
    fn on_replace(&mut self, _previous: &Node<S, A, C>, _node: &Node<S, A, C>) {}

    /// A generated child lost against the frontier entry `kept`.
    fn on_discard(&mut self, _kept: &Node<S, A, C>, _discarded: &Node<S, A, C>) {}

    /// A non-goal node is about to have its successors generated.
    fn on_expand(&mut self, _node: &Node<S, A, C>) {}

    /// A goal node was reached.
    fn on_goal(&mut self, _node: &Node<S, A, C>) {}

    /// An RBFS call started on `node` with its own `f`, the propagated
    /// (stored) value and the bound it was given.
    fn on_rbfs_enter(&mut self, _node: &Node<S, A, C>, _f: C, _stored: C, _bound: C) {}

    /// An RBFS call on `node` returned.
    fn on_rbfs_exit(&mut self, _node: &Node<S, A, C>, _outcome: RbfsOutcome<C>, _bound: C) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl<S, A, C> SearchObserver<S, A, C> for NoopObserver {}

impl<S, A, C, O> SearchObserver<S, A, C> for &mut O
where
    O: SearchObserver<S, A, C> + ?Sized,
{
    fn on_push(&mut self, node: &Node<S, A, C>, f: C) {
        (**self).on_push(node, f);
    }

    fn on_pop(&mut self, node: &Node<S, A, C>, f: C) {
        (**self).on_pop(node, f);
    }

    fn on_replace(&mut self, previous: &Node<S, A, C>, node: &Node<S, A, C>) {
        (**self).on_replace(previous, node);
    }

    fn on_discard(&mut self, kept: &Node<S, A, C>, discarded: &Node<S, A, C>) {
        (**self).on_discard(kept, discarded);
    }

    fn on_expand(&mut self, node: &Node<S, A, C>) {
        (**self).on_expand(node);
    }

    fn on_goal(&mut self, node: &Node<S, A, C>) {
        (**self).on_goal(node);
    }

    fn on_rbfs_enter(&mut self, node: &Node<S, A, C>, f: C, stored: C, bound: C) {
        (**self).on_rbfs_enter(node, f, stored, bound);
    }

    fn on_rbfs_exit(&mut self, node: &Node<S, A, C>, outcome: RbfsOutcome<C>, bound: C) {
        (**self).on_rbfs_exit(node, outcome, bound);
    }
}

impl<S, A, C, X, Y> SearchObserver<S, A, C> for (X, Y)
where
    C: Copy,
    X: SearchObserver<S, A, C>,
    Y: SearchObserver<S, A, C>,
{
    fn on_push(&mut self, node: &Node<S, A, C>, f: C) {
        self.0.on_push(node, f);
        self.1.on_push(node, f);
    }

    fn on_pop(&mut self, node: &Node<S, A, C>, f: C) {
        self.0.on_pop(node, f);
        self.1.on_pop(node, f);
    }

    fn on_replace(&mut self, previous: &Node<S, A, C>, node: &Node<S, A, C>) {
        self.0.on_replace(previous, node);
        self.1.on_replace(previous, node);
    }

    fn on_discard(&mut self, kept: &Node<S, A, C>, discarded: &Node<S, A, C>) {
        self.0.on_discard(kept, discarded);
        self.1.on_discard(kept, discarded);
    }

    fn on_expand(&mut self, node: &Node<S, A, C>) {
        self.0.on_expand(node);
        self.1.on_expand(node);
    }

    fn on_goal(&mut self, node: &Node<S, A, C>) {
        self.0.on_goal(node);
        self.1.on_goal(node);
    }

    fn on_rbfs_enter(&mut self, node: &Node<S, A, C>, f: C, stored: C, bound: C) {
        self.0.on_rbfs_enter(node, f, stored, bound);
        self.1.on_rbfs_enter(node, f, stored, bound);
    }

    fn on_rbfs_exit(&mut self, node: &Node<S, A, C>, outcome: RbfsOutcome<C>, bound: C) {
        self.0.on_rbfs_exit(node, outcome, bound);
        self.1.on_rbfs_exit(node, outcome, bound);
    }
}

/// Event counters.
///
/// `popped`, `pushed`, `decreased`, `discarded` and `expanded` track the open
/// list; `rbfs_calls` counts recursive calls (one per `on_rbfs_enter`).
/// `expanded` counts every expansion event, so a state expanded twice by
/// tree search counts twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub popped: u64,
    pub pushed: u64,
    pub decreased: u64,
    pub discarded: u64,
    pub expanded: u64,
    pub rbfs_calls: u64,
}

impl SearchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON object with one field per counter.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "popped": self.popped,
            "pushed": self.pushed,
            "decreased": self.decreased,
            "discarded": self.discarded,
            "expanded": self.expanded,
            "rbfs_calls": self.rbfs_calls,
        })
    }
}

impl<S, A, C> SearchObserver<S, A, C> for SearchStats {
    fn on_push(&mut self, _node: &Node<S, A, C>, _f: C) {
        self.pushed += 1;
    }

    fn on_pop(&mut self, _node: &Node<S, A, C>, _f: C) {
        self.popped += 1;
    }

    fn on_replace(&mut self, _previous: &Node<S, A, C>, _node: &Node<S, A, C>) {
        self.decreased += 1;
    }

    fn on_discard(&mut self, _kept: &Node<S, A, C>, _discarded: &Node<S, A, C>) {
        self.discarded += 1;
    }

    fn on_expand(&mut self, _node: &Node<S, A, C>) {
        self.expanded += 1;
    }

    fn on_rbfs_enter(&mut self, _node: &Node<S, A, C>, _f: C, _stored: C, _bound: C) {
        self.rbfs_calls += 1;
    }
}
