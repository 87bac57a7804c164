//! Recursive best-first search (Korf 1993).
//!
//! Linear-space best-first search. Each call keeps only its own children,
//! with a revisable cost per child; when a subtree is abandoned its best
//! frontier value is backed up into the parent's copy so the subtree can be
//! re-entered later without being forgotten entirely.
//!
//! ```text
//! rbfs(node, F, B):
//!     f = f(node)
//!     f > B            -> Cutoff(f)
//!     goal(node)       -> Goal(node)
//!     no actions       -> Cutoff(inf)
//!     for each child c:
//!         F[c] = max(F, f(c)) if f < F else f(c)
//!     while best.F <= B and best.F < inf:
//!         r = rbfs(best, best.F, min(B, second.F))
//!         Goal(n)   -> Goal(n)
//!         Cutoff(x) -> best.F = x, reorder
//!     -> Cutoff(best.F)
//! ```
//!
//! Invariants checked by the test suite:
//!
//! - A call that finds no goal returns a cost strictly greater than its bound
//!   (or infinity).
//! - A recursive call's stored value never exceeds the bound it is given.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::contract::Problem;
use crate::cost::PathCost;
use crate::error::SearchError;
use crate::evaluation::{Evaluation, Priority, TiePolicy};
use crate::node::NodeRef;
use crate::observer::{NoopObserver, RbfsOutcome, SearchObserver};

/// A child together with its current backed-up cost.
///
/// `cost` starts at the propagated `f` value and is overwritten each time
/// the subtree below `node` is abandoned.
#[derive(Debug)]
pub struct NodeCost<S, A, C> {
    pub node: NodeRef<S, A, C>,
    pub cost: C,
}

/// The children of one RBFS call, kept in best-first order.
///
/// Entries are addressed by their generation index, which never changes; the
/// ordering lives in a separate index permutation, ascending by
/// `(cost, tie, generation)`.
#[derive(Debug)]
pub struct Siblings<S, A, C> {
    entries: Vec<NodeCost<S, A, C>>,
    order: Vec<usize>,
}

impl<S, A, C: PathCost> Siblings<S, A, C> {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Insert a child in order; returns its generation index.
    pub fn push<E, T>(&mut self, node: NodeRef<S, A, C>, cost: C, priority: &Priority<E, T>) -> usize
    where
        T: TiePolicy<S, A, C>,
    {
        let index = self.entries.len();
        self.entries.push(NodeCost { node, cost });
        self.place(index, priority);
        index
    }

    /// Generation index of the best child.
    #[must_use]
    pub fn best(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// The best child together with its generation index.
    #[must_use]
    pub fn best_entry(&self) -> Option<(usize, &NodeCost<S, A, C>)> {
        self.best().map(|i| (i, &self.entries[i]))
    }

    /// Cost of the best child, or infinity if there are none.
    #[must_use]
    pub fn best_cost(&self) -> C {
        self.best().map_or(C::INFINITY, |i| self.entries[i].cost)
    }

    /// Cost of the runner-up, or infinity if there is at most one child.
    #[must_use]
    pub fn second_best_cost(&self) -> C {
        self.order
            .get(1)
            .map_or(C::INFINITY, |&i| self.entries[i].cost)
    }

    /// Overwrite the cost of entry `index` and restore the ordering.
    ///
    /// `index` must come from [`Siblings::push`]. An unknown index leaves the
    /// siblings unchanged (and fails a debug assertion).
    pub fn revise<E, T>(&mut self, index: usize, cost: C, priority: &Priority<E, T>)
    where
        T: TiePolicy<S, A, C>,
    {
        let pos = self.order.iter().position(|&i| i == index);
        debug_assert!(pos.is_some(), "revise: unknown sibling index {index}");
        let Some(pos) = pos else {
            return;
        };
        self.order.remove(pos);
        self.entries[index].cost = cost;
        self.place(index, priority);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NodeCost<S, A, C>> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from best to worst.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &NodeCost<S, A, C>> {
        self.order.iter().map(|&i| &self.entries[i])
    }

    fn place<E, T>(&mut self, index: usize, priority: &Priority<E, T>)
    where
        T: TiePolicy<S, A, C>,
    {
        let entries = &self.entries;
        let at = self
            .order
            .partition_point(|&other| compare(entries, priority, other, index) == Ordering::Less);
        self.order.insert(at, index);
    }
}

fn compare<S, A, C, E, T>(
    entries: &[NodeCost<S, A, C>],
    priority: &Priority<E, T>,
    i: usize,
    j: usize,
) -> Ordering
where
    C: Ord,
    T: TiePolicy<S, A, C>,
{
    let (a, b) = (&entries[i], &entries[j]);
    a.cost
        .cmp(&b.cost)
        .then_with(|| priority.split(&a.node, &b.node))
        .then(i.cmp(&j))
}

enum Frame<N, C> {
    Goal(N),
    Cutoff(C),
}

/// Run RBFS from the problem's root and return the goal node.
///
/// # Errors
///
/// [`SearchError::GoalNotFound`] if the top-level call returns without a goal.
pub fn recursive_best_first_search<P, E, T>(
    problem: &P,
    priority: &Priority<E, T>,
) -> Result<NodeRef<P::State, P::Action, P::Cost>, SearchError>
where
    P: Problem,
    E: Evaluation<P::State, P::Action, P::Cost>,
    T: TiePolicy<P::State, P::Action, P::Cost>,
{
    recursive_best_first_search_observed(problem, priority, &mut NoopObserver)
}

/// [`recursive_best_first_search`] reporting every call to `observer`.
///
/// # Errors
///
/// Same as [`recursive_best_first_search`].
pub fn recursive_best_first_search_observed<P, E, T, O>(
    problem: &P,
    priority: &Priority<E, T>,
    observer: &mut O,
) -> Result<NodeRef<P::State, P::Action, P::Cost>, SearchError>
where
    P: Problem,
    E: Evaluation<P::State, P::Action, P::Cost>,
    T: TiePolicy<P::State, P::Action, P::Cost>,
    O: SearchObserver<P::State, P::Action, P::Cost>,
{
    let root = problem.root();
    let stored = priority.f(&root);
    match call(problem, priority, root, stored, P::Cost::INFINITY, observer) {
        Frame::Goal(goal) => {
            tracing::debug!(
                cost = ?goal.path_cost(),
                depth = goal.depth(),
                "rbfs reached goal"
            );
            Ok(goal)
        }
        Frame::Cutoff(cost) => {
            tracing::debug!(cost = ?cost, "rbfs found no goal");
            Err(SearchError::GoalNotFound)
        }
    }
}

fn call<P, E, T, O>(
    problem: &P,
    priority: &Priority<E, T>,
    node: NodeRef<P::State, P::Action, P::Cost>,
    stored: P::Cost,
    bound: P::Cost,
    observer: &mut O,
) -> Frame<NodeRef<P::State, P::Action, P::Cost>, P::Cost>
where
    P: Problem,
    E: Evaluation<P::State, P::Action, P::Cost>,
    T: TiePolicy<P::State, P::Action, P::Cost>,
    O: SearchObserver<P::State, P::Action, P::Cost>,
{
    let f = priority.f(&node);
    observer.on_rbfs_enter(&node, f, stored, bound);
    let frame = expand(problem, priority, &node, f, stored, bound, observer);
    let outcome = match &frame {
        Frame::Goal(_) => RbfsOutcome::Goal,
        Frame::Cutoff(cost) => RbfsOutcome::Cutoff(*cost),
    };
    observer.on_rbfs_exit(&node, outcome, bound);
    frame
}

fn expand<P, E, T, O>(
    problem: &P,
    priority: &Priority<E, T>,
    node: &NodeRef<P::State, P::Action, P::Cost>,
    f: P::Cost,
    stored: P::Cost,
    bound: P::Cost,
    observer: &mut O,
) -> Frame<NodeRef<P::State, P::Action, P::Cost>, P::Cost>
where
    P: Problem,
    E: Evaluation<P::State, P::Action, P::Cost>,
    T: TiePolicy<P::State, P::Action, P::Cost>,
    O: SearchObserver<P::State, P::Action, P::Cost>,
{
    if f > bound {
        return Frame::Cutoff(f);
    }
    if problem.goal_test(node.state()) {
        observer.on_goal(node);
        return Frame::Goal(Rc::clone(node));
    }

    let actions = problem.actions(node.state());
    if actions.is_empty() {
        return Frame::Cutoff(P::Cost::INFINITY);
    }

    observer.on_expand(node);
    let mut siblings = Siblings::with_capacity(actions.len());
    for action in &actions {
        let child = problem.child(node, action);
        let f_child = priority.f(&child);
        // a node whose stored value exceeds its own f was visited before;
        // its children inherit the backed-up value
        let cost = if f < stored { stored.max(f_child) } else { f_child };
        siblings.push(child, cost, priority);
    }

    loop {
        let (best, best_cost, child) = match siblings.best_entry() {
            Some((i, entry)) if entry.cost <= bound && entry.cost.is_finite() => {
                (i, entry.cost, Rc::clone(&entry.node))
            }
            other => {
                let cost = other.map_or(P::Cost::INFINITY, |(_, entry)| entry.cost);
                tracing::trace!(cost = ?cost, bound = ?bound, "rbfs cutoff");
                return Frame::Cutoff(cost);
            }
        };
        let child_bound = bound.min(siblings.second_best_cost());
        match call(problem, priority, child, best_cost, child_bound, observer) {
            Frame::Goal(goal) => return Frame::Goal(goal),
            Frame::Cutoff(cost) => siblings.revise(best, cost, priority),
        }
    }
}
