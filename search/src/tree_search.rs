//! Tree search: best-first without duplicate detection.
//!
//! Every generated child is enqueued, so a state reachable by several routes
//! may be expanded several times. Terminates only if the tree is finite or a
//! goal is reachable.

use crate::contract::Problem;
use crate::error::SearchError;
use crate::evaluation::{Evaluation, Priority, TiePolicy};
use crate::frontier::OpenHeap;
use crate::node::NodeRef;
use crate::observer::{NoopObserver, SearchObserver};

/// Run tree search and return the goal node.
///
/// The path is recovered with [`Node::path`](crate::node::Node::path) and
/// the cost with [`Node::path_cost`](crate::node::Node::path_cost).
///
/// # Errors
///
/// [`SearchError::GoalNotFound`] if the open list empties.
pub fn tree_search<P, E, T>(
    problem: &P,
    priority: &Priority<E, T>,
) -> Result<NodeRef<P::State, P::Action, P::Cost>, SearchError>
where
    P: Problem,
    E: Evaluation<P::State, P::Action, P::Cost>,
    T: TiePolicy<P::State, P::Action, P::Cost>,
{
    tree_search_observed(problem, priority, &mut NoopObserver)
}

/// [`tree_search`] reporting events to `observer`.
///
/// # Errors
///
/// Same as [`tree_search`].
pub fn tree_search_observed<P, E, T, O>(
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
    let mut open = OpenHeap::new(priority);
    let root = problem.root();
    let f = priority.f(&root);
    observer.on_push(&root, f);
    open.push(root);

    while let Some((node, f)) = open.pop_with_cost() {
        observer.on_pop(&node, f);

        if problem.goal_test(node.state()) {
            tracing::debug!(
                cost = ?node.path_cost(),
                depth = node.depth(),
                open = open.len(),
                high_water = open.high_water(),
                "tree search reached goal"
            );
            observer.on_goal(&node);
            return Ok(node);
        }

        observer.on_expand(&node);
        for action in problem.actions(node.state()) {
            let child = problem.child(&node, &action);
            let f = priority.f(&child);
            observer.on_push(&child, f);
            open.push(child);
        }
    }

    tracing::debug!("tree search exhausted open list");
    Err(SearchError::GoalNotFound)
}
