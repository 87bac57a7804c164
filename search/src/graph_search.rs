//! Graph search: best-first with a closed set and decrease-key.
//!
//! ```text
//! frontier = { root }      closed = {}
//! loop:
//!     node = pop best                      (empty -> GoalNotFound)
//!     goal_test(node)  -> write path, return g
//!     closed += node.state
//!     for action in actions(node.state):
//!         successor = result(node.state, action)
//!         successor in closed -> skip
//!         handle_child(frontier, child(node, action, successor))
//! ```
//!
//! Each state is expanded at most once. With non-negative step costs and a
//! consistent heuristic, the first goal popped is optimal.

use std::hash::Hash;

use crate::closed::ClosedSet;
use crate::contract::Problem;
use crate::error::SearchError;
use crate::evaluation::{Evaluation, Priority, TiePolicy};
use crate::frontier::Frontier;
use crate::observer::{NoopObserver, SearchObserver};
use crate::resolve::handle_child;

/// Run graph search and append the start-to-goal state sequence to `path`.
///
/// Returns the goal's path cost.
///
/// # Errors
///
/// [`SearchError::GoalNotFound`] if the frontier empties; `path` is left
/// untouched in that case.
pub fn graph_search<P, E, T, W>(
    problem: &P,
    priority: &Priority<E, T>,
    path: &mut W,
) -> Result<P::Cost, SearchError>
where
    P: Problem,
    P::State: Eq + Hash,
    E: Evaluation<P::State, P::Action, P::Cost>,
    T: TiePolicy<P::State, P::Action, P::Cost>,
    W: Extend<P::State>,
{
    graph_search_observed(problem, priority, path, &mut NoopObserver)
}

/// [`graph_search`] reporting events to `observer`.
///
/// # Errors
///
/// Same as [`graph_search`].
pub fn graph_search_observed<P, E, T, W, O>(
    problem: &P,
    priority: &Priority<E, T>,
    path: &mut W,
    observer: &mut O,
) -> Result<P::Cost, SearchError>
where
    P: Problem,
    P::State: Eq + Hash,
    E: Evaluation<P::State, P::Action, P::Cost>,
    T: TiePolicy<P::State, P::Action, P::Cost>,
    W: Extend<P::State>,
    O: SearchObserver<P::State, P::Action, P::Cost>,
{
    let mut frontier = Frontier::new(priority);
    let mut closed = ClosedSet::new();

    let handle = frontier.push(problem.root())?;
    if let (Some(root), Some(f)) = (frontier.get(handle), frontier.key(handle)) {
        observer.on_push(root, f);
    }

    while let Some((node, f)) = frontier.pop_with_cost() {
        observer.on_pop(&node, f);

        if problem.goal_test(node.state()) {
            tracing::debug!(
                cost = ?node.path_cost(),
                depth = node.depth(),
                frontier = frontier.len(),
                closed = closed.len(),
                high_water = frontier.high_water(),
                "graph search reached goal"
            );
            observer.on_goal(&node);
            node.write_path(path);
            return Ok(node.path_cost());
        }

        observer.on_expand(&node);
        closed.insert(node.state().clone());

        for action in problem.actions(node.state()) {
            let successor = problem.result(node.state(), &action);
            if closed.contains(&successor) {
                continue;
            }
            let child = problem.child_with_state(&node, &action, successor);
            handle_child(&mut frontier, child, observer)?;
        }
    }

    tracing::debug!(closed = closed.len(), "graph search exhausted frontier");
    Err(SearchError::GoalNotFound)
}
