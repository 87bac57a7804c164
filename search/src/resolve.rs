//! Duplicate resolution for generated children.

use std::hash::Hash;
use std::rc::Rc;

use crate::cost::PathCost;
use crate::error::SearchError;
use crate::evaluation::{Evaluation, TiePolicy};
use crate::frontier::Frontier;
use crate::node::NodeRef;
use crate::observer::SearchObserver;

/// What [`handle_child`] did with a candidate.
#[derive(Debug)]
pub enum ChildOutcome<N> {
    /// The state was not in the frontier; the child was pushed.
    Pushed(N),
    /// The child reached a frontier state by a strictly cheaper path and
    /// replaced the entry. `previous` is the node it displaced.
    Replaced { previous: N, child: N },
    /// The frontier already held a path at least as cheap; the child was
    /// not inserted.
    Discarded(N),
}

impl<N> ChildOutcome<N> {
    /// Whether the frontier changed.
    #[must_use]
    pub fn is_inserted(&self) -> bool {
        !matches!(self, Self::Discarded(_))
    }
}

/// Decide the fate of a freshly generated child against the frontier.
///
/// Replacement happens only when the child's path cost is strictly lower
/// than the existing entry's; equal-cost paths keep the earlier entry.
///
/// # Errors
///
/// Propagates frontier misuse errors; with a frontier driven only through
/// this function they cannot occur.
pub fn handle_child<S, A, C, E, T, O>(
    frontier: &mut Frontier<'_, S, A, C, E, T>,
    child: NodeRef<S, A, C>,
    observer: &mut O,
) -> Result<ChildOutcome<NodeRef<S, A, C>>, SearchError>
where
    S: Clone + Eq + Hash,
    C: PathCost,
    E: Evaluation<S, A, C>,
    T: TiePolicy<S, A, C>,
    O: SearchObserver<S, A, C>,
{
    let Some(handle) = frontier.find(child.state()) else {
        let handle = frontier.push(Rc::clone(&child))?;
        if let Some(f) = frontier.key(handle) {
            observer.on_push(&child, f);
        }
        return Ok(ChildOutcome::Pushed(child));
    };

    let existing = frontier.get(handle).ok_or(SearchError::StaleHandle)?;
    if child.path_cost() < existing.path_cost() {
        let previous = frontier.increase_priority(handle, Rc::clone(&child))?;
        observer.on_replace(&previous, &child);
        Ok(ChildOutcome::Replaced { previous, child })
    } else {
        observer.on_discard(existing, &child);
        Ok(ChildOutcome::Discarded(child))
    }
}
