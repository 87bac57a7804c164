//! Search problem contract trait.

use std::rc::Rc;

use crate::cost::PathCost;
use crate::node::{Node, NodeRef};

/// A problem formulation in the state-space model.
///
/// Implemented once per problem domain (route finding, puzzles, random graphs).
/// The engine only consumes these methods; it never inspects states beyond
/// cloning them and, for graph search, hashing and comparing them.
///
/// # Contract
///
/// - `actions` returns a finite, deterministically ordered sequence (may be empty).
/// - `result` is pure: the same `(state, action)` always yields the same successor.
/// - `step_cost` must be non-negative for the optimality guarantees to hold.
/// - Well-foundedness (finite reachable space or a reachable goal) is the
///   implementor's responsibility; the engine does not guard against
///   non-terminating problems.
pub trait Problem {
    type State: Clone;
    type Action: Clone;
    type Cost: PathCost;

    /// The starting state.
    fn initial(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn goal_test(&self, state: &Self::State) -> bool;

    /// Actions applicable in `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Transition function.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of taking `action` from `state` to `successor`.
    fn step_cost(
        &self,
        state: &Self::State,
        action: &Self::Action,
        successor: &Self::State,
    ) -> Self::Cost;

    /// Node construction policy. Override to attach domain data or to build
    /// parentless nodes for combinatorial spaces where paths are not needed.
    fn create(
        &self,
        state: Self::State,
        parent: Option<&NodeRef<Self::State, Self::Action, Self::Cost>>,
        action: Option<&Self::Action>,
        path_cost: Self::Cost,
    ) -> NodeRef<Self::State, Self::Action, Self::Cost> {
        Rc::new(Node::new(state, parent.cloned(), action.cloned(), path_cost))
    }

    /// The root node: initial state, no parent, zero path cost.
    fn root(&self) -> NodeRef<Self::State, Self::Action, Self::Cost> {
        self.create(self.initial(), None, None, Self::Cost::ZERO)
    }

    /// Child construction policy: applies `result` and `step_cost`.
    fn child(
        &self,
        parent: &NodeRef<Self::State, Self::Action, Self::Cost>,
        action: &Self::Action,
    ) -> NodeRef<Self::State, Self::Action, Self::Cost> {
        let successor = self.result(parent.state(), action);
        self.child_with_state(parent, action, successor)
    }

    /// Child construction when the successor state is already known
    /// (graph search computes it first to consult the closed set).
    ///
    /// # Panics
    ///
    /// In debug builds, if a finite parent cost plus a finite step cost
    /// reaches [`PathCost::INFINITY`]. Release builds saturate.
    fn child_with_state(
        &self,
        parent: &NodeRef<Self::State, Self::Action, Self::Cost>,
        action: &Self::Action,
        successor: Self::State,
    ) -> NodeRef<Self::State, Self::Action, Self::Cost> {
        let step = self.step_cost(parent.state(), action, &successor);
        let g = parent.path_cost();
        debug_assert!(
            !(g.is_finite() && step.is_finite()) || g.checked_plus(step).is_some(),
            "path cost overflow: {g:?} + {step:?} reaches the infinity sentinel"
        );
        let path_cost = g.plus(step);
        self.create(successor, Some(parent), Some(action), path_cost)
    }
}
