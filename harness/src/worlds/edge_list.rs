//! Explicit weighted graphs given as edge lists.
//!
//! The small hand-written graphs used by the acceptance tests and the
//! benchmarks. Actions are positions in the current state's adjacency list,
//! which keeps the order in which edges were supplied.

use std::collections::BTreeMap;

use lodestar_search::{PathCost, Problem};

/// A weighted graph with one start state and one or more goal states.
#[derive(Debug, Clone)]
pub struct EdgeListProblem<S, C = u32> {
    start: S,
    goals: Vec<S>,
    adjacency: BTreeMap<S, Vec<(S, C)>>,
}

impl<S: Ord + Clone, C: PathCost> EdgeListProblem<S, C> {
    /// Edges go from the first state to the second only.
    pub fn directed<I>(start: S, goal: S, edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, C)>,
    {
        let mut adjacency: BTreeMap<S, Vec<(S, C)>> = BTreeMap::new();
        for (from, to, cost) in edges {
            adjacency.entry(from).or_default().push((to, cost));
        }
        Self {
            start,
            goals: vec![goal],
            adjacency,
        }
    }

    /// Every edge can be travelled both ways at the same cost.
    pub fn undirected<I>(start: S, goal: S, edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, C)>,
    {
        let mut adjacency: BTreeMap<S, Vec<(S, C)>> = BTreeMap::new();
        for (a, b, cost) in edges {
            adjacency
                .entry(a.clone())
                .or_default()
                .push((b.clone(), cost));
            adjacency.entry(b).or_default().push((a, cost));
        }
        Self {
            start,
            goals: vec![goal],
            adjacency,
        }
    }

    /// Accept `goal` as an additional goal state.
    #[must_use]
    pub fn with_goal(mut self, goal: S) -> Self {
        self.goals.push(goal);
        self
    }

    /// Outgoing edges of `state`, in insertion order.
    #[must_use]
    pub fn successors(&self, state: &S) -> &[(S, C)] {
        self.adjacency.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct states with at least one outgoing edge.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl<S: Ord + Clone, C: PathCost> Problem for EdgeListProblem<S, C> {
    type State = S;
    type Action = usize;
    type Cost = C;

    fn initial(&self) -> S {
        self.start.clone()
    }

    fn goal_test(&self, state: &S) -> bool {
        self.goals.contains(state)
    }

    fn actions(&self, state: &S) -> Vec<usize> {
        (0..self.successors(state).len()).collect()
    }

    fn result(&self, state: &S, action: &usize) -> S {
        self.successors(state)
            .get(*action)
            .map_or_else(|| state.clone(), |(to, _)| to.clone())
    }

    fn step_cost(&self, state: &S, action: &usize, _successor: &S) -> C {
        self.successors(state)
            .get(*action)
            .map_or(C::INFINITY, |(_, cost)| *cost)
    }
}
