//! Random regular graphs with seeded edge weights.
//!
//! Every vertex `v` is joined to `(v + i) mod n` for each offset `i` in a
//! fixed window just past `n / 2`. The window is sized so every vertex ends
//! up with exactly `branching` distinct neighbours and no self-loops:
//!
//! ```text
//! odd   = branching % 2
//! end   = n / 2 + odd + n % 2
//! start = end - branching / 2 - odd
//! for v in 0..n, for i in start..end: edge(v, (v + i) % n, weight())
//! ```
//!
//! An offset can name an edge that already exists (it is undirected). The
//! first weight drawn for an edge wins; later draws are still consumed so
//! the weight stream depends only on `(nodes, branching, seed)`.
//!
//! Weights are uniform in `1..=max_weight` from a `StdRng` seeded with
//! `seed`, so a spec always produces the same graph.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io;
use std::path::Path;

use lodestar_search::Problem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound of the default weight range.
pub const DEFAULT_MAX_WEIGHT: u32 = 500;

/// Parameters of a generated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSpec {
    /// Degree of every vertex.
    pub branching: u32,
    /// Vertex count.
    pub nodes: u32,
    /// Seed for the weight generator.
    pub seed: u64,
    /// Weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
}

/// A [`GraphSpec`] that cannot produce a regular graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphSpecError {
    #[error("branching factor must be at least 2 (got {branching})")]
    BranchingTooSmall { branching: u32 },
    #[error("graph needs at least 3 nodes (got {nodes})")]
    TooFewNodes { nodes: u32 },
    #[error("branching factor {branching} must be less than the node count {nodes}")]
    BranchingNotBelowNodes { branching: u32, nodes: u32 },
    #[error("odd branching factor {branching} with odd node count {nodes} is unsupported")]
    OddBranchingOddNodes { branching: u32, nodes: u32 },
    #[error("max_weight must be at least 1")]
    ZeroMaxWeight,
}

impl GraphSpec {
    #[must_use]
    pub fn new(branching: u32, nodes: u32, seed: u64) -> Self {
        Self {
            branching,
            nodes,
            seed,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }

    #[must_use]
    pub fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Check the generator's preconditions.
    ///
    /// # Errors
    ///
    /// The first violated precondition, in the order: branching, node count,
    /// branching against node count, parity, weight range.
    pub fn validate(&self) -> Result<(), GraphSpecError> {
        let (branching, nodes) = (self.branching, self.nodes);
        if branching < 2 {
            return Err(GraphSpecError::BranchingTooSmall { branching });
        }
        if nodes < 3 {
            return Err(GraphSpecError::TooFewNodes { nodes });
        }
        if branching >= nodes {
            return Err(GraphSpecError::BranchingNotBelowNodes { branching, nodes });
        }
        if branching % 2 == 1 && nodes % 2 == 1 {
            return Err(GraphSpecError::OddBranchingOddNodes { branching, nodes });
        }
        if self.max_weight == 0 {
            return Err(GraphSpecError::ZeroMaxWeight);
        }
        Ok(())
    }
}

/// An undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
    pub weight: u32,
}

impl Edge {
    /// The endpoint opposite `v`.
    #[must_use]
    pub fn other(&self, v: u32) -> u32 {
        if v == self.a {
            self.b
        } else {
            self.a
        }
    }
}

/// A generated regular graph.
#[derive(Debug, Clone)]
pub struct RegularGraph {
    spec: GraphSpec,
    edges: Vec<Edge>,
    /// Edge ids per vertex, in insertion order.
    adjacency: Vec<Vec<usize>>,
}

impl RegularGraph {
    /// Build the graph described by `spec`.
    ///
    /// # Errors
    ///
    /// [`GraphSpecError`] if `spec` fails [`GraphSpec::validate`].
    pub fn generate(spec: &GraphSpec) -> Result<Self, GraphSpecError> {
        spec.validate()?;
        let n = spec.nodes;
        let b = spec.branching;
        let odd = b % 2;
        let end = n / 2 + odd + n % 2;
        let start = end - b / 2 - odd;

        let mut rng = StdRng::seed_from_u64(spec.seed);
        let mut edges: Vec<Edge> = Vec::new();
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n as usize];
        let mut seen: BTreeMap<(u32, u32), usize> = BTreeMap::new();

        for v in 0..n {
            for i in start..end {
                let u = (v + i) % n;
                let weight = rng.gen_range(1..=spec.max_weight);
                let key = (v.min(u), v.max(u));
                if seen.contains_key(&key) {
                    continue;
                }
                let id = edges.len();
                seen.insert(key, id);
                edges.push(Edge { a: v, b: u, weight });
                adjacency[v as usize].push(id);
                adjacency[u as usize].push(id);
            }
        }

        tracing::debug!(
            nodes = n,
            branching = b,
            edges = edges.len(),
            seed = spec.seed,
            "generated regular graph"
        );
        Ok(Self {
            spec: *spec,
            edges,
            adjacency,
        })
    }

    #[must_use]
    pub fn spec(&self) -> &GraphSpec {
        &self.spec
    }

    #[must_use]
    pub fn node_count(&self) -> u32 {
        self.spec.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn edge(&self, id: usize) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Edge ids incident to `v` (empty for an unknown vertex).
    #[must_use]
    pub fn incident(&self, v: u32) -> &[usize] {
        self.adjacency.get(v as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn degree(&self, v: u32) -> usize {
        self.incident(v).len()
    }

    /// Every vertex has exactly `branching` incident edges.
    #[must_use]
    pub fn is_regular(&self) -> bool {
        let b = self.spec.branching as usize;
        self.adjacency.iter().all(|ids| ids.len() == b)
    }

    /// Graphviz DOT rendering: one line per vertex, then one per edge with
    /// its weight as the label.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("graph G {\n");
        for v in 0..self.spec.nodes {
            let _ = writeln!(out, "{v};");
        }
        for e in &self.edges {
            let _ = writeln!(out, "{}--{} [label={}];", e.a, e.b, e.weight);
        }
        out.push_str("}\n");
        out
    }

    /// Write [`RegularGraph::to_dot`] to `path`.
    ///
    /// # Errors
    ///
    /// Any I/O error from the write.
    pub fn write_dot(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, self.to_dot())
    }

    /// Shortest-path problem from `start` to `target` on this graph.
    #[must_use]
    pub fn problem(&self, start: u32, target: u32) -> RegularGraphProblem<'_> {
        RegularGraphProblem {
            graph: self,
            start,
            target,
        }
    }
}

/// Route finding between two vertices. Actions are edge ids.
#[derive(Debug, Clone, Copy)]
pub struct RegularGraphProblem<'g> {
    graph: &'g RegularGraph,
    start: u32,
    target: u32,
}

impl RegularGraphProblem<'_> {
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }
}

impl Problem for RegularGraphProblem<'_> {
    type State = u32;
    type Action = usize;
    type Cost = u32;

    fn initial(&self) -> u32 {
        self.start
    }

    fn goal_test(&self, state: &u32) -> bool {
        *state == self.target
    }

    fn actions(&self, state: &u32) -> Vec<usize> {
        self.graph.incident(*state).to_vec()
    }

    fn result(&self, state: &u32, action: &usize) -> u32 {
        self.graph.edge(*action).map_or(*state, |e| e.other(*state))
    }

    fn step_cost(&self, _state: &u32, action: &usize, _successor: &u32) -> u32 {
        self.graph.edge(*action).map_or(u32::MAX, |e| e.weight)
    }
}
