//! Shared helpers for lodestar benchmark suites.

use lodestar_harness::worlds::regular_graph::{GraphSpec, RegularGraph};
use lodestar_harness::{run_search, Algorithm, RunConfig, RunReport};
use lodestar_search::ZeroHeuristic;

/// A named random-graph workload: one generated graph and one query on it.
pub struct Regime {
    pub name: &'static str,
    pub graph: RegularGraph,
    pub start: u32,
    pub target: u32,
}

impl Regime {
    /// Generate the graph for `spec` and query from vertex 0 to the vertex
    /// farthest around the ring.
    ///
    /// # Panics
    ///
    /// Panics if `spec` is not a valid regular-graph shape. Benchmark setup
    /// failures are fatal.
    #[must_use]
    pub fn new(name: &'static str, spec: &GraphSpec) -> Self {
        let graph = match RegularGraph::generate(spec) {
            Ok(graph) => graph,
            Err(e) => panic!("regime {name}: {e}"),
        };
        Self {
            name,
            target: graph.node_count() / 2,
            graph,
            start: 0,
        }
    }

    /// Run one strategy with uniform-cost evaluation.
    ///
    /// # Panics
    ///
    /// Panics if the target is unreachable.
    #[must_use]
    pub fn run(&self, algorithm: Algorithm) -> RunReport<u32, u32> {
        let problem = self.graph.problem(self.start, self.target);
        match run_search(&problem, ZeroHeuristic, &RunConfig::new(algorithm)) {
            Ok(report) => report,
            Err(e) => panic!("regime {}: {e}", self.name),
        }
    }
}

/// Workloads from sparse to dense. RBFS and tree search are only run on the
/// smaller ones; their cost grows with the number of distinct f-values.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime::new("sparse_small", &GraphSpec::new(3, 20, 1).with_max_weight(10)),
        Regime::new("dense_small", &GraphSpec::new(6, 20, 2).with_max_weight(10)),
        Regime::new("sparse_large", &GraphSpec::new(3, 2_000, 3)),
        Regime::new("dense_large", &GraphSpec::new(10, 2_000, 4)),
    ]
}
