//! Repeated runs produce byte-identical traces.

use lodestar_harness::worlds::regular_graph::{GraphSpec, RegularGraph};
use lodestar_harness::worlds::romania::{sld, City, Romania};
use lodestar_harness::{run_search, Algorithm, RunConfig, TieBreak};
use lodestar_search::{HeuristicFn, ZeroHeuristic};

// ---------------------------------------------------------------------------
// ACCEPTANCE: TRACE-DETERMINISM
// ---------------------------------------------------------------------------

#[test]
fn romania_trace_digests_repeat() {
    let problem = Romania::new(City::Timisoara, City::Bucharest);
    for algorithm in Algorithm::ALL {
        for tie_break in [TieBreak::None, TieBreak::LowH, TieBreak::LowHTotal] {
            let config = RunConfig::new(algorithm)
                .with_tie_break(tie_break)
                .with_trace(true);
            let first = run_search(&problem, HeuristicFn(sld), &config).unwrap();
            let digest = first.trace_digest.clone().unwrap();
            for _ in 0..3 {
                let again = run_search(&problem, HeuristicFn(sld), &config).unwrap();
                assert_eq!(again.trace_digest.as_deref(), Some(digest.as_str()));
                assert_eq!(again.path, first.path);
                assert_eq!(again.stats, first.stats);
            }
        }
    }
}

#[test]
fn regenerated_graph_gives_the_same_trace() {
    let spec = GraphSpec::new(4, 16, 42).with_max_weight(30);
    let config = RunConfig::new(Algorithm::Graph).with_trace(true);

    let digest = |spec: &GraphSpec| {
        let graph = RegularGraph::generate(spec).unwrap();
        run_search(&graph.problem(0, 9), ZeroHeuristic, &config)
            .unwrap()
            .trace_digest
            .unwrap()
    };
    assert_eq!(digest(&spec), digest(&spec));
    assert_ne!(digest(&spec), digest(&GraphSpec::new(4, 16, 43).with_max_weight(30)));
}

#[test]
fn algorithms_leave_distinct_traces() {
    let problem = Romania::arad_to_bucharest();
    let digests: Vec<String> = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let config = RunConfig::new(algorithm).with_trace(true);
            run_search(&problem, HeuristicFn(sld), &config)
                .unwrap()
                .trace_digest
                .unwrap()
        })
        .collect();
    assert_ne!(digests[0], digests[1]);
    assert_ne!(digests[0], digests[2]);
    assert_ne!(digests[1], digests[2]);
}
