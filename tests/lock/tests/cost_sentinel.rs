//! Path costs near the infinity sentinel.
//!
//! Proves:
//! 1. Finite costs just below `PathCost::INFINITY` are searched exactly
//! 2. A real path whose cost would reach the sentinel is rejected loudly
//!    (debug builds) instead of turning into a dead end

use lodestar_harness::worlds::edge_list::EdgeListProblem;
use lodestar_search::{graph_search, recursive_best_first_search, Dijkstra, PathCost, Priority};

const BIG: u32 = u32::MAX - 300;

fn near_limit() -> EdgeListProblem<char> {
    EdgeListProblem::directed('S', 'G', [('S', 'A', BIG), ('A', 'G', 200)])
}

fn past_limit() -> EdgeListProblem<char> {
    EdgeListProblem::directed('S', 'G', [('S', 'A', BIG), ('A', 'G', 300)])
}

// ---------------------------------------------------------------------------
// 1. Exact below the sentinel
// ---------------------------------------------------------------------------

/// ACCEPTANCE: COST-SENTINEL
#[test]
fn costs_just_below_infinity_stay_exact() {
    let problem = near_limit();
    let priority = Priority::new(Dijkstra);

    let mut path = Vec::new();
    assert_eq!(graph_search(&problem, &priority, &mut path), Ok(u32::MAX - 100));
    assert_eq!(path, vec!['S', 'A', 'G']);

    let goal = recursive_best_first_search(&problem, &priority).unwrap();
    assert_eq!(goal.path_cost(), u32::MAX - 100);
    assert!(goal.path_cost().is_finite());
}

// ---------------------------------------------------------------------------
// 2. Reaching the sentinel is an error, not a silent dead end
// ---------------------------------------------------------------------------

/// ACCEPTANCE: COST-SENTINEL
#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "path cost overflow")]
fn graph_search_rejects_a_path_cost_equal_to_infinity() {
    let mut path = Vec::new();
    let _ = graph_search(&past_limit(), &Priority::new(Dijkstra), &mut path);
}

/// ACCEPTANCE: COST-SENTINEL
#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "path cost overflow")]
fn rbfs_rejects_a_path_cost_equal_to_infinity() {
    let _ = recursive_best_first_search(&past_limit(), &Priority::new(Dijkstra));
}
