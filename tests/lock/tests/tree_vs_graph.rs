//! Duplicate detection: tree search may expand a state several times,
//! graph search never does.

use lock_tests::fixtures::{braided, ExpansionCounter};
use lodestar_harness::worlds::romania::{sld, Romania};
use lodestar_search::{
    graph_search_observed, tree_search_observed, AStar, Dijkstra, HeuristicFn, Priority,
    SearchStats,
};

// ---------------------------------------------------------------------------
// ACCEPTANCE: TREE-GRAPH-DIVERGENCE
// ---------------------------------------------------------------------------

#[test]
fn tree_search_reexpands_states_reached_by_several_routes() {
    let problem = braided();
    let priority = Priority::new(Dijkstra);
    let mut counter = ExpansionCounter::default();

    let goal = tree_search_observed(&problem, &priority, &mut counter).unwrap();
    assert_eq!(goal.path_cost(), 12);
    assert_eq!(counter.counts.get(&'B'), Some(&2));
    assert_eq!(counter.counts.get(&'C'), Some(&3));
    assert!(counter.max() > 1);
}

#[test]
fn graph_search_expands_each_state_once() {
    let problem = braided();
    let priority = Priority::new(Dijkstra);
    let mut counter = ExpansionCounter::default();
    let mut stats = SearchStats::new();
    let mut path = Vec::new();

    let cost =
        graph_search_observed(&problem, &priority, &mut path, &mut (&mut counter, &mut stats))
            .unwrap();
    assert_eq!(cost, 12);
    assert_eq!(path, vec!['S', 'A', 'B', 'C', 'G']);
    assert_eq!(counter.max(), 1);
    assert_eq!(counter.total(), 4);
    // B (3 -> 2) and C (4 -> 3) are both improved in place
    assert_eq!(stats.decreased, 2);
}

#[test]
fn graph_search_never_expands_more_than_tree_search_on_romania() {
    let problem = Romania::arad_to_bucharest();
    let priority = Priority::new(AStar::new(HeuristicFn(sld)));

    let mut tree = ExpansionCounter::default();
    let tree_goal = tree_search_observed(&problem, &priority, &mut tree).unwrap();

    let mut graph = ExpansionCounter::default();
    let mut path = Vec::new();
    let graph_cost = graph_search_observed(&problem, &priority, &mut path, &mut graph).unwrap();

    assert_eq!(tree_goal.path_cost(), 418);
    assert_eq!(graph_cost, 418);
    assert_eq!(graph.max(), 1);
    assert!(graph.total() <= tree.total());
}
