//! End-to-end scenarios: the three strategies on hand-built graphs.

use lock_tests::fixtures::{dead_start, triangle, two_equal_paths};
use lodestar_search::{
    graph_search, recursive_best_first_search, tree_search, Dijkstra, Priority, SearchError,
};

// ---------------------------------------------------------------------------
// ACCEPTANCE: SCENARIO-TRIANGLE
// ---------------------------------------------------------------------------

#[test]
fn graph_search_takes_the_two_step_route() {
    let mut path = Vec::new();
    let cost = graph_search(&triangle(), &Priority::new(Dijkstra), &mut path).unwrap();
    assert_eq!(cost, 2);
    assert_eq!(path, vec!['A', 'B', 'C']);
}

#[test]
fn rbfs_goal_node_has_cost_two() {
    let goal = recursive_best_first_search(&triangle(), &Priority::new(Dijkstra)).unwrap();
    assert_eq!(goal.path_cost(), 2);
    assert_eq!(goal.path(), vec!['A', 'B', 'C']);
}

#[test]
fn tree_search_goal_node_has_cost_two() {
    let goal = tree_search(&triangle(), &Priority::new(Dijkstra)).unwrap();
    assert_eq!(goal.path_cost(), 2);
    assert_eq!(goal.solution().len(), 2);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SCENARIO-DEAD-START
// ---------------------------------------------------------------------------

#[test]
fn every_strategy_reports_goal_not_found() {
    let problem = dead_start();
    let priority = Priority::new(Dijkstra);

    let mut path = Vec::new();
    assert_eq!(
        graph_search(&problem, &priority, &mut path),
        Err(SearchError::GoalNotFound)
    );
    assert!(path.is_empty(), "no partial path on failure");

    assert_eq!(
        tree_search(&problem, &priority).map(|_| ()),
        Err(SearchError::GoalNotFound)
    );
    assert_eq!(
        recursive_best_first_search(&problem, &priority).map(|_| ()),
        Err(SearchError::GoalNotFound)
    );
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SCENARIO-EQUAL-COST
// ---------------------------------------------------------------------------

#[test]
fn equal_cost_routes_return_the_minimum() {
    let problem = two_equal_paths();
    let priority = Priority::new(Dijkstra);

    let mut path = Vec::new();
    assert_eq!(graph_search(&problem, &priority, &mut path), Ok(3));
    assert!(path == vec!['S', 'A', 'G'] || path == vec!['S', 'B', 'G'], "{path:?}");

    assert_eq!(tree_search(&problem, &priority).unwrap().path_cost(), 3);
    assert_eq!(
        recursive_best_first_search(&problem, &priority)
            .unwrap()
            .path_cost(),
        3
    );
}

#[test]
fn equal_cost_routes_resolve_the_same_way_every_run() {
    let problem = two_equal_paths();
    let priority = Priority::new(Dijkstra);
    let mut first = Vec::new();
    graph_search(&problem, &priority, &mut first).unwrap();
    for _ in 0..10 {
        let mut again = Vec::new();
        graph_search(&problem, &priority, &mut again).unwrap();
        assert_eq!(again, first);
    }
}
