//! Result paths run from the initial state to the goal.

use std::collections::VecDeque;

use lock_tests::fixtures::{braided, triangle};
use lodestar_harness::worlds::romania::{sld, City, Romania};
use lodestar_search::{
    graph_search, recursive_best_first_search, tree_search, AStar, Dijkstra, HeuristicFn,
    Priority, Problem,
};

// ---------------------------------------------------------------------------
// ACCEPTANCE: PATH-DIRECTION
// ---------------------------------------------------------------------------

#[test]
fn graph_search_appends_start_to_goal_into_any_sink() {
    let problem = Romania::new(City::Oradea, City::Bucharest);
    let priority = Priority::new(AStar::new(HeuristicFn(sld)));

    let mut deque: VecDeque<City> = VecDeque::from([City::Neamt]);
    let cost = graph_search(&problem, &priority, &mut deque).unwrap();
    // existing contents are kept; the path follows them
    assert_eq!(deque.pop_front(), Some(City::Neamt));
    assert_eq!(deque.front(), Some(&City::Oradea));
    assert_eq!(deque.back(), Some(&City::Bucharest));

    let total: u32 = deque
        .iter()
        .zip(deque.iter().skip(1))
        .map(|(a, b)| {
            a.neighbours()
                .into_iter()
                .find(|(n, _)| n == b)
                .map(|(_, w)| w)
                .unwrap()
        })
        .sum();
    assert_eq!(total, cost);
}

#[test]
fn every_strategy_agrees_on_direction() {
    let problem = braided();
    let priority = Priority::new(Dijkstra);
    let expected = vec!['S', 'A', 'B', 'C', 'G'];

    let mut path = Vec::new();
    graph_search(&problem, &priority, &mut path).unwrap();
    assert_eq!(path, expected);
    assert_eq!(tree_search(&problem, &priority).unwrap().path(), expected);
    assert_eq!(
        recursive_best_first_search(&problem, &priority)
            .unwrap()
            .path(),
        expected
    );
}

#[test]
fn goal_node_write_path_matches_path() {
    let problem = triangle();
    let goal = recursive_best_first_search(&problem, &Priority::new(Dijkstra)).unwrap();
    let mut sink = VecDeque::new();
    goal.write_path(&mut sink);
    assert_eq!(sink.iter().copied().collect::<Vec<_>>(), goal.path());
    assert_eq!(sink.front(), Some(&problem.initial()));
    assert_eq!(goal.ancestors().next().map(|n| *n.state()), Some('C'));
    assert_eq!(goal.depth() as usize + 1, goal.path().len());
}

#[test]
fn root_goal_yields_single_state_path() {
    let problem = Romania::new(City::Bucharest, City::Bucharest);
    let mut path = Vec::new();
    let cost = graph_search(&problem, &Priority::new(Dijkstra), &mut path).unwrap();
    assert_eq!(cost, 0);
    assert_eq!(path, vec![City::Bucharest]);
}
