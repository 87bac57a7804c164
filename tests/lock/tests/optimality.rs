//! Optimal costs: graph search and RBFS against an independent relaxation.

use lodestar_harness::worlds::regular_graph::{GraphSpec, RegularGraph};
use lodestar_harness::worlds::romania::{sld, City, Romania};
use lodestar_search::{
    graph_search, recursive_best_first_search, tree_search, AStar, Dijkstra, HeuristicFn,
    Priority, ZeroHeuristic,
};

/// Bellman-Ford over an undirected edge list; `None` when unreachable.
fn shortest(nodes: usize, edges: &[(usize, usize, u32)], from: usize, to: usize) -> Option<u32> {
    let mut dist = vec![None::<u32>; nodes];
    dist[from] = Some(0);
    for _ in 0..nodes {
        let mut changed = false;
        for &(a, b, w) in edges {
            for (x, y) in [(a, b), (b, a)] {
                if let Some(dx) = dist[x] {
                    if dist[y].map_or(true, |dy| dx + w < dy) {
                        dist[y] = Some(dx + w);
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist[to]
}

fn romania_reference(from: City) -> Option<u32> {
    let index = |c: City| City::ALL.iter().position(|&x| x == c).unwrap();
    let edges: Vec<(usize, usize, u32)> = City::ALL
        .iter()
        .flat_map(|&c| {
            c.neighbours()
                .into_iter()
                .map(move |(n, w)| (index(c), index(n), w))
        })
        .collect();
    shortest(City::ALL.len(), &edges, index(from), index(City::Bucharest))
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: OPTIMALITY-ROMANIA
// ---------------------------------------------------------------------------

#[test]
fn every_start_city_reaches_bucharest_optimally() {
    let astar = Priority::new(AStar::new(HeuristicFn(sld)));
    let dijkstra = Priority::new(Dijkstra);

    for from in City::ALL {
        let problem = Romania::new(from, City::Bucharest);
        let expected = romania_reference(from).unwrap();

        let mut path = Vec::new();
        assert_eq!(graph_search(&problem, &astar, &mut path), Ok(expected), "{from}");
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&City::Bucharest));

        let mut path = Vec::new();
        assert_eq!(graph_search(&problem, &dijkstra, &mut path), Ok(expected), "{from}");

        let goal = recursive_best_first_search(&problem, &astar).unwrap();
        assert_eq!(goal.path_cost(), expected, "{from}");
        let goal = recursive_best_first_search(&problem, &dijkstra).unwrap();
        assert_eq!(goal.path_cost(), expected, "{from}");

        let goal = tree_search(&problem, &astar).unwrap();
        assert_eq!(goal.path_cost(), expected, "{from}");
    }
}

#[test]
fn textbook_costs() {
    assert_eq!(romania_reference(City::Arad), Some(418));
    assert_eq!(romania_reference(City::Sibiu), Some(278));
    assert_eq!(romania_reference(City::Bucharest), Some(0));
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: OPTIMALITY-RANDOM-GRAPHS
// ---------------------------------------------------------------------------

#[test]
fn random_regular_graphs_agree_with_relaxation() {
    let shapes = [(3, 8), (3, 10), (3, 12), (4, 9), (4, 10), (4, 12)];
    for (branching, nodes) in shapes {
        for seed in 0..5 {
            let spec = GraphSpec::new(branching, nodes, seed).with_max_weight(5);
            let graph = RegularGraph::generate(&spec).unwrap();
            assert!(graph.is_regular());

            let edges: Vec<(usize, usize, u32)> = graph
                .edges()
                .iter()
                .map(|e| (e.a as usize, e.b as usize, e.weight))
                .collect();
            let target = nodes - 1;
            let expected = shortest(nodes as usize, &edges, 0, target as usize);
            let problem = graph.problem(0, target);
            let label = format!("b={branching} n={nodes} seed={seed}");

            let mut path = Vec::new();
            let graph_cost = graph_search(&problem, &Priority::new(Dijkstra), &mut path).ok();
            assert_eq!(graph_cost, expected, "{label}");

            let zero_astar = Priority::new(AStar::new(ZeroHeuristic));
            let mut path = Vec::new();
            assert_eq!(graph_search(&problem, &zero_astar, &mut path).ok(), expected, "{label}");

            let rbfs_cost = recursive_best_first_search(&problem, &Priority::new(Dijkstra))
                .ok()
                .map(|goal| goal.path_cost());
            assert_eq!(rbfs_cost, expected, "{label}");
        }
    }
}

#[test]
fn path_cost_matches_the_sum_of_its_edges() {
    let spec = GraphSpec::new(4, 12, 7).with_max_weight(12);
    let graph = RegularGraph::generate(&spec).unwrap();
    let problem = graph.problem(0, 6);
    let goal = recursive_best_first_search(&problem, &Priority::new(Dijkstra)).unwrap();

    let total: u32 = goal
        .solution()
        .iter()
        .map(|&id| graph.edge(id).unwrap().weight)
        .sum();
    assert_eq!(total, goal.path_cost());
    assert_eq!(goal.path().first(), Some(&0));
    assert_eq!(goal.path().last(), Some(&6));
}
