//! RBFS bound discipline, observed on every recursive call.

use lock_tests::fixtures::{braided, triangle, two_equal_paths, BoundChecker};
use lodestar_harness::worlds::edge_list::EdgeListProblem;
use lodestar_harness::worlds::regular_graph::{GraphSpec, RegularGraph};
use lodestar_harness::worlds::romania::{sld, City, Romania};
use lodestar_search::{
    recursive_best_first_search_observed, AStar, Dijkstra, HeuristicFn, LowHTotal, Node,
    Priority, RbfsOutcome, SearchObserver, SearchStats, TraceRecorder, ZeroHeuristic,
};

// ---------------------------------------------------------------------------
// ACCEPTANCE: RBFS-BOUNDS
// ---------------------------------------------------------------------------

#[test]
fn bounds_hold_on_small_graphs() {
    let priority = Priority::new(Dijkstra);
    for problem in [triangle(), two_equal_paths(), braided()] {
        let mut checker = BoundChecker::default();
        recursive_best_first_search_observed(&problem, &priority, &mut checker).unwrap();
        assert!(checker.violations.is_empty(), "{:?}", checker.violations);
        assert!(checker.calls > 0);
    }
}

#[test]
fn bounds_hold_on_romania_from_every_city() {
    let astar = Priority::new(AStar::new(HeuristicFn(sld)));
    let dijkstra = Priority::new(Dijkstra);
    for from in City::ALL {
        let problem = Romania::new(from, City::Bucharest);

        let mut checker = BoundChecker::default();
        recursive_best_first_search_observed(&problem, &astar, &mut checker).unwrap();
        assert!(checker.violations.is_empty(), "{from}: {:?}", checker.violations);

        let mut checker = BoundChecker::default();
        recursive_best_first_search_observed(&problem, &dijkstra, &mut checker).unwrap();
        assert!(checker.violations.is_empty(), "{from}: {:?}", checker.violations);
    }
}

#[test]
fn bounds_hold_on_random_graphs() {
    for seed in 0..8 {
        let spec = GraphSpec::new(3, 10, seed).with_max_weight(6);
        let graph = RegularGraph::generate(&spec).unwrap();
        let problem = graph.problem(0, 5);
        let priority = Priority::new(Dijkstra).with_tie(LowHTotal::new(ZeroHeuristic));
        let mut checker = BoundChecker::default();
        recursive_best_first_search_observed(&problem, &priority, &mut checker).unwrap();
        assert!(checker.violations.is_empty(), "seed {seed}: {:?}", checker.violations);
    }
}

/// `(f, stored, bound)` for every call.
#[derive(Default)]
struct EnterLog(Vec<(u32, u32, u32)>);

impl<S, A> SearchObserver<S, A, u32> for EnterLog {
    fn on_rbfs_enter(&mut self, _node: &Node<S, A, u32>, f: u32, stored: u32, bound: u32) {
        self.0.push((f, stored, bound));
    }
}

#[test]
fn every_call_gets_a_bound_no_smaller_than_its_stored_value() {
    let problem = Romania::new(City::Timisoara, City::Bucharest);
    let priority = Priority::new(AStar::new(HeuristicFn(sld)));
    let mut log = EnterLog::default();
    recursive_best_first_search_observed(&problem, &priority, &mut log).unwrap();
    assert!(log.0.len() > 1);
    for (f, stored, bound) in &log.0 {
        assert!(stored <= bound, "stored {stored} > bound {bound}");
        assert!(f <= stored, "f {f} > stored {stored}");
    }
}

#[test]
fn backed_up_values_trigger_reexpansion_on_romania() {
    // Arad -> Bucharest with SLD is the textbook RBFS walk: Rimnicu Vilcea
    // is abandoned for Fagaras, then re-entered with its backed-up value.
    let problem = Romania::arad_to_bucharest();
    let priority = Priority::new(AStar::new(HeuristicFn(sld)));
    let mut trace = TraceRecorder::new();
    let mut stats = SearchStats::new();
    let goal =
        recursive_best_first_search_observed(&problem, &priority, &mut (&mut trace, &mut stats))
            .unwrap();
    assert_eq!(goal.path_cost(), 418);
    assert_eq!(
        goal.path(),
        vec![
            City::Arad,
            City::Sibiu,
            City::RimnicuVilcea,
            City::Pitesti,
            City::Bucharest
        ]
    );

    let rimnicu_entries = trace
        .events()
        .iter()
        .filter(|e| e.to_string().starts_with(">>> rbfs(RimnicuVilcea"))
        .count();
    assert_eq!(rimnicu_entries, 2);
    assert!(stats.rbfs_calls > 5);
}

struct Exits(Vec<(char, RbfsOutcome<u32>)>);

impl<A> SearchObserver<char, A, u32> for Exits {
    fn on_rbfs_exit(&mut self, node: &Node<char, A, u32>, outcome: RbfsOutcome<u32>, _bound: u32) {
        self.0.push((*node.state(), outcome));
    }
}

#[test]
fn dead_ends_back_up_infinity() {
    let problem = EdgeListProblem::directed('S', 'G', [('S', 'D', 1_u32), ('S', 'G', 5)]);
    let mut exits = Exits(Vec::new());
    let goal =
        recursive_best_first_search_observed(&problem, &Priority::new(Dijkstra), &mut exits)
            .unwrap();
    assert_eq!(goal.path(), vec!['S', 'G']);
    assert!(exits.0.contains(&('D', RbfsOutcome::Cutoff(u32::MAX))));
}
