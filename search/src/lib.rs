//! Lodestar Search: domain-independent informed search.
//!
//! This crate is the algorithmic core. Problems are supplied by clients through
//! the [`Problem`] trait; the crate never depends on a concrete domain.
//!
//! # Strategies
//!
//! ```text
//! graph_search   frontier (queue-set) + closed set, decrease-key on duplicates
//! tree_search    plain priority queue, no duplicate detection
//! rbfs           recursive best-first search (Korf 1993), memory ~ b * d
//! ```
//!
//! # Key types
//!
//! - [`Node`] / [`NodeRef`]: immutable search-tree record with shared parent chain
//! - [`Frontier`]: indexed binary heap with state lookup and `increase_priority`
//! - [`ClosedSet`]: expanded-state membership (graph search only)
//! - [`Priority`]: evaluation function paired with a tie-break policy
//! - [`Siblings`]: per-call RBFS children with revisable costs
//! - [`SearchObserver`]: diagnostic hooks ([`SearchStats`], [`TraceRecorder`])
//! - [`SearchError`]: `GoalNotFound`, the single search outcome error

#![forbid(unsafe_code)]

pub mod closed;
pub mod contract;
pub mod cost;
pub mod error;
pub mod evaluation;
pub mod frontier;
pub mod graph_search;
mod heap;
pub mod node;
pub mod observer;
pub mod rbfs;
pub mod resolve;
pub mod trace;
pub mod tree_search;

pub use closed::ClosedSet;
pub use contract::Problem;
pub use cost::PathCost;
pub use error::SearchError;
pub use evaluation::{
    AStar, Dijkstra, Evaluation, Greedy, Heuristic, HeuristicFn, LowH, LowHTotal, NoTie,
    Priority, Shallow, TieFn, TiePolicy, ZeroHeuristic,
};
pub use frontier::{Frontier, Handle, OpenHeap};
pub use graph_search::{graph_search, graph_search_observed};
pub use node::{Node, NodeRef};
pub use observer::{NoopObserver, RbfsOutcome, SearchObserver, SearchStats};
pub use rbfs::{
    recursive_best_first_search, recursive_best_first_search_observed, NodeCost, Siblings,
};
pub use resolve::{handle_child, ChildOutcome};
pub use trace::{TraceEvent, TraceRecorder};
pub use tree_search::{tree_search, tree_search_observed};
