//! Problem worlds driven by the runner, the CLI and the acceptance tests.

pub mod edge_list;
pub mod regular_graph;
pub mod romania;
