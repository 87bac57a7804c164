//! Lodestar Harness: problem worlds and run orchestration for the engine.
//!
//! The harness supplies concrete [`Problem`](lodestar_search::Problem)
//! implementations and drives the engine's strategies from a [`RunConfig`].
//! It does NOT implement search logic; it delegates to `lodestar-search`.
//!
//! - [`worlds`]: Romania road map, random regular graphs, explicit edge lists
//! - [`policy`]: run configuration parsed from CLI strings
//! - [`runner`]: [`run_search`] and the JSON-renderable [`RunReport`]
//! - [`logging`]: the stderr `tracing` subscriber used by the binary

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod logging;
pub mod policy;
pub mod runner;
pub mod worlds;

pub use policy::{Algorithm, HeuristicKind, RunConfig, TieBreak};
pub use runner::{run_search, RunError, RunReport};
