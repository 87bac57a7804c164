//! Run orchestration: one problem, one heuristic, one [`RunConfig`].
//!
//! The runner builds the [`Priority`] the config asks for, dispatches to the
//! selected strategy with a [`SearchStats`] observer (plus a
//! [`TraceRecorder`] when tracing is on), and packages the outcome as a
//! [`RunReport`].
//!
//! ```text
//! RunConfig.tie_break  -> Priority<AStar<H>, NoTie | LowH<H> | LowHTotal<H>>
//! RunConfig.algorithm  -> graph_search | tree_search | rbfs   (observed)
//! outcome              -> RunReport { path, cost, stats, trace digest }
//! ```
//!
//! The evaluation is always A* over the supplied heuristic; pass
//! [`ZeroHeuristic`](lodestar_search::ZeroHeuristic) for uniform-cost search.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use lodestar_search::{
    graph_search_observed, recursive_best_first_search_observed, tree_search_observed, AStar,
    Evaluation, Heuristic, LowH, LowHTotal, Priority, Problem, SearchError, SearchObserver,
    SearchStats, TiePolicy, TraceRecorder,
};

use crate::policy::{Algorithm, RunConfig, TieBreak};

/// Failure of a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The search itself failed (no reachable goal).
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The recorded trace could not be serialized for its digest.
    #[error("trace serialization failed: {0}")]
    Trace(#[from] serde_json::Error),
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport<S, C> {
    pub config: RunConfig,
    /// Start-to-goal states.
    pub path: Vec<S>,
    pub cost: C,
    pub stats: SearchStats,
    /// Present when the config asked for a trace.
    pub trace: Option<TraceRecorder>,
    /// `"sha256:<hex>"` of the canonical trace, when traced.
    pub trace_digest: Option<String>,
}

impl<S: Display, C: Copy + Into<serde_json::Value>> RunReport<S, C> {
    /// Report as JSON. States render through `Display`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let cost: serde_json::Value = self.cost.into();
        serde_json::json!({
            "config": self.config.to_json_value(),
            "cost": cost,
            "path": self.path.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "stats": self.stats.to_json_value(),
            "trace_digest": self.trace_digest,
        })
    }
}

/// Run `problem` as configured.
///
/// # Errors
///
/// - [`RunError::Search`] when no goal is reachable.
/// - [`RunError::Trace`] when tracing is on and the trace fails to serialize.
pub fn run_search<P, H>(
    problem: &P,
    heuristic: H,
    config: &RunConfig,
) -> Result<RunReport<P::State, P::Cost>, RunError>
where
    P: Problem,
    P::State: Ord + Hash + Debug,
    H: Heuristic<P::State, P::Cost> + Clone,
{
    let priority = Priority::new(AStar::new(heuristic.clone()));
    match config.tie_break {
        TieBreak::None => run_with(problem, &priority, config),
        TieBreak::LowH => run_with(problem, &priority.with_tie(LowH::new(heuristic)), config),
        TieBreak::LowHTotal => {
            run_with(problem, &priority.with_tie(LowHTotal::new(heuristic)), config)
        }
    }
}

fn run_with<P, E, T>(
    problem: &P,
    priority: &Priority<E, T>,
    config: &RunConfig,
) -> Result<RunReport<P::State, P::Cost>, RunError>
where
    P: Problem,
    P::State: Hash + Eq + Debug,
    E: Evaluation<P::State, P::Action, P::Cost>,
    T: TiePolicy<P::State, P::Action, P::Cost>,
{
    let mut stats = SearchStats::new();
    let mut trace = config.trace.then(TraceRecorder::new);

    let (path, cost) = match trace.as_mut() {
        Some(recorder) => execute(
            problem,
            priority,
            config.algorithm,
            &mut (&mut stats, recorder),
        )?,
        None => execute(problem, priority, config.algorithm, &mut stats)?,
    };
    let trace_digest = trace.as_ref().map(TraceRecorder::digest).transpose()?;

    tracing::debug!(
        algorithm = %config.algorithm,
        tie_break = %config.tie_break,
        cost = ?cost,
        path_len = path.len(),
        expanded = stats.expanded,
        "run complete"
    );

    Ok(RunReport {
        config: *config,
        path,
        cost,
        stats,
        trace,
        trace_digest,
    })
}

fn execute<P, E, T, O>(
    problem: &P,
    priority: &Priority<E, T>,
    algorithm: Algorithm,
    observer: &mut O,
) -> Result<(Vec<P::State>, P::Cost), SearchError>
where
    P: Problem,
    P::State: Hash + Eq,
    E: Evaluation<P::State, P::Action, P::Cost>,
    T: TiePolicy<P::State, P::Action, P::Cost>,
    O: SearchObserver<P::State, P::Action, P::Cost>,
{
    match algorithm {
        Algorithm::Graph => {
            let mut path = Vec::new();
            let cost = graph_search_observed(problem, priority, &mut path, observer)?;
            Ok((path, cost))
        }
        Algorithm::Tree => {
            let goal = tree_search_observed(problem, priority, observer)?;
            Ok((goal.path(), goal.path_cost()))
        }
        Algorithm::Rbfs => {
            let goal = recursive_best_first_search_observed(problem, priority, observer)?;
            Ok((goal.path(), goal.path_cost()))
        }
    }
}
