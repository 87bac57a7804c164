//! Typed search errors.
//!
//! [`SearchError::GoalNotFound`] is the only outcome error the three
//! strategies produce. The remaining variants report misuse of the
//! [`Frontier`](crate::frontier::Frontier) API by callers that drive it
//! directly; the strategies never trigger them.

/// Failure of a search run or of a direct frontier operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The frontier emptied (graph/tree search) or the top-level recursive
    /// call returned no goal (RBFS). No partial result is produced.
    #[error("goal not found: no goal state is reachable from the initial state")]
    GoalNotFound,
    /// `Frontier::push` was called for a state that already has a live entry.
    #[error("frontier already holds an entry for this state")]
    DuplicateState,
    /// A frontier handle no longer refers to a live entry.
    #[error("frontier handle does not refer to a live entry")]
    StaleHandle,
}
