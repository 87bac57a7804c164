//! Expanded-state membership for graph search.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// States already expanded during one graph-search run.
///
/// Grows monotonically; there is no removal.
#[derive(Debug, Clone)]
pub struct ClosedSet<S> {
    states: FxHashSet<S>,
}

impl<S: Eq + Hash> ClosedSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: FxHashSet::default(),
        }
    }

    /// Record `state` as expanded. Returns `false` if it already was.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for ClosedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
