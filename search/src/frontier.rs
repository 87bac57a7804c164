//! Open lists.
//!
//! [`Frontier`] is the graph-search queue-set: a priority queue over
//! [`NodeRef`]s plus a side table from state to [`Handle`], so a duplicate
//! state can be found in O(1) and its entry improved in place
//! (`increase_priority`, the decrease-key operation).
//!
//! [`OpenHeap`] is the same ordering without the side table, for tree search.
//!
//! Both borrow a [`Priority`] for their lifetime and order entries by
//! `(f, tie, insertion order)`.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::cost::PathCost;
use crate::error::SearchError;
use crate::evaluation::{Evaluation, Priority, TiePolicy};
use crate::heap::IndexedHeap;
use crate::node::NodeRef;

pub use crate::heap::Handle;

/// Queue-set frontier: at most one live entry per state.
///
/// Invariant: the state table and the heap are mutually consistent. Every
/// table entry names a live heap entry holding that state, and every heap
/// entry is reachable from the table.
pub struct Frontier<'p, S, A, C, E, T> {
    priority: &'p Priority<E, T>,
    heap: IndexedHeap<NodeRef<S, A, C>, C>,
    index: FxHashMap<S, Handle>,
}

impl<'p, S, A, C, E, T> Frontier<'p, S, A, C, E, T>
where
    S: Clone + Eq + Hash,
    C: PathCost,
    E: Evaluation<S, A, C>,
    T: TiePolicy<S, A, C>,
{
    #[must_use]
    pub fn new(priority: &'p Priority<E, T>) -> Self {
        Self {
            priority,
            heap: IndexedHeap::new(),
            index: FxHashMap::default(),
        }
    }

    /// Insert `node` keyed by its evaluation value.
    ///
    /// # Errors
    ///
    /// [`SearchError::DuplicateState`] if the node's state already has a live
    /// entry. Use [`Frontier::find`] and [`Frontier::increase_priority`] for
    /// states that may already be present.
    pub fn push(&mut self, node: NodeRef<S, A, C>) -> Result<Handle, SearchError> {
        if self.index.contains_key(node.state()) {
            return Err(SearchError::DuplicateState);
        }
        let key = self.priority.f(&node);
        let state = node.state().clone();
        let priority = self.priority;
        let handle = self.heap.push(node, key, &|a: &NodeRef<S, A, C>, b: &NodeRef<S, A, C>| {
            priority.split(a, b)
        });
        self.index.insert(state, handle);
        Ok(handle)
    }

    /// Handle of the live entry for `state`, if any.
    #[must_use]
    pub fn find(&self, state: &S) -> Option<Handle> {
        self.index.get(state).copied()
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Node behind a live handle.
    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&NodeRef<S, A, C>> {
        self.heap.get(handle)
    }

    /// Ordering key (`f`) of a live entry.
    #[must_use]
    pub fn key(&self, handle: Handle) -> Option<C> {
        self.heap.key(handle)
    }

    /// Replace the entry at `handle` with `node`, re-keying and re-heapifying.
    ///
    /// The entry keeps its insertion position for tie-breaking and the handle
    /// stays valid. If `node` carries a different state the state table is
    /// moved along with it. Returns the node that was replaced.
    ///
    /// # Errors
    ///
    /// - [`SearchError::StaleHandle`] if `handle` is not live.
    /// - [`SearchError::DuplicateState`] if `node` carries a different state
    ///   that already has its own entry.
    pub fn increase_priority(
        &mut self,
        handle: Handle,
        node: NodeRef<S, A, C>,
    ) -> Result<NodeRef<S, A, C>, SearchError> {
        let current = self.heap.get(handle).ok_or(SearchError::StaleHandle)?;
        let moved = current.state() != node.state();
        if moved && self.index.contains_key(node.state()) {
            return Err(SearchError::DuplicateState);
        }
        let new_state = moved.then(|| node.state().clone());

        let key = self.priority.f(&node);
        let priority = self.priority;
        let previous = self
            .heap
            .replace(handle, node, key, &|a: &NodeRef<S, A, C>, b: &NodeRef<S, A, C>| {
                priority.split(a, b)
            })
            .ok_or(SearchError::StaleHandle)?;

        if let Some(state) = new_state {
            self.index.remove(previous.state());
            self.index.insert(state, handle);
        }
        Ok(previous)
    }

    /// Remove the best entry and return it with its `f` value.
    pub fn pop_with_cost(&mut self) -> Option<(NodeRef<S, A, C>, C)> {
        let priority = self.priority;
        let (node, key) = self
            .heap
            .pop(&|a: &NodeRef<S, A, C>, b: &NodeRef<S, A, C>| priority.split(a, b))?;
        self.index.remove(node.state());
        Some((node, key))
    }

    /// Remove and return the best entry.
    pub fn pop(&mut self) -> Option<NodeRef<S, A, C>> {
        self.pop_with_cost().map(|(node, _)| node)
    }

    /// The entry `pop` would return next.
    #[must_use]
    pub fn peek(&self) -> Option<(&NodeRef<S, A, C>, C)> {
        self.heap.peek()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of simultaneous entries seen.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.heap.high_water()
    }

    /// Drop every entry. Outstanding handles become stale.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// Live nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeRef<S, A, C>> {
        self.heap.iter().map(|(node, _)| node)
    }

    /// Verify the state table against the heap and the heap property.
    #[must_use]
    pub fn check_consistency(&self) -> bool {
        let priority = self.priority;
        let tie = |a: &NodeRef<S, A, C>, b: &NodeRef<S, A, C>| priority.split(a, b);
        let table_ok = self.index.len() == self.heap.len()
            && self.index.iter().all(|(state, handle)| {
                self.heap.get(*handle).is_some_and(|node| node.state() == state)
            });
        let keys_ok = self
            .heap
            .iter()
            .all(|(node, key)| self.priority.f(node) == key);
        table_ok && keys_ok && self.heap.is_consistent(&tie)
    }
}

/// Plain priority queue used by tree search. Duplicate states are allowed.
pub struct OpenHeap<'p, S, A, C, E, T> {
    priority: &'p Priority<E, T>,
    heap: IndexedHeap<NodeRef<S, A, C>, C>,
}

impl<'p, S, A, C, E, T> OpenHeap<'p, S, A, C, E, T>
where
    C: PathCost,
    E: Evaluation<S, A, C>,
    T: TiePolicy<S, A, C>,
{
    #[must_use]
    pub fn new(priority: &'p Priority<E, T>) -> Self {
        Self {
            priority,
            heap: IndexedHeap::new(),
        }
    }

    /// Insert `node`; returns its `f` value.
    pub fn push(&mut self, node: NodeRef<S, A, C>) -> C {
        let key = self.priority.f(&node);
        let priority = self.priority;
        self.heap.push(node, key, &|a: &NodeRef<S, A, C>, b: &NodeRef<S, A, C>| {
            priority.split(a, b)
        });
        key
    }

    pub fn pop_with_cost(&mut self) -> Option<(NodeRef<S, A, C>, C)> {
        let priority = self.priority;
        self.heap
            .pop(&|a: &NodeRef<S, A, C>, b: &NodeRef<S, A, C>| priority.split(a, b))
    }

    pub fn pop(&mut self) -> Option<NodeRef<S, A, C>> {
        self.pop_with_cost().map(|(node, _)| node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn high_water(&self) -> usize {
        self.heap.high_water()
    }
}
