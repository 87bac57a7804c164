//! Core search node type.

use std::rc::Rc;

use crate::cost::PathCost;

/// Shared handle to a search node.
///
/// Children hold their parent through this handle, so a parent stays alive
/// for as long as any descendant (frontier entry, RBFS frame, returned goal)
/// still needs it for path reconstruction.
pub type NodeRef<S, A, C> = Rc<Node<S, A, C>>;

/// An immutable search-tree record.
///
/// Invariant: `path_cost(child) == path_cost(parent) + step_cost(parent, action, child)`.
/// The root has no parent, no action and `path_cost == C::ZERO`. Parent links
/// always point at a node that existed before the child, so chains are acyclic.
#[derive(Debug)]
pub struct Node<S, A, C> {
    state: S,
    parent: Option<NodeRef<S, A, C>>,
    action: Option<A>,
    path_cost: C,
    depth: u32,
}

impl<S, A, C: PathCost> Node<S, A, C> {
    /// Create a root node for `state` with zero path cost.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self::new(state, None, None, C::ZERO)
    }
}

impl<S, A, C> Node<S, A, C> {
    /// Create a node. Depth is derived from the parent (root = 0).
    #[must_use]
    pub fn new(state: S, parent: Option<NodeRef<S, A, C>>, action: Option<A>, path_cost: C) -> Self {
        let depth = parent.as_ref().map_or(0, |p| p.depth + 1);
        Self {
            state,
            parent,
            action,
            path_cost,
            depth,
        }
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[must_use]
    pub fn parent(&self) -> Option<&NodeRef<S, A, C>> {
        self.parent.as_ref()
    }

    /// The action that generated this node (`None` for the root).
    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn path_cost(&self) -> C
    where
        C: Copy,
    {
        self.path_cost
    }

    /// Tree depth (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Walk from this node up to the root (this node first).
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'_, S, A, C> {
        Ancestors { next: Some(self) }
    }

    /// States from the root to this node, in traversal order (start first).
    #[must_use]
    pub fn path(&self) -> Vec<S>
    where
        S: Clone,
    {
        let mut states: Vec<S> = self.ancestors().map(|n| n.state.clone()).collect();
        states.reverse();
        states
    }

    /// Actions from the root to this node, in traversal order.
    #[must_use]
    pub fn solution(&self) -> Vec<A>
    where
        A: Clone,
    {
        let mut actions: Vec<A> = self.ancestors().filter_map(|n| n.action.clone()).collect();
        actions.reverse();
        actions
    }

    /// Append the start-to-goal state sequence to `sink`.
    ///
    /// The engine never chooses storage for a result path; any `Extend` works
    /// (`Vec`, `VecDeque`, a counting adaptor, ...).
    pub fn write_path<W>(&self, sink: &mut W)
    where
        S: Clone,
        W: Extend<S>,
    {
        sink.extend(self.path());
    }
}

/// Iterative drop: deep parent chains would otherwise recurse once per level.
impl<S, A, C> Drop for Node<S, A, C> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(rc) = parent {
            match Rc::try_unwrap(rc) {
                Ok(mut node) => parent = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a node and its ancestors, ending at the root.
pub struct Ancestors<'a, S, A, C> {
    next: Option<&'a Node<S, A, C>>,
}

impl<'a, S, A, C> Iterator for Ancestors<'a, S, A, C> {
    type Item = &'a Node<S, A, C>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}
