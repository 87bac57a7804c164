//! Evaluation and tie-break policies.
//!
//! Frontier order is the lexicographic key `(f, tie, generation)`:
//!
//! 1. `f` from an [`Evaluation`] (lower first)
//! 2. a [`TiePolicy`] split between entries with equal `f`
//! 3. insertion order, appended by the frontier itself
//!
//! The last component makes every ordering total, so runs are reproducible
//! even when the tie policy returns [`Ordering::Equal`].
//!
//! All policies are generic parameters and resolve statically.

use std::cmp::Ordering;

use crate::cost::PathCost;
use crate::node::Node;

// ---------------------------------------------------------------------------
// Heuristics
// ---------------------------------------------------------------------------

/// Estimated remaining cost from a state to the nearest goal.
pub trait Heuristic<S, C> {
    fn h(&self, state: &S) -> C;
}

/// `h = 0` everywhere. Admissible and consistent for non-negative costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<S, C: PathCost> Heuristic<S, C> for ZeroHeuristic {
    fn h(&self, _state: &S) -> C {
        C::ZERO
    }
}

/// Adapts a closure `Fn(&S) -> C` into a [`Heuristic`].
#[derive(Clone, Copy)]
pub struct HeuristicFn<F>(pub F);

impl<S, C, F> Heuristic<S, C> for HeuristicFn<F>
where
    F: Fn(&S) -> C,
{
    fn h(&self, state: &S) -> C {
        (self.0)(state)
    }
}

impl<S, C, H: Heuristic<S, C> + ?Sized> Heuristic<S, C> for &H {
    fn h(&self, state: &S) -> C {
        (**self).h(state)
    }
}

// ---------------------------------------------------------------------------
// Evaluation functions
// ---------------------------------------------------------------------------

/// The primary ordering key `f(node)`.
pub trait Evaluation<S, A, C> {
    fn f(&self, node: &Node<S, A, C>) -> C;
}

/// Uniform-cost search: `f = g`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl<S, A, C: PathCost> Evaluation<S, A, C> for Dijkstra {
    fn f(&self, node: &Node<S, A, C>) -> C {
        node.path_cost()
    }
}

/// A*: `f = g + h`, saturating.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar<H> {
    pub heuristic: H,
}

impl<H> AStar<H> {
    #[must_use]
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<S, A, C: PathCost, H: Heuristic<S, C>> Evaluation<S, A, C> for AStar<H> {
    fn f(&self, node: &Node<S, A, C>) -> C {
        node.path_cost().plus(self.heuristic.h(node.state()))
    }
}

/// Greedy best-first: `f = h`. Not optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy<H> {
    pub heuristic: H,
}

impl<H> Greedy<H> {
    #[must_use]
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<S, A, C: PathCost, H: Heuristic<S, C>> Evaluation<S, A, C> for Greedy<H> {
    fn f(&self, node: &Node<S, A, C>) -> C {
        self.heuristic.h(node.state())
    }
}

// ---------------------------------------------------------------------------
// Tie policies
// ---------------------------------------------------------------------------

/// Orders two entries whose `f` values are equal. `Less` means `a` pops first.
pub trait TiePolicy<S, A, C> {
    fn split(&self, a: &Node<S, A, C>, b: &Node<S, A, C>) -> Ordering;
}

/// No preference; generation order alone decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTie;

impl<S, A, C> TiePolicy<S, A, C> for NoTie {
    fn split(&self, _a: &Node<S, A, C>, _b: &Node<S, A, C>) -> Ordering {
        Ordering::Equal
    }
}

/// Prefer the entry with the lower heuristic value.
///
/// On A* this favours nodes deeper along a promising path.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowH<H> {
    pub heuristic: H,
}

impl<H> LowH<H> {
    #[must_use]
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<S, A, C: PathCost, H: Heuristic<S, C>> TiePolicy<S, A, C> for LowH<H> {
    fn split(&self, a: &Node<S, A, C>, b: &Node<S, A, C>) -> Ordering {
        self.heuristic.h(a.state()).cmp(&self.heuristic.h(b.state()))
    }
}

/// [`LowH`], then the lower state by `Ord`.
///
/// Makes the pop order independent of generation order whenever states differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowHTotal<H> {
    pub heuristic: H,
}

impl<H> LowHTotal<H> {
    #[must_use]
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<S: Ord, A, C: PathCost, H: Heuristic<S, C>> TiePolicy<S, A, C> for LowHTotal<H> {
    fn split(&self, a: &Node<S, A, C>, b: &Node<S, A, C>) -> Ordering {
        self.heuristic
            .h(a.state())
            .cmp(&self.heuristic.h(b.state()))
            .then_with(|| a.state().cmp(b.state()))
    }
}

/// Prefer shallower nodes (fewer steps from the root).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shallow;

impl<S, A, C> TiePolicy<S, A, C> for Shallow {
    fn split(&self, a: &Node<S, A, C>, b: &Node<S, A, C>) -> Ordering {
        a.depth().cmp(&b.depth())
    }
}

/// Adapts a closure `Fn(&Node, &Node) -> Ordering` into a [`TiePolicy`].
#[derive(Clone, Copy)]
pub struct TieFn<F>(pub F);

impl<S, A, C, F> TiePolicy<S, A, C> for TieFn<F>
where
    F: Fn(&Node<S, A, C>, &Node<S, A, C>) -> Ordering,
{
    fn split(&self, a: &Node<S, A, C>, b: &Node<S, A, C>) -> Ordering {
        (self.0)(a, b)
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// An evaluation function paired with a tie policy.
///
/// This is what every strategy takes; the frontier borrows it for the
/// duration of a run.
#[derive(Debug, Clone, Copy)]
pub struct Priority<E, T = NoTie> {
    evaluation: E,
    tie: T,
}

impl<E> Priority<E, NoTie> {
    /// Priority with no tie policy (generation order breaks ties).
    #[must_use]
    pub fn new(evaluation: E) -> Self {
        Self {
            evaluation,
            tie: NoTie,
        }
    }
}

impl Default for Priority<Dijkstra, NoTie> {
    fn default() -> Self {
        Self::new(Dijkstra)
    }
}

impl<E, T> Priority<E, T> {
    /// Replace the tie policy.
    #[must_use]
    pub fn with_tie<U>(self, tie: U) -> Priority<E, U> {
        Priority {
            evaluation: self.evaluation,
            tie,
        }
    }

    #[must_use]
    pub fn evaluation(&self) -> &E {
        &self.evaluation
    }

    #[must_use]
    pub fn tie(&self) -> &T {
        &self.tie
    }

    /// Evaluate `node`.
    pub fn f<S, A, C>(&self, node: &Node<S, A, C>) -> C
    where
        E: Evaluation<S, A, C>,
    {
        self.evaluation.f(node)
    }

    /// Split two nodes with equal `f`.
    pub fn split<S, A, C>(&self, a: &Node<S, A, C>, b: &Node<S, A, C>) -> Ordering
    where
        T: TiePolicy<S, A, C>,
    {
        self.tie.split(a, b)
    }

    /// Full comparison on `(f, tie)`; generation order is left to the caller.
    pub fn compare<S, A, C>(&self, a: &Node<S, A, C>, b: &Node<S, A, C>) -> Ordering
    where
        C: Ord,
        E: Evaluation<S, A, C>,
        T: TiePolicy<S, A, C>,
    {
        self.f(a).cmp(&self.f(b)).then_with(|| self.split(a, b))
    }
}
