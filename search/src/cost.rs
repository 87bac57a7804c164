//! Numeric path-cost abstraction.
//!
//! Costs are integers: totally ordered, with a reserved maximum that stands
//! for +infinity (dead ends and unbounded RBFS calls). Addition saturates at
//! that maximum so `g + h` never wraps.
//!
//! Finite path costs (and finite `g + h` values) must stay strictly below
//! [`PathCost::INFINITY`]: a real cost equal to the sentinel is
//! indistinguishable from a dead end. Only types of 32 bits and wider
//! implement the trait; [`Problem::child_with_state`] asserts in debug builds
//! that no finite path cost reaches the sentinel.
//!
//! [`Problem::child_with_state`]: crate::contract::Problem::child_with_state

use std::fmt::Debug;

/// A non-negative-by-convention, totally ordered path cost.
pub trait PathCost: Copy + Ord + Debug {
    /// Cost of the empty path (the root node).
    const ZERO: Self;
    /// Sentinel for "no finite bound" and for dead ends.
    const INFINITY: Self;

    /// Saturating addition; anything plus `INFINITY` is `INFINITY`.
    #[must_use]
    fn plus(self, other: Self) -> Self;

    /// Addition that fails instead of reaching [`PathCost::INFINITY`].
    ///
    /// `None` when the exact sum is `INFINITY` or does not fit.
    #[must_use]
    fn checked_plus(self, other: Self) -> Option<Self>;

    /// `false` only for [`PathCost::INFINITY`].
    fn is_finite(self) -> bool {
        self != Self::INFINITY
    }
}

macro_rules! impl_path_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl PathCost for $t {
                const ZERO: Self = 0;
                const INFINITY: Self = <$t>::MAX;

                fn plus(self, other: Self) -> Self {
                    self.saturating_add(other)
                }

                fn checked_plus(self, other: Self) -> Option<Self> {
                    self.checked_add(other).filter(|sum| *sum != <$t>::MAX)
                }
            }
        )*
    };
}

impl_path_cost!(u32, u64, u128, usize, i32, i64, i128, isize);
