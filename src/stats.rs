use std::{fmt::Debug, ops::AddAssign};

use portable_atomic::{AtomicUsize, Ordering};

/// Work counters filled in by every strategy.
///
/// A pass is one outer iteration: a bubble sweep, the insertion of a single
/// element, or one odd/even transposition phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub passes: usize,
}

impl AddAssign for SortStats {
    fn add_assign(&mut self, rhs: Self) {
        self.comparisons += rhs.comparisons;
        self.swaps += rhs.swaps;
        self.passes += rhs.passes;
    }
}

/// Counters shared between the rayon workers of a parallel transposition phase.
#[derive(Default)]
pub(crate) struct AtomicSortStats {
    comparisons: AtomicUsize,
    swaps: AtomicUsize,
    passes: AtomicUsize,
}

impl AtomicSortStats {
    pub(crate) fn add_comparison(&self) {
        self.comparisons.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_swap(&self) {
        self.swaps.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_pass(&self) {
        self.passes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn fetch(&self) -> SortStats {
        SortStats {
            comparisons: self.comparisons.load(Ordering::Relaxed),
            swaps: self.swaps.load(Ordering::Relaxed),
            passes: self.passes.load(Ordering::Relaxed),
        }
    }
}

impl Debug for AtomicSortStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fetch().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use rayon::prelude::*;

    use super::{AtomicSortStats, SortStats};

    #[test]
    fn add_assign_sums_fields() {
        let mut total = SortStats {
            comparisons: 3,
            swaps: 1,
            passes: 1,
        };
        total += SortStats {
            comparisons: 2,
            swaps: 2,
            passes: 1,
        };
        assert_eq!(
            total,
            SortStats {
                comparisons: 5,
                swaps: 3,
                passes: 2
            }
        );
    }

    #[test]
    fn atomic_counters_survive_concurrent_updates() {
        let stats = AtomicSortStats::default();
        (0..10_000).into_par_iter().for_each(|i| {
            stats.add_comparison();
            if i % 2 == 0 {
                stats.add_swap();
            }
        });
        stats.add_pass();
        assert_eq!(
            stats.fetch(),
            SortStats {
                comparisons: 10_000,
                swaps: 5_000,
                passes: 1
            }
        );
    }
}
