//! Interchangeable comparison sorts behind one [`SortStrategy`] trait.
//!
//! Every strategy sorts a copy of the caller's sequence using an ordering the
//! caller supplies; the input itself is never touched. The ordering must be a
//! strict weak ordering. This is not checked: a broken ordering yields an
//! unspecified permutation of the input, but every strategy still terminates.
use std::cmp::Ordering;

use util::{infallible, into_ok};

mod algorithm;
mod bubble_sort;
mod config;
mod constants;
mod error;
mod insertion_sort;
mod odd_even;
mod stats;
mod util;

pub use algorithm::Algorithm;
pub use bubble_sort::BubbleSort;
pub use config::SortConfig;
pub use error::{ConfigError, ParseAlgorithmError};
pub use insertion_sort::InsertionSort;
pub use odd_even::OddEvenSort;
pub use stats::SortStats;

/// A comparison sort that can be swapped for any other at the call site.
///
/// Implementors provide [`try_sort_in_place`](SortStrategy::try_sort_in_place);
/// everything else is derived from it and always works on a fresh copy.
pub trait SortStrategy {
    /// Stable, lowercase identifier of the algorithm.
    fn name(&self) -> &'static str;

    /// Sorts `v` in place so that no adjacent pair compares as
    /// [`Ordering::Greater`], counting the work done into `stats`.
    ///
    /// The first error returned by `compare` aborts the sort and is returned
    /// unchanged; `v` is then some permutation of its former contents.
    fn try_sort_in_place<T, F, E>(
        &self,
        v: &mut [T],
        compare: &mut F,
        stats: &mut SortStats,
    ) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>;

    /// Returns a sorted copy of `items`, or `None` if no sequence was given.
    #[inline]
    fn sort<T, F>(&self, items: Option<&[T]>, compare: F) -> Option<Vec<T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        items.map(|items| self.sort_by(items, compare))
    }

    #[inline]
    fn sort_by<T, F>(&self, items: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_with_stats(items, compare).0
    }

    #[inline]
    fn sort_by_key<T, K, F>(&self, items: &[T], mut f: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_by(items, |a, b| f(a).cmp(&f(b)))
    }

    fn sort_with_stats<T, F>(&self, items: &[T], compare: F) -> (Vec<T>, SortStats)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut v = items.to_vec();
        let mut stats = SortStats::default();
        into_ok(self.try_sort_in_place(&mut v, &mut infallible(compare), &mut stats));
        (v, stats)
    }

    /// Like [`sort`](SortStrategy::sort), with an ordering that may fail.
    /// A failing comparison is returned to the caller as is.
    fn try_sort<T, F, E>(&self, items: Option<&[T]>, mut compare: F) -> Result<Option<Vec<T>>, E>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        let Some(items) = items else {
            return Ok(None);
        };
        let mut v = items.to_vec();
        let mut stats = SortStats::default();
        self.try_sort_in_place(&mut v, &mut compare, &mut stats)?;
        Ok(Some(v))
    }
}
