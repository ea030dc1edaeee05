mod parallel;

use std::{cmp::Ordering, convert::Infallible};

use rayon::current_num_threads;

use crate::{
    constants::MIN_PARALLEL_LEN,
    stats::{AtomicSortStats, SortStats},
    util::{into_ok, is_greater},
    SortStrategy,
};

/// Odd-even transposition sort.
///
/// Alternates a phase over the pairs `(0, 1), (2, 3), ...` with a phase over
/// `(1, 2), (3, 4), ...` until a full round swaps nothing. The pairs within a
/// phase are disjoint, which is what [`OddEvenSort::par_sort_by`] exploits.
///
/// *O*(*n*^2) worst case, *O*(*n*) on already sorted input. Stable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OddEvenSort;

impl SortStrategy for OddEvenSort {
    fn name(&self) -> &'static str {
        "odd-even"
    }

    #[inline]
    fn try_sort_in_place<T, F, E>(
        &self,
        v: &mut [T],
        compare: &mut F,
        stats: &mut SortStats,
    ) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        odd_even_sort(v, compare, stats)
    }
}

impl OddEvenSort {
    /// Sorted copy of `items`, running each transposition phase on the rayon pool.
    ///
    /// Produces exactly what [`SortStrategy::sort_by`] produces.
    #[inline]
    pub fn par_sort_by<T, F>(&self, items: &[T], compare: F) -> Vec<T>
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        self.par_sort_with_stats(items, compare).0
    }

    pub fn par_sort_with_stats<T, F>(&self, items: &[T], compare: F) -> (Vec<T>, SortStats)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        let mut v = items.to_vec();
        let stats = into_ok(par_odd_even(&mut v, &|a: &T, b: &T| {
            Ok::<_, Infallible>(compare(a, b))
        }));
        (v, stats)
    }

    /// Parallel form of [`SortStrategy::try_sort`] for a present sequence.
    ///
    /// Returns the first error recorded by any worker. No comparison starts
    /// after that; comparisons already running on other threads finish and
    /// their errors are dropped.
    pub fn try_par_sort_by<T, F, E>(&self, items: &[T], compare: F) -> Result<Vec<T>, E>
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
        E: Send,
    {
        let mut v = items.to_vec();
        par_odd_even(&mut v, &compare)?;
        Ok(v)
    }
}

fn par_odd_even<T, F, E>(v: &mut [T], compare: &F) -> Result<SortStats, E>
where
    T: Send,
    F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
    E: Send,
{
    // Sorting in parallel makes no sense with only one thread
    if current_num_threads() == 1 || v.len() < MIN_PARALLEL_LEN {
        let mut stats = SortStats::default();
        odd_even_sort(v, &mut |a: &T, b: &T| compare(a, b), &mut stats)?;
        return Ok(stats);
    }
    let stats = AtomicSortStats::default();
    parallel::par_odd_even_sort(v, compare, &stats)?;
    Ok(stats.fetch())
}

pub(crate) fn odd_even_sort<T, F, E>(
    v: &mut [T],
    compare: &mut F,
    stats: &mut SortStats,
) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    // `len` rounds always suffice; the bound also stops inconsistent orderings
    for _ in 0..v.len() {
        let mut swapped = transposition_phase(v, 0, compare, stats)?;
        swapped |= transposition_phase(v, 1, compare, stats)?;
        if !swapped {
            break;
        }
    }
    Ok(())
}

/// Compares and exchanges the pairs starting at `offset`, `offset + 2`, ...
fn transposition_phase<T, F, E>(
    v: &mut [T],
    offset: usize,
    compare: &mut F,
    stats: &mut SortStats,
) -> Result<bool, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    stats.passes += 1;
    let offset = offset.min(v.len());
    let mut swapped = false;
    for pair in v[offset..].chunks_exact_mut(2) {
        if is_greater(compare, &pair[0], &pair[1], stats)? {
            pair.swap(0, 1);
            stats.swaps += 1;
            swapped = true;
        }
    }
    Ok(swapped)
}
