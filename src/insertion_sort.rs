use std::cmp::Ordering;

use crate::{stats::SortStats, util::is_greater, SortStrategy};

/// Grows a sorted prefix one element at a time.
///
/// *O*(*n*^2) worst case, *O*(*n*) on already sorted input. Stable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsertionSort;

impl SortStrategy for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion"
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
        insertion_sort(v, compare, stats)
    }
}

/// Inserts `v[i]` into the sorted prefix `v[..i]` for every `i`.
///
/// The insertion point is found before anything moves, so a failing or
/// panicking comparison leaves `v` a permutation of its input.
pub(crate) fn insertion_sort<T, F, E>(
    v: &mut [T],
    compare: &mut F,
    stats: &mut SortStats,
) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    for current in 1..v.len() {
        stats.passes += 1;
        let mut insert = current;
        while insert > 0 && is_greater(compare, &v[insert - 1], &v[current], stats)? {
            insert -= 1;
        }
        if insert != current {
            v[insert..=current].rotate_right(1);
            stats.swaps += current - insert;
        }
    }
    Ok(())
}
