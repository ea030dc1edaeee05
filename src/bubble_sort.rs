use std::cmp::Ordering;

use crate::{stats::SortStats, util::is_greater, SortStrategy};

/// Adjacent-exchange sort that stops after the first pass without a swap.
///
/// *O*(*n*^2) worst case, *O*(*n*) on already sorted input. Stable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
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
        bubble_sort(v, compare, stats)
    }
}

pub(crate) fn bubble_sort<T, F, E>(
    v: &mut [T],
    compare: &mut F,
    stats: &mut SortStats,
) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let len = v.len();
    // after pass `i` the largest `i + 1` elements sit at the end
    for i in 0..len.saturating_sub(1) {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..len - 1 - i {
            if is_greater(compare, &v[j], &v[j + 1], stats)? {
                v.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}
