use std::{cmp::Ordering, convert::Infallible};

use crate::stats::SortStats;

#[macro_export]
macro_rules! debug {
    ($($x:tt)*) => {
        {
            #[cfg(debug_assertions)]
            {
                std::println!("{:?}", $($x)*);
            }
        }
    };
}

/// Lifts an infallible ordering into the fallible form every strategy is written against.
pub(crate) fn infallible<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Result<Ordering, Infallible>
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| Ok(compare(a, b))
}

pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Counts one comparison and reports whether `a` must move past `b`.
/// Only strictly greater pairs are out of order, which keeps every strategy stable.
#[inline]
pub(crate) fn is_greater<T, F, E>(
    compare: &mut F,
    a: &T,
    b: &T,
    stats: &mut SortStats,
) -> Result<bool, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    stats.comparisons += 1;
    Ok(compare(a, b)? == Ordering::Greater)
}

#[cfg(test)]
pub(crate) fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{infallible, into_ok, is_greater, is_sorted_by};
    use crate::stats::SortStats;

    #[test]
    fn is_sorted_by_honors_the_ordering() {
        let ascending = |a: &i32, b: &i32| a.cmp(b);
        assert!(is_sorted_by(&[1, 2, 3], ascending));
        assert!(is_sorted_by(&[1, 1, 1], ascending));
        assert!(!is_sorted_by(&[3, 2, 1], ascending));
        assert!(is_sorted_by(&[3, 2, 1], |a: &i32, b: &i32| b.cmp(a)));
        assert!(is_sorted_by::<i32, _>(&[], ascending));
    }

    #[test]
    fn is_greater_counts_comparisons() {
        let mut stats = SortStats::default();
        let mut compare = infallible(|a: &i32, b: &i32| a.cmp(b));
        assert!(into_ok(is_greater(&mut compare, &2, &1, &mut stats)));
        assert!(!into_ok(is_greater(&mut compare, &1, &1, &mut stats)));
        assert!(!into_ok(is_greater(&mut compare, &0, &1, &mut stats)));
        assert_eq!(stats.comparisons, 3);
    }

    #[test]
    fn is_greater_forwards_comparator_errors() {
        let mut stats = SortStats::default();
        let mut compare = |_: &i32, _: &i32| -> Result<Ordering, &'static str> { Err("nope") };
        assert_eq!(is_greater(&mut compare, &1, &2, &mut stats), Err("nope"));
    }
}
