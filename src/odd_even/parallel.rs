use std::{
    cmp::Ordering,
    sync::{Mutex, PoisonError},
};

use portable_atomic::AtomicBool;
use rayon::prelude::*;

use crate::{constants::MIN_PAIRS_PER_TASK, stats::AtomicSortStats};

/// Same rounds as [`super::odd_even_sort`], with every phase split across the rayon pool.
pub(super) fn par_odd_even_sort<T, F, E>(
    v: &mut [T],
    compare: &F,
    stats: &AtomicSortStats,
) -> Result<(), E>
where
    T: Send,
    F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
    E: Send,
{
    for _ in 0..v.len() {
        let mut swapped = par_transposition_phase(v, 0, compare, stats)?;
        swapped |= par_transposition_phase(v, 1, compare, stats)?;
        if !swapped {
            break;
        }
    }
    Ok(())
}

/// The first comparator error seen by any task of a phase.
struct FirstError<E> {
    failed: AtomicBool,
    error: Mutex<Option<E>>,
}

impl<E> FirstError<E> {
    fn new() -> Self {
        Self {
            failed: AtomicBool::new(false),
            error: Mutex::new(None),
        }
    }

    fn is_set(&self) -> bool {
        self.failed.load(portable_atomic::Ordering::Acquire)
    }

    /// Keeps `error` only if no other task failed first.
    fn record(&self, error: E) {
        let won = self
            .failed
            .compare_exchange(
                false,
                true,
                portable_atomic::Ordering::AcqRel,
                portable_atomic::Ordering::Acquire,
            )
            .is_ok();
        if won {
            *self.error.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
        }
    }

    fn into_inner(self) -> Option<E> {
        self.error
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Pairs of one phase never overlap, so each task owns its pairs exclusively.
/// Once a comparison fails no task starts another one; the phase returns the
/// recorded error and no further phase runs.
fn par_transposition_phase<T, F, E>(
    v: &mut [T],
    offset: usize,
    compare: &F,
    stats: &AtomicSortStats,
) -> Result<bool, E>
where
    T: Send,
    F: Fn(&T, &T) -> Result<Ordering, E> + Sync,
    E: Send,
{
    stats.add_pass();
    let offset = offset.min(v.len());
    let first_error = FirstError::new();
    let swapped = v[offset..]
        .par_chunks_exact_mut(2)
        .with_min_len(MIN_PAIRS_PER_TASK)
        .map(|pair| {
            if first_error.is_set() {
                return false;
            }
            stats.add_comparison();
            match compare(&pair[0], &pair[1]) {
                Ok(Ordering::Greater) => {
                    pair.swap(0, 1);
                    stats.add_swap();
                    true
                }
                Ok(_) => false,
                Err(error) => {
                    first_error.record(error);
                    false
                }
            }
        })
        .reduce(|| false, |a, b| a || b);
    match first_error.into_inner() {
        Some(error) => Err(error),
        None => Ok(swapped),
    }
}
