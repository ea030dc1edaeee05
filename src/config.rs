use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, Algorithm, OddEvenSort, SortStrategy};

/// Strategy selection made once by a host application, e.g. `{"algorithm": "bubble"}`.
///
/// Missing fields fall back to insertion sort, run sequentially.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub algorithm: Algorithm,
    /// Run transposition phases on the rayon pool. Only odd-even sort has a
    /// parallel form; the other algorithms ignore this flag.
    pub parallel: bool,
}

impl SortConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            parallel: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns a sorted copy of `items` using the configured algorithm, or
    /// `None` if no sequence was given.
    pub fn sort<T, F>(&self, items: Option<&[T]>, compare: F) -> Option<Vec<T>>
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        items.map(|items| self.sort_by(items, compare))
    }

    pub fn sort_by<T, F>(&self, items: &[T], compare: F) -> Vec<T>
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        match self.algorithm {
            Algorithm::OddEven if self.parallel => OddEvenSort.par_sort_by(items, compare),
            algorithm => algorithm.sort_by(items, compare),
        }
    }
}
