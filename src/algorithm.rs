use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::ParseAlgorithmError, stats::SortStats, BubbleSort, InsertionSort, OddEvenSort,
    SortStrategy,
};

/// The shipped strategies, for picking one from configuration rather than in code.
///
/// Names are matched the same way by [`FromStr`] and by serde.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Algorithm {
    Bubble,
    #[default]
    Insertion,
    OddEven,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::OddEven];
}

impl SortStrategy for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => BubbleSort.name(),
            Algorithm::Insertion => InsertionSort.name(),
            Algorithm::OddEven => OddEvenSort.name(),
        }
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
        match self {
            Algorithm::Bubble => BubbleSort.try_sort_in_place(v, compare, stats),
            Algorithm::Insertion => InsertionSort.try_sort_in_place(v, compare, stats),
            Algorithm::OddEven => OddEvenSort.try_sort_in_place(v, compare, stats),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Algorithm> for &'static str {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name()
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ParseAlgorithmError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "odd-even" | "odd_even" | "oddeven" | "even-odd" => Ok(Algorithm::OddEven),
            _ => Err(ParseAlgorithmError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Algorithm, SortStrategy};

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm.name()));
            assert_eq!(serde_json::from_str::<Algorithm>(&json).unwrap(), algorithm);
        }
    }

    #[test]
    fn parsing_is_lenient_about_case_and_spelling() {
        assert_eq!(" Bubble ".parse::<Algorithm>(), Ok(Algorithm::Bubble));
        assert_eq!("INSERTION".parse::<Algorithm>(), Ok(Algorithm::Insertion));
        assert_eq!("odd_even".parse::<Algorithm>(), Ok(Algorithm::OddEven));
        assert_eq!("Even-Odd".parse::<Algorithm>(), Ok(Algorithm::OddEven));
        for name in ["odd-even", "odd_even", "oddeven", "OddEven", "Even-Odd"] {
            assert_eq!(name.parse::<Algorithm>(), Ok(Algorithm::OddEven));
            let json = format!("\"{name}\"");
            assert_eq!(serde_json::from_str::<Algorithm>(&json).unwrap(), Algorithm::OddEven);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "quick".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.name(), "quick");
        assert_eq!(
            err.to_string(),
            "unknown sorting algorithm `quick`, expected one of: bubble, insertion, odd-even"
        );
        let err = serde_json::from_str::<Algorithm>("\"quick\"").unwrap_err();
        assert!(err.to_string().contains("unknown sorting algorithm `quick`"), "{err}");
    }

    #[test]
    fn dispatch_matches_concrete_strategy() {
        let input = [3, 9, 1, 4, 1, 5, 9, 2, 6];
        assert_eq!(
            Algorithm::Bubble.sort_with_stats(&input, i32::cmp),
            crate::BubbleSort.sort_with_stats(&input, i32::cmp)
        );
        assert_eq!(
            Algorithm::Insertion.sort_with_stats(&input, i32::cmp),
            crate::InsertionSort.sort_with_stats(&input, i32::cmp)
        );
        assert_eq!(
            Algorithm::OddEven.sort_with_stats(&input, i32::cmp),
            crate::OddEvenSort.sort_with_stats(&input, i32::cmp)
        );
    }
}
