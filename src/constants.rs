/// Inputs shorter than this are sorted sequentially even when a parallel sort is requested.
pub(crate) const MIN_PARALLEL_LEN: usize = 1 << 10;

/// Minimum number of adjacent pairs a rayon task handles within one transposition phase.
pub(crate) const MIN_PAIRS_PER_TASK: usize = 1 << 8;
