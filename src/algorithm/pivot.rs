use crate::error::IndexError;
use crate::{Character, IndexStorage};

use super::compare_suffixes;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const SMALL_INTERVAL: usize = 10;
const MEDIUM_INTERVAL: usize = 100;

/// The configurable choice of pivot selection, see [`PivotSelector`] for the behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PivotStrategy {
    First,
    #[default]
    Middle,
    Random,
    MedianOfThree,
    Adaptive,
}

impl PivotStrategy {
    pub const ALL: [PivotStrategy; 5] = [
        Self::First,
        Self::Middle,
        Self::Random,
        Self::MedianOfThree,
        Self::Adaptive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Middle => "middle",
            Self::Random => "random",
            Self::MedianOfThree => "median",
            Self::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotStrategy {
    type Err = IndexError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "first" => Ok(Self::First),
            "middle" => Ok(Self::Middle),
            "random" => Ok(Self::Random),
            "median" | "median-of-three" => Ok(Self::MedianOfThree),
            "adaptive" => Ok(Self::Adaptive),
            _ => Err(IndexError::UnknownOption {
                kind: "pivot selector",
                name: name.to_owned(),
            }),
        }
    }
}

/// Picks the pivot slot for an interval `[start, end)` of the permutation.
///
/// All variants are deterministic, except for `Random`, which owns its generator so that
/// a seeded selector reproduces the same pivots (and thereby the same intermediate states).
#[derive(Debug, Clone)]
pub enum PivotSelector {
    /// always `start`
    First,
    /// the midpoint of the interval
    Middle,
    /// a uniformly random slot of the interval
    Random(ChaCha8Rng),
    /// the median suffix of the first, middle and last slot
    MedianOfThree,
    /// `First` for small intervals, `MedianOfThree` for medium ones and a ninther for large ones
    Adaptive,
}

impl PivotSelector {
    pub fn new(strategy: PivotStrategy, seed: Option<u64>) -> Self {
        match strategy {
            PivotStrategy::First => Self::First,
            PivotStrategy::Middle => Self::Middle,
            PivotStrategy::Random => Self::Random(match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_os_rng(),
            }),
            PivotStrategy::MedianOfThree => Self::MedianOfThree,
            PivotStrategy::Adaptive => Self::Adaptive,
        }
    }

    pub fn strategy(&self) -> PivotStrategy {
        match self {
            Self::First => PivotStrategy::First,
            Self::Middle => PivotStrategy::Middle,
            Self::Random(_) => PivotStrategy::Random,
            Self::MedianOfThree => PivotStrategy::MedianOfThree,
            Self::Adaptive => PivotStrategy::Adaptive,
        }
    }

    // expects a non-empty interval
    pub fn pivot_index<C: Character, I: IndexStorage>(
        &mut self,
        text: &[C],
        permutation: &[I],
        start: usize,
        end: usize,
    ) -> usize {
        debug_assert!(start < end && end <= permutation.len());

        match self {
            Self::First => start,
            Self::Middle => start + (end - start) / 2,
            Self::Random(rng) => rng.random_range(start..end),
            Self::MedianOfThree => median_of_interval(text, permutation, start, end),
            Self::Adaptive => adaptive_pivot_index(text, permutation, start, end),
        }
    }
}

fn median_of_interval<C: Character, I: IndexStorage>(
    text: &[C],
    permutation: &[I],
    start: usize,
    end: usize,
) -> usize {
    let mid = start + (end - 1 - start) / 2;
    median_of_three_index(text, permutation, start, mid, end - 1)
}

fn adaptive_pivot_index<C: Character, I: IndexStorage>(
    text: &[C],
    permutation: &[I],
    start: usize,
    end: usize,
) -> usize {
    let size = end - start;

    if size < SMALL_INTERVAL {
        return start;
    }

    if size < MEDIUM_INTERVAL {
        return median_of_interval(text, permutation, start, end);
    }

    // ninther: median of the medians of three samples spread over the interval
    let lo = start;
    let hi = end - 1;
    let mid = lo + (hi - lo) / 2;
    let d = size / 8;

    let first = median_of_three_index(text, permutation, lo, lo + d, lo + 2 * d);
    let second = median_of_three_index(text, permutation, mid - d, mid, mid + d);
    let third = median_of_three_index(text, permutation, hi - 2 * d, hi - d, hi);

    median_of_three_index(text, permutation, first, second, third)
}

/// Returns whichever of the slots `i`, `j`, `k` holds the median of their three suffixes.
///
/// Of the three booleans `[i] <= [j]`, `[j] <= [k]` and `[k] <= [i]`, at least two are equal,
/// because three totally ordered values can only be arranged in a cyclic order. The pair of
/// equal booleans identifies an ascending or descending run, and its middle slot is the median.
pub fn median_of_three_index<C: Character, I: IndexStorage>(
    text: &[C],
    permutation: &[I],
    i: usize,
    j: usize,
    k: usize,
) -> usize {
    let is_less_or_equal = |a: usize, b: usize| {
        compare_suffixes(text, permutation[a].as_(), permutation[b].as_()) != Ordering::Greater
    };

    let i_le_j = is_less_or_equal(i, j);
    let j_le_k = is_less_or_equal(j, k);
    let k_le_i = is_less_or_equal(k, i);

    if i_le_j == j_le_k {
        // [i], [j], [k] is monotone
        j
    } else if j_le_k == k_le_i {
        // [j], [k], [i] is monotone
        k
    } else {
        // [k], [i], [j] is monotone
        i
    }
}
