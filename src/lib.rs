//! Suffix array construction with interchangeable sorting strategies, and substring search
//! on top of it.
//!
//! A [`TextIndex`] owns a text and a permutation of all suffix start positions. An
//! [`IndexBuilder`] sorts that permutation into suffix order with one of the
//! [`SortStrategy`] variants, after which every occurrence of a substring can be found by
//! binary search.
//!
//! ```
//! use suffix_search::{IndexBuilder, PivotStrategy, SortStrategy, TextIndex};
//!
//! let mut index = TextIndex::<u8>::from_text(b"ABRACADABRA".to_vec()).unwrap();
//!
//! IndexBuilder::new()
//!     .with_strategy(SortStrategy::Quicksort)
//!     .with_pivot(PivotStrategy::MedianOfThree)
//!     .build(&mut index)
//!     .unwrap();
//!
//! assert_eq!(index.find_positions(b"AB").unwrap(), [0, 7]);
//! assert_eq!(index.binary_search(b"ZZZ").unwrap().count(), 0);
//! ```

mod algorithm;
mod error;
mod search;
mod text_index;

use std::fmt;
use std::str::FromStr;

use num_traits::{AsPrimitive, PrimInt};

use algorithm::SuffixSorter;
use algorithm::insertion::InsertionSort;
use algorithm::multikey::MultikeyQuicksort;
use algorithm::pivot::PivotSelector;
use algorithm::quicksort::Quicksort;
use algorithm::reference::ReferenceSort;

pub use algorithm::pivot::PivotStrategy;
pub use algorithm::util::random_text;
pub use error::{IndexError, Result};
pub use search::{BinaryMatches, LinearMatches};
pub use text_index::TextIndex;

pub trait Character: Sized + Copy + Ord {
    fn rank(&self) -> usize;
}

impl<P: PrimInt> Character for P {
    fn rank(&self) -> usize {
        self.to_usize().unwrap_or(usize::MAX)
    }
}

/// The integer type the permutation is stored as. Smaller types save memory on short texts.
pub trait IndexStorage: PrimInt + AsPrimitive<usize> {}

impl IndexStorage for u8 {}
impl IndexStorage for u16 {}
impl IndexStorage for u32 {}
impl IndexStorage for u64 {}
impl IndexStorage for usize {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortStrategy {
    /// binary insertion sort, only sensible for small texts
    Insertion,
    /// quicksort with whole-suffix comparisons
    Quicksort,
    /// multikey quicksort, which compares one character offset at a time
    #[default]
    Multikey,
    /// the standard library sort, used as a trusted baseline
    Reference,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 4] = [
        Self::Insertion,
        Self::Quicksort,
        Self::Multikey,
        Self::Reference,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Quicksort => "quicksort",
            Self::Multikey => "multikey",
            Self::Reference => "reference",
        }
    }

    /// Whether the pivot selection has any effect on this strategy.
    pub fn uses_pivot(&self) -> bool {
        matches!(self, Self::Quicksort | Self::Multikey)
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortStrategy {
    type Err = IndexError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name {
            "insertion" => Ok(Self::Insertion),
            "quicksort" => Ok(Self::Quicksort),
            "multikey" => Ok(Self::Multikey),
            "reference" | "builtin" => Ok(Self::Reference),
            _ => Err(IndexError::UnknownOption {
                kind: "sorting algorithm",
                name: name.to_owned(),
            }),
        }
    }
}

/// Sorts the permutation of a [`TextIndex`] into suffix order.
///
/// A build always starts from the identity permutation and runs in one pass. If the pass
/// does not finish (or validation fails), the index stays unbuilt and rejects queries.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    strategy: SortStrategy,
    pivot: PivotStrategy,
    seed: Option<u64>,
    report_progress: bool,
    validate_after_sort: bool,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self {
            strategy: SortStrategy::default(),
            pivot: PivotStrategy::default(),
            seed: None,
            report_progress: false,
            validate_after_sort: true,
        }
    }

    pub fn with_strategy(&mut self, strategy: SortStrategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    /// Ignored by the insertion and reference strategies.
    pub fn with_pivot(&mut self, pivot: PivotStrategy) -> &mut Self {
        self.pivot = pivot;
        self
    }

    /// Seeds the random pivot selector. Without a seed, it is seeded from the operating system.
    pub fn with_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Logs the progress of sorting and validation on the info level.
    pub fn with_progress(&mut self, report_progress: bool) -> &mut Self {
        self.report_progress = report_progress;
        self
    }

    /// Whether every sort is followed by [`Self::validate`] (on by default).
    pub fn with_validation(&mut self, validate_after_sort: bool) -> &mut Self {
        self.validate_after_sort = validate_after_sort;
        self
    }

    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    pub fn pivot(&self) -> PivotStrategy {
        self.pivot
    }

    /// Resets the permutation to the identity and sorts it.
    pub fn build<C: Character, I: IndexStorage>(&self, index: &mut TextIndex<C, I>) -> Result<()> {
        self.initialize(index)?;
        self.sort(index)
    }

    /// Resets the permutation to the identity. The index is unbuilt afterwards.
    pub fn initialize<C: Character, I: IndexStorage>(
        &self,
        index: &mut TextIndex<C, I>,
    ) -> Result<()> {
        index.reset_permutation()
    }

    /// Sorts the current permutation in place and marks the index as built.
    ///
    /// Sorting an already sorted permutation leaves it unchanged.
    pub fn sort<C: Character, I: IndexStorage>(&self, index: &mut TextIndex<C, I>) -> Result<()> {
        index.invalidate();

        let (text, permutation) = index.parts_mut()?;

        log::debug!(
            "sorting {} suffixes with {} (pivot: {})",
            text.len(),
            self.strategy,
            self.pivot
        );

        match self.strategy {
            SortStrategy::Insertion => {
                InsertionSort::new(self.report_progress).sort_suffixes(text, permutation)
            }
            SortStrategy::Quicksort => {
                Quicksort::new(self.pivot_selector(), self.report_progress)
                    .sort_suffixes(text, permutation)
            }
            SortStrategy::Multikey => {
                MultikeyQuicksort::new(self.pivot_selector(), self.report_progress)
                    .sort_suffixes(text, permutation)
            }
            SortStrategy::Reference => ReferenceSort.sort_suffixes(text, permutation),
        }

        if self.validate_after_sort {
            self.validate(index)?;
        }

        index.set_built(true);
        log::debug!("finished sorting with {}", self.strategy);

        Ok(())
    }

    /// Checks that the permutation is a permutation in strictly ascending suffix order.
    ///
    /// This is a diagnostic only, a broken order is reported but never repaired.
    pub fn validate<C: Character, I: IndexStorage>(&self, index: &TextIndex<C, I>) -> Result<()> {
        let result = algorithm::validate(index.text()?, index.permutation(), self.report_progress);

        if let Err(error) = &result {
            log::error!("validation after {} failed: {error}", self.strategy);
        }

        result
    }

    fn pivot_selector(&self) -> PivotSelector {
        PivotSelector::new(self.pivot, self.seed)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
