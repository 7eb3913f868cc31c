use crate::{Character, IndexStorage};

use super::{SuffixSorter, compare_suffixes};

/// Sorts with the standard library sort and whole-suffix comparisons.
///
/// Slow on repetitive text, but simple enough to serve as the baseline the other sorters
/// are checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceSort;

impl SuffixSorter for ReferenceSort {
    fn sort_suffixes<C: Character, I: IndexStorage>(&mut self, text: &[C], permutation: &mut [I]) {
        permutation.sort_unstable_by(|&first, &second| {
            compare_suffixes(text, first.as_(), second.as_())
        });
    }
}
