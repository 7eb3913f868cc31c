use crate::{Character, IndexStorage};

use super::progress::Progress;
use super::{SuffixSorter, compare_suffixes};

use std::cmp::Ordering;

/// Insertion sort that finds each insertion slot by binary search over the sorted prefix.
///
/// Needs O(n log n) comparisons, but O(n²) element moves in the worst case.
#[derive(Debug, Clone, Default)]
pub struct InsertionSort {
    report_progress: bool,
}

impl InsertionSort {
    pub fn new(report_progress: bool) -> Self {
        Self { report_progress }
    }
}

impl SuffixSorter for InsertionSort {
    fn sort_suffixes<C: Character, I: IndexStorage>(&mut self, text: &[C], permutation: &mut [I]) {
        let mut progress = Progress::new("Insertion sorting", permutation.len(), self.report_progress);

        for sorted_len in 1..permutation.len() {
            progress.update(sorted_len);

            let suffix = permutation[sorted_len].as_();
            let insertion_slot = permutation[..sorted_len].partition_point(|&sorted| {
                compare_suffixes(text, sorted.as_(), suffix) == Ordering::Less
            });

            // shift the larger part of the sorted prefix one slot to the right
            permutation[insertion_slot..=sorted_len].rotate_right(1);
        }

        progress.finish();
    }
}
