use crate::{Character, IndexStorage};

use super::pivot::PivotSelector;
use super::progress::Progress;
use super::{SuffixSorter, compare_suffixes, excerpt};

use std::cmp::Ordering;

/// Classic quicksort over whole-suffix comparisons with a Hoare partition.
///
/// There is no guaranteed balanced split. To keep the stack depth logarithmic even with an
/// adversarial pivot, only the smaller side of each partition is sorted recursively and the
/// larger side is handled by the loop.
#[derive(Debug, Clone)]
pub struct Quicksort {
    pivot_selector: PivotSelector,
    report_progress: bool,
}

impl Quicksort {
    pub fn new(pivot_selector: PivotSelector, report_progress: bool) -> Self {
        Self {
            pivot_selector,
            report_progress,
        }
    }
}

impl SuffixSorter for Quicksort {
    fn sort_suffixes<C: Character, I: IndexStorage>(&mut self, text: &[C], permutation: &mut [I]) {
        let mut progress = Progress::new("Quicksorting", permutation.len(), self.report_progress);
        log::trace!("quicksort with {} pivot", self.pivot_selector.strategy());

        quicksort(
            text,
            permutation,
            0,
            permutation.len(),
            &mut self.pivot_selector,
            &mut progress,
        );

        progress.finish();
    }
}

// end is exclusive
fn quicksort<C: Character, I: IndexStorage>(
    text: &[C],
    permutation: &mut [I],
    mut start: usize,
    mut end: usize,
    pivot_selector: &mut PivotSelector,
    progress: &mut Progress,
) {
    while end - start > 1 {
        progress.update(start);

        let pivot_slot = partition(text, permutation, start, end, pivot_selector);

        if pivot_slot - start < end - (pivot_slot + 1) {
            quicksort(text, permutation, start, pivot_slot, pivot_selector, progress);
            start = pivot_slot + 1;
        } else {
            quicksort(text, permutation, pivot_slot + 1, end, pivot_selector, progress);
            end = pivot_slot;
        }
    }
}

/// Hoare partition of `[start, end)` around a pivot chosen by `pivot_selector`.
///
/// Returns the final slot of the pivot. Afterwards, every suffix in `[start, pivot_slot)` is
/// smaller than the pivot suffix and every suffix in `(pivot_slot, end)` is larger.
/// Expects an interval of at least two elements.
pub fn partition<C: Character, I: IndexStorage>(
    text: &[C],
    permutation: &mut [I],
    start: usize,
    end: usize,
    pivot_selector: &mut PivotSelector,
) -> usize {
    let pivot_index = pivot_selector.pivot_index(text, permutation, start, end);
    permutation.swap(start, pivot_index);
    let pivot_suffix = permutation[start].as_();

    let compare_to_pivot = |slot_value: I| compare_suffixes(text, slot_value.as_(), pivot_suffix);

    // the pointers move towards each other, lo never passes hi + 1
    let mut lo = start + 1;
    let mut hi = end - 1;

    loop {
        while lo <= hi && compare_to_pivot(permutation[lo]) == Ordering::Less {
            lo += 1;
        }

        while lo <= hi && compare_to_pivot(permutation[hi]) == Ordering::Greater {
            hi -= 1;
        }

        if lo >= hi {
            break;
        }

        // permutation[lo] is larger and permutation[hi] is smaller than the pivot
        permutation.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }

    // hi is the last slot holding a suffix that is not larger than the pivot (or the pivot itself)
    permutation.swap(start, hi);

    log::trace!(
        "partitioned [{start}, {end}) around '{}' at slot {hi}",
        excerpt(text, pivot_suffix)
    );

    hi
}
