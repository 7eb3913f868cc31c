use crate::{Character, IndexStorage};

use super::pivot::PivotSelector;
use super::progress::Progress;
use super::{SuffixSorter, char_at};

use std::cmp::Ordering;
use std::ops::Range;

/// Multikey (ternary) quicksort, which compares a single character offset at a time.
///
/// All suffixes in the middle part of a partition share their first `offset + 1` characters,
/// so they are only compared on the remaining characters afterwards. This avoids comparing
/// long common prefixes over and over again, which dominates the cost of whole-suffix
/// comparisons on natural language or repetitive text.
///
/// The pending intervals live on an explicit stack instead of the call stack, because the
/// equal partitions can nest as deep as the longest repeated substring of the text.
#[derive(Debug, Clone)]
pub struct MultikeyQuicksort {
    pivot_selector: PivotSelector,
    report_progress: bool,
}

impl MultikeyQuicksort {
    pub fn new(pivot_selector: PivotSelector, report_progress: bool) -> Self {
        Self {
            pivot_selector,
            report_progress,
        }
    }
}

struct PendingInterval {
    slots: Range<usize>,
    offset: usize,
}

impl SuffixSorter for MultikeyQuicksort {
    fn sort_suffixes<C: Character, I: IndexStorage>(&mut self, text: &[C], permutation: &mut [I]) {
        let mut progress = Progress::new(
            "Multikey quicksorting",
            permutation.len(),
            self.report_progress,
        );
        let mut num_finished = 0;

        let mut stack = vec![PendingInterval {
            slots: 0..permutation.len(),
            offset: 0,
        }];

        while let Some(PendingInterval { slots, offset }) = stack.pop() {
            if slots.len() <= 1 || offset >= text.len() {
                num_finished += slots.len();
                progress.update(num_finished);
                continue;
            }

            let (pivot_char, middle) =
                partition(text, permutation, slots.clone(), offset, &mut self.pivot_selector);

            // pushed in reverse, so that the smaller suffixes are finished first
            stack.push(PendingInterval {
                slots: middle.end..slots.end,
                offset,
            });

            // every suffix of the middle part is exhausted at this offset, so they all are the
            // same suffix. this can only be a single one, but it is not split any further anyway
            if pivot_char.is_some() {
                stack.push(PendingInterval {
                    slots: middle.clone(),
                    offset: offset + 1,
                });
            } else {
                num_finished += middle.len();
            }

            stack.push(PendingInterval {
                slots: slots.start..middle.start,
                offset,
            });
        }

        progress.finish();
    }
}

/// Three-way partition of `slots` by the character at `offset` of each suffix.
///
/// Returns the pivot character (`None` if the pivot suffix is exhausted at `offset`) and the
/// slots holding the suffixes with exactly that character. Suffixes with a smaller character
/// end up before, suffixes with a larger one after the returned range.
/// Expects a non-empty interval.
pub fn partition<C: Character, I: IndexStorage>(
    text: &[C],
    permutation: &mut [I],
    slots: Range<usize>,
    offset: usize,
    pivot_selector: &mut PivotSelector,
) -> (Option<C>, Range<usize>) {
    let pivot_index = pivot_selector.pivot_index(text, permutation, slots.start, slots.end);
    let pivot_char = char_at(text, permutation[pivot_index].as_(), offset);

    permutation.swap(slots.start, pivot_index);

    // [start, middle_start) < pivot, [middle_start, current) == pivot, [middle_end, end) > pivot
    let mut middle_start = slots.start;
    let mut middle_end = slots.end;
    let mut current = slots.start + 1;

    while current < middle_end {
        match char_at(text, permutation[current].as_(), offset).cmp(&pivot_char) {
            Ordering::Less => {
                permutation.swap(current, middle_start);
                middle_start += 1;
                current += 1;
            }
            Ordering::Equal => current += 1,
            Ordering::Greater => {
                middle_end -= 1;
                permutation.swap(current, middle_end);
            }
        }
    }

    log::trace!(
        "partitioned {slots:?} at offset {offset} into {}/{}/{}",
        middle_start - slots.start,
        middle_end - middle_start,
        slots.end - middle_end
    );

    (pivot_char, middle_start..middle_end)
}
