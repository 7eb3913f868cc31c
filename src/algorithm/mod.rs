
pub mod insertion;
pub mod multikey;
pub mod pivot;
pub mod progress;
pub mod quicksort;
pub mod reference;
pub mod util;

use crate::error::{IndexError, Result};
use crate::{Character, IndexStorage};

use bitvec::prelude::*;
use num_traits::NumCast;

use std::cmp::{self, Ordering};

use progress::Progress;

const EXCERPT_LEN: usize = 10;

/// Reorders a permutation of text positions into ascending suffix order, in place.
///
/// Implementors may assume that `permutation` holds distinct positions of `text`.
/// The starting order is irrelevant for the result, because suffixes of one text form
/// a strict total order.
pub trait SuffixSorter {
    fn sort_suffixes<C: Character, I: IndexStorage>(&mut self, text: &[C], permutation: &mut [I]);
}

// shorter suffixes are smaller when one is a prefix of the other, which is exactly how slices compare
#[inline]
pub fn compare_suffixes<C: Character>(text: &[C], first: usize, second: usize) -> Ordering {
    if first == second {
        return Ordering::Equal;
    }

    text[first..].cmp(&text[second..])
}

// a suffix that runs out before the whole value is consumed counts as smaller
#[inline]
pub fn compare_suffix_to_value<C: Character>(text: &[C], position: usize, value: &[C]) -> Ordering {
    let suffix = &text[position.min(text.len())..];
    let shared_len = cmp::min(suffix.len(), value.len());

    match suffix[..shared_len].cmp(&value[..shared_len]) {
        Ordering::Equal if suffix.len() < value.len() => Ordering::Less,
        Ordering::Equal => Ordering::Equal,
        unequal => unequal,
    }
}

// None sorts before every character and stands for "suffix already exhausted"
#[inline]
pub fn char_at<C: Character>(text: &[C], position: usize, offset: usize) -> Option<C> {
    text.get(position + offset).copied()
}

pub fn identity_permutation<I: IndexStorage>(len: usize) -> Option<Vec<I>> {
    (0..len).map(<I as NumCast>::from).collect()
}

pub fn validate<C: Character, I: IndexStorage>(
    text: &[C],
    permutation: &[I],
    report_progress: bool,
) -> Result<()> {
    let mut seen = bitvec![0; text.len()];

    for (slot, position) in permutation.iter().map(|p| p.as_()).enumerate() {
        if position >= text.len() || seen[position] {
            return Err(IndexError::NotAPermutation { slot, position });
        }
        seen.set(position, true);
    }

    // every slot holds a distinct position in range, so a short permutation misses some position
    if permutation.len() != text.len() {
        let position = seen.first_zero().unwrap_or(text.len());
        return Err(IndexError::NotAPermutation {
            slot: permutation.len(),
            position,
        });
    }

    let mut progress = Progress::new("Checking index", permutation.len(), report_progress);

    for (slot, pair) in permutation.windows(2).enumerate() {
        progress.update(slot);

        let (left, right) = (pair[0].as_(), pair[1].as_());

        if compare_suffixes(text, left, right) != Ordering::Less {
            return Err(IndexError::OrderingViolation {
                slot,
                left,
                left_excerpt: excerpt(text, left),
                right,
                right_excerpt: excerpt(text, right),
            });
        }
    }

    progress.finish();

    Ok(())
}

pub fn excerpt<C: Character>(text: &[C], position: usize) -> String {
    let end = cmp::min(position + EXCERPT_LEN, text.len());

    text[position.min(end)..end]
        .iter()
        .map(|c| {
            u32::try_from(c.rank())
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}
