use crate::algorithm::compare_suffix_to_value;
use crate::error::{IndexError, Result};
use crate::{Character, IndexStorage, TextIndex};

use std::cmp::Ordering;
use std::iter::FusedIterator;

const EMPTY_QUERY: IndexError = IndexError::InvalidQuery {
    reason: "the search value must not be empty",
};

impl<C: Character, I: IndexStorage> TextIndex<C, I> {
    /// Finds every occurrence of `value` by comparing it at every text position.
    ///
    /// Does not need a built index. The positions are produced in ascending order.
    pub fn linear_search<'a>(&'a self, value: &'a [C]) -> Result<LinearMatches<'a, C>> {
        let text = self.text()?;

        if value.is_empty() {
            return Err(EMPTY_QUERY);
        }

        Ok(LinearMatches {
            text,
            value,
            next_start: 0,
        })
    }

    /// Returns the permutation slot of the first suffix that starts with `value`, if any.
    pub fn binary_search_first(&self, value: &[C]) -> Result<Option<usize>> {
        let (text, permutation) = self.built_parts()?;

        if value.is_empty() {
            return Err(EMPTY_QUERY);
        }

        Ok(binary_search_first(text, permutation, value))
    }

    /// Finds every occurrence of `value` with a binary search over the sorted suffixes.
    ///
    /// The positions are produced in suffix order, which groups the matches but does not sort
    /// them by text position. Use [`Self::find_positions`] for that.
    pub fn binary_search<'a>(&'a self, value: &'a [C]) -> Result<BinaryMatches<'a, C, I>> {
        let first_slot = self.binary_search_first(value)?;
        let (text, permutation) = self.built_parts()?;

        Ok(BinaryMatches {
            text,
            permutation,
            value,
            next_slot: first_slot.unwrap_or(permutation.len()),
        })
    }

    /// All text positions where `value` occurs, in ascending order.
    pub fn find_positions(&self, value: &[C]) -> Result<Vec<usize>> {
        let mut positions: Vec<_> = self.binary_search(value)?.collect();
        positions.sort_unstable();
        Ok(positions)
    }

    fn built_parts(&self) -> Result<(&[C], &[I])> {
        let text = self.text()?;

        if !self.is_built() {
            return Err(IndexError::NotBuilt);
        }

        Ok((text, self.permutation()))
    }
}

/// Lower bound search for the first suffix that is not smaller than `value`, which is only
/// accepted if it actually starts with `value`.
pub fn binary_search_first<C: Character, I: IndexStorage>(
    text: &[C],
    permutation: &[I],
    value: &[C],
) -> Option<usize> {
    if permutation.is_empty() {
        return None;
    }

    let mut lo = 0;
    let mut hi = permutation.len() - 1;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        if compare_suffix_to_value(text, permutation[mid].as_(), value) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    (compare_suffix_to_value(text, permutation[lo].as_(), value) == Ordering::Equal).then_some(lo)
}

/// Iterator over the positions found by [`TextIndex::linear_search`].
#[derive(Debug, Clone)]
pub struct LinearMatches<'a, C> {
    text: &'a [C],
    value: &'a [C],
    next_start: usize,
}

impl<C: Character> Iterator for LinearMatches<'_, C> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next_start + self.value.len() <= self.text.len() {
            let start = self.next_start;
            self.next_start += 1;

            if self.text[start..start + self.value.len()] == *self.value {
                return Some(start);
            }
        }

        None
    }
}

impl<C: Character> FusedIterator for LinearMatches<'_, C> {}

/// Iterator over the positions found by [`TextIndex::binary_search`].
///
/// The matches are a contiguous run of slots in the permutation, so the iterator walks
/// forward from the first match until a suffix no longer starts with the value.
#[derive(Debug, Clone)]
pub struct BinaryMatches<'a, C, I> {
    text: &'a [C],
    permutation: &'a [I],
    value: &'a [C],
    next_slot: usize,
}

impl<C: Character, I: IndexStorage> Iterator for BinaryMatches<'_, C, I> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let position = self.permutation.get(self.next_slot)?.as_();

        if compare_suffix_to_value(self.text, position, self.value) != Ordering::Equal {
            self.next_slot = self.permutation.len();
            return None;
        }

        self.next_slot += 1;
        Some(position)
    }
}

impl<C: Character, I: IndexStorage> FusedIterator for BinaryMatches<'_, C, I> {}
