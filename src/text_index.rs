use crate::algorithm::{self, identity_permutation};
use crate::error::{IndexError, Result};
use crate::{Character, IndexBuilder, IndexStorage};

use std::cmp::Ordering;

/// A text together with a permutation of all of its suffix start positions.
///
/// The permutation starts out as the identity and is reordered into ascending suffix order
/// by an [`IndexBuilder`](crate::IndexBuilder). Only a successfully built index answers
/// binary search queries, every other state is rejected with [`IndexError::NotBuilt`].
///
/// A built index is not modified by queries, so it can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct TextIndex<C = u8, I = usize> {
    text: Option<Vec<C>>,
    permutation: Vec<I>,
    is_built: bool,
}

impl<C: Character, I: IndexStorage> TextIndex<C, I> {
    /// Creates an index without text. Every operation except loading text fails with
    /// [`IndexError::NotLoaded`].
    pub fn new() -> Self {
        Self {
            text: None,
            permutation: Vec::new(),
            is_built: false,
        }
    }

    pub fn from_text(text: Vec<C>) -> Result<Self> {
        let mut index = Self::new();
        index.set_text(text)?;
        Ok(index)
    }

    /// Replaces the text. The old permutation is discarded and the new one is the identity.
    pub fn set_text(&mut self, text: Vec<C>) -> Result<()> {
        let max = I::max_value().to_usize().unwrap_or(usize::MAX);
        let too_long = IndexError::TextTooLong {
            len: text.len(),
            max,
        };

        if text.len().saturating_sub(1) > max {
            return Err(too_long);
        }

        self.permutation = identity_permutation(text.len()).ok_or(too_long)?;
        self.text = Some(text);
        self.is_built = false;

        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.text.is_some()
    }

    pub fn text(&self) -> Result<&[C]> {
        self.text.as_deref().ok_or(IndexError::NotLoaded)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.text()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.text()?.is_empty())
    }

    /// The current permutation, which is only guaranteed to be in suffix order if [`Self::is_built`].
    pub fn permutation(&self) -> &[I] {
        &self.permutation
    }

    pub fn is_built(&self) -> bool {
        self.is_built
    }

    /// Lexicographically compares the suffixes starting at `first` and `second`.
    pub fn compare_suffixes(&self, first: usize, second: usize) -> Result<Ordering> {
        let text = self.text()?;
        check_range("position", first, text.len())?;
        check_range("position", second, text.len())?;

        Ok(algorithm::compare_suffixes(text, first, second))
    }

    /// Compares the suffix starting at `position` with `value`, looking at no more than
    /// `value.len()` characters. `Equal` means the suffix starts with `value`.
    pub fn compare_suffix_to_value(&self, position: usize, value: &[C]) -> Result<Ordering> {
        let text = self.text()?;
        check_range("position", position, text.len())?;

        Ok(algorithm::compare_suffix_to_value(text, position, value))
    }

    /// Swaps two slots of the permutation. The index is no longer considered built afterwards.
    pub fn swap(&mut self, first_slot: usize, second_slot: usize) -> Result<()> {
        self.text()?;
        check_range("slot", first_slot, self.permutation.len())?;
        check_range("slot", second_slot, self.permutation.len())?;

        self.permutation.swap(first_slot, second_slot);
        self.is_built = false;
        Ok(())
    }

    /// Marks the index as unusable for queries until it is built again.
    pub fn invalidate(&mut self) {
        self.is_built = false;
    }

    /// Checks that the permutation is in strictly ascending suffix order, the same way
    /// [`IndexBuilder::validate`] does with the default configuration.
    pub fn validate(&self) -> Result<()> {
        IndexBuilder::new().validate(self)
    }

    pub(crate) fn reset_permutation(&mut self) -> Result<()> {
        let len = self.len()?;
        self.permutation = identity_permutation(len).ok_or(IndexError::TextTooLong {
            len,
            max: I::max_value().to_usize().unwrap_or(usize::MAX),
        })?;
        self.is_built = false;
        Ok(())
    }

    // the only way to mutate the permutation without going through swap
    pub(crate) fn parts_mut(&mut self) -> Result<(&[C], &mut [I])> {
        let text = self.text.as_deref().ok_or(IndexError::NotLoaded)?;
        Ok((text, &mut self.permutation))
    }

    pub(crate) fn set_built(&mut self, is_built: bool) {
        self.is_built = is_built;
    }
}

impl<C: Character, I: IndexStorage> Default for TextIndex<C, I> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_range(what: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(IndexError::OutOfRange { what, index, len })
    }
}
