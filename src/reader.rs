//! Character-offset slicing of barcode text.

use core::ops::{Range, RangeInclusive};

use crate::{Error, block::Item};

/// Treatment of a present item that lies past the end of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// Fail with [`Error::Truncated`].
    Fail,
    /// Treat the item as absent.
    Absent,
}

/// A view over barcode text, addressed by character offset.
///
/// Offsets count characters rather than bytes, starting at 0. Accessors
/// return `None` instead of reading past the end of the text.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    data: &'a str,
    len: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            len: data.chars().count(),
        }
    }

    /// Number of characters in the text.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the character at an offset.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.get(offset..offset.checked_add(1)?)?.chars().next()
    }

    /// Get the characters in a half-open range of offsets.
    pub fn get(&self, range: Range<usize>) -> Option<&'a str> {
        if range.start > range.end {
            return None;
        }

        let start = self.byte_offset(range.start)?;
        let end = self.byte_offset(range.end)?;

        self.data.get(start..end)
    }

    /// Get the characters in a closed range of offsets.
    pub fn inclusive(&self, range: RangeInclusive<usize>) -> Option<&'a str> {
        self.get(*range.start()..range.end().checked_add(1)?)
    }

    /// Get the characters from an offset to the end of the text.
    pub fn tail(&self, offset: usize) -> Option<&'a str> {
        self.get(offset..self.len)
    }

    /// Get the text of an item in a block starting at offset `at`, if the
    /// item is present in a block of declared size `gate`.
    ///
    /// Fails if the item is present but the text ends before it.
    pub fn gated(&self, at: usize, gate: usize, item: &Item) -> Result<Option<&'a str>, Error> {
        self.gated_with(at, gate, item, Truncation::Fail)
    }

    /// Like [`Reader::gated`], choosing how to treat a present item that the
    /// text ends before.
    pub fn gated_with(
        &self,
        at: usize,
        gate: usize,
        item: &Item,
        truncation: Truncation,
    ) -> Result<Option<&'a str>, Error> {
        if !item.is_present(gate) {
            return Ok(None);
        }

        let start = at.checked_add(item.previous);
        let end = start.and_then(|s| s.checked_add(item.size));

        let text = match (start, end) {
            (Some(start), Some(end)) => self.get(start..end),
            _ => None,
        };

        match (text, truncation) {
            (Some(text), _) => Ok(Some(text)),
            (None, Truncation::Absent) => {
                tracing::debug!(item = item.number, "item past the end of the text, using default");
                Ok(None)
            }
            (None, Truncation::Fail) => Err(Error::Truncated {
                item: item.number,
                needed: end.unwrap_or(usize::MAX),
                found: self.len,
            }),
        }
    }

    fn byte_offset(&self, offset: usize) -> Option<usize> {
        if offset > self.len {
            return None;
        }

        // Equal lengths mean every character is a single byte.
        if self.data.len() == self.len {
            return Some(offset);
        }

        Some(
            self.data
                .char_indices()
                .nth(offset)
                .map_or(self.data.len(), |(i, _)| i),
        )
    }
}
