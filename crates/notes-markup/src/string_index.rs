// notes-client/notes-markup
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::ops::Range;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Utf16Index is not at a char boundary.")]
    NotACharBoundary,
    #[error("Utf16Index is out of bounds.")]
    OutOfBounds,
}

/// An offset into a string, counted in UTF-16 code units. This is how the remote API
/// addresses sub-spans of notification text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Utf16Index(usize);

impl Utf16Index {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> usize {
        self.0
    }

    /// The number of UTF-16 code units in `string`.
    pub fn end_of(string: &str) -> Self {
        Self(string.encode_utf16().count())
    }

    pub fn checked_add_signed(&self, rhs: isize) -> Option<Self> {
        self.0.checked_add_signed(rhs).map(Self)
    }

    pub fn to_byte_index(&self, string: &str) -> Result<usize, IndexError> {
        let mut utf16_idx = self.0;

        for (byte_idx, c) in string.char_indices() {
            if utf16_idx == 0 {
                return Ok(byte_idx);
            }

            utf16_idx = utf16_idx
                .checked_sub(c.len_utf16())
                .ok_or(IndexError::NotACharBoundary)?;
        }

        (utf16_idx == 0)
            .then_some(string.len())
            .ok_or(IndexError::OutOfBounds)
    }
}

impl From<usize> for Utf16Index {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl AsRef<usize> for Utf16Index {
    fn as_ref(&self) -> &usize {
        &self.0
    }
}

impl Display for Utf16Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait Utf16RangeExt {
    fn to_byte_range(&self, string: &str) -> Result<Range<usize>, IndexError>;
}

impl Utf16RangeExt for Range<Utf16Index> {
    fn to_byte_range(&self, string: &str) -> Result<Range<usize>, IndexError> {
        if self.start > self.end {
            return Err(IndexError::OutOfBounds);
        }
        Ok(Range {
            start: self.start.to_byte_index(string)?,
            end: self.end.to_byte_index(string)?,
        })
    }
}
