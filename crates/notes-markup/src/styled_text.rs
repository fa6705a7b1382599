// notes-client/notes-markup
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Range;

use crate::{IndexError, TextAttributes, Utf16Index, Utf16RangeExt};

/// A set of attributes applied to a byte range of a `StyledText`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub attributes: TextAttributes,
}

/// A maximal stretch of text that shares the same effective attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
    pub attributes: TextAttributes,
}

/// Text with layered attribute spans.
///
/// Spans are kept in the order they were added. When spans overlap, the attributes of the
/// span added last win for every attribute it sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    text: String,
    spans: Vec<StyleSpan>,
}

impl StyledText {
    pub fn new(text: impl Into<String>, attributes: TextAttributes) -> Self {
        let text = text.into();
        let spans = if text.is_empty() || attributes.is_empty() {
            vec![]
        } else {
            vec![StyleSpan {
                range: 0..text.len(),
                attributes,
            }]
        };
        Self { text, spans }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextAttributes::default())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn utf16_len(&self) -> usize {
        Utf16Index::end_of(&self.text).value()
    }

    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Adds `attributes` on top of the given UTF-16 range.
    pub fn add_attributes(
        &mut self,
        range: Range<Utf16Index>,
        attributes: TextAttributes,
    ) -> Result<(), IndexError> {
        let range = range.to_byte_range(&self.text)?;
        self.add_attributes_in_byte_range(range, attributes)
    }

    /// Adds `attributes` on top of the given byte range.
    pub fn add_attributes_in_byte_range(
        &mut self,
        range: Range<usize>,
        attributes: TextAttributes,
    ) -> Result<(), IndexError> {
        if range.start > range.end || range.end > self.text.len() {
            return Err(IndexError::OutOfBounds);
        }
        if !self.text.is_char_boundary(range.start) || !self.text.is_char_boundary(range.end) {
            return Err(IndexError::NotACharBoundary);
        }
        if range.is_empty() || attributes.is_empty() {
            return Ok(());
        }

        self.spans.push(StyleSpan { range, attributes });
        Ok(())
    }

    /// Inserts `string` at the given UTF-16 offset. Spans that straddle the insertion point
    /// are split around the inserted text. The inserted text only carries `attributes`.
    /// Returns the byte range of the inserted text.
    pub fn insert(
        &mut self,
        at: Utf16Index,
        string: &str,
        attributes: TextAttributes,
    ) -> Result<Range<usize>, IndexError> {
        let idx = at.to_byte_index(&self.text)?;
        let len = string.len();

        self.text.insert_str(idx, string);

        let mut spans = Vec::with_capacity(self.spans.len() + 2);
        for span in self.spans.drain(..) {
            let Range { start, end } = span.range;

            if start >= idx {
                spans.push(StyleSpan {
                    range: start + len..end + len,
                    attributes: span.attributes,
                });
            } else if end > idx {
                spans.push(StyleSpan {
                    range: start..idx,
                    attributes: span.attributes.clone(),
                });
                spans.push(StyleSpan {
                    range: idx + len..end + len,
                    attributes: span.attributes,
                });
            } else {
                spans.push(span);
            }
        }
        self.spans = spans;

        if len > 0 && !attributes.is_empty() {
            self.spans.push(StyleSpan {
                range: idx..idx + len,
                attributes,
            });
        }

        Ok(idx..idx + len)
    }

    /// Flattens the layered spans into consecutive runs covering the whole text.
    pub fn runs(&self) -> Vec<StyledRun<'_>> {
        if self.text.is_empty() {
            return vec![];
        }

        let mut boundaries = vec![0, self.text.len()];
        for span in self.spans.iter() {
            boundaries.push(span.range.start);
            boundaries.push(span.range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        let mut runs: Vec<StyledRun<'_>> = vec![];

        for window in boundaries.windows(2) {
            let (start, end) = (window[0], window[1]);

            let attributes = self
                .spans
                .iter()
                .filter(|span| span.range.start <= start && span.range.end >= end)
                .fold(TextAttributes::default(), |attributes, span| {
                    attributes.merging(&span.attributes)
                });

            if let Some(last) = runs
                .last_mut()
                .filter(|last| last.attributes == attributes)
            {
                last.range.end = end;
                last.text = &self.text[last.range.clone()];
                continue;
            }

            runs.push(StyledRun {
                text: &self.text[start..end],
                range: start..end,
                attributes,
            });
        }

        runs
    }

    /// Removes leading and trailing newlines, moving spans along.
    pub fn trim_newlines(self) -> Self {
        let end = self.text.trim_end_matches(is_newline).len();
        let start = (self.text.len() - self.text.trim_start_matches(is_newline).len()).min(end);

        if start == 0 && end == self.text.len() {
            return self;
        }

        let spans = self
            .spans
            .into_iter()
            .filter_map(|span| {
                let span_start = span.range.start.clamp(start, end) - start;
                let span_end = span.range.end.clamp(start, end) - start;
                (span_start < span_end).then_some(StyleSpan {
                    range: span_start..span_end,
                    attributes: span.attributes,
                })
            })
            .collect();

        Self {
            text: self.text[start..end].to_string(),
            spans,
        }
    }
}

impl From<&str> for StyledText {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
