//! Character-level positions for token ranges
//!
//! Token ranges index into a chunk's token sequence. Reports also want the
//! matching character positions, counted in Unicode scalar values over the
//! concatenated token stream.

use serde::Serialize;

/// Represents a span of characters in text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "[usize; 2]")]
pub struct CharSpan {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl CharSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<CharSpan> for [usize; 2] {
    fn from(span: CharSpan) -> Self {
        [span.start, span.end]
    }
}

/// Prefix sums of token lengths, used to turn token ranges into character spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOffsets {
    /// `starts[i]` is the character offset of token `i`; one extra entry
    /// holds the total length
    starts: Vec<usize>,
}

impl TokenOffsets {
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut starts = Vec::with_capacity(tokens.len() + 1);
        let mut position = 0;
        starts.push(position);
        for token in tokens {
            position += token.as_ref().chars().count();
            starts.push(position);
        }
        Self { starts }
    }

    /// Character span covered by the token range `[start, end)`
    ///
    /// Ranges past the end are clamped to the total length.
    pub fn span(&self, start: usize, end: usize) -> CharSpan {
        let last = self.starts.len() - 1;
        CharSpan::new(self.starts[start.min(last)], self.starts[end.min(last)])
    }
}
