//! Paragraph segmentation
//!
//! Paragraph boundaries are encoded as an ordinary token so they survive
//! tokenization and alignment untouched. Paragraphs are joined with
//! `" ¶ "`; the default tokenizer then yields a `"¶ "` token between the
//! last word of one paragraph and the first word of the next. Renderers
//! turn that token back into a blank line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator inserted between paragraphs before tokenization (`¶` is reserved)
pub const PARAGRAPH_SEPARATOR: &str = " \u{00B6} ";

/// The marker as it appears once tokenized (the leading space belongs to the previous token)
pub const MARKER_TOKEN: &str = "\u{00B6} ";

/// What a marker token becomes when rendered
pub const PARAGRAPH_BREAK: &str = "\n\n";

// One or more newlines, each optionally followed by spaces
static PARAGRAPH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\n *)+").expect("paragraph pattern is valid"));

/// Split text into trimmed, non-blank paragraphs
///
/// ```rust
/// use redline_core::paragraphs::split_paragraphs;
///
/// assert_eq!(
///     split_paragraphs("Hello\nWorld\n\n  \nThis is a test"),
///     vec!["Hello", "World", "This is a test"],
/// );
/// ```
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

/// Join paragraphs with the marker separator; zero paragraphs yield `""`
pub fn join_with_marker<S: AsRef<str>>(paragraphs: &[S]) -> String {
    let mut joined = String::new();
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            joined.push_str(PARAGRAPH_SEPARATOR);
        }
        joined.push_str(paragraph.as_ref());
    }
    joined
}

/// `split_paragraphs` followed by `join_with_marker`
pub fn mark_paragraphs(text: &str) -> String {
    join_with_marker(&split_paragraphs(text))
}

/// Replace every marker token in rendered text with a blank line
pub fn restore_paragraph_breaks(text: &str) -> String {
    text.replace(MARKER_TOKEN, PARAGRAPH_BREAK)
}
