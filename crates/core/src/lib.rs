//! # Redline Library
//!
//! Word-style track-changes ("redlines") for plain text. Two versions of a
//! text are tokenized, aligned with a longest-matching-block strategy and
//! turned into edit operations, change records and statistics, which the
//! renderers format as markup, terminal text or JSON.
//!
//! ## Core Concepts
//!
//! - **Tokenizers**: Split text into words that keep their trailing whitespace
//! - **Paragraphs**: Blank lines survive alignment as a `¶` marker token
//! - **Algorithm**: Longest-matching-block alignment into `equal` / `insert` / `delete` / `replace` operations
//! - **Processors**: Cut texts into chunk pairs (whole document or sentences)
//! - **Changes / Stats**: Derived views over the operations
//! - **Redlines**: A comparison session with output helpers
//!
//! ## Example
//!
//! ```rust
//! use redline_core::{MarkdownStyle, RedlineConfig, Redlines};
//!
//! let redlines = Redlines::new("The quick brown fox jumps over the lazy dog.")
//!     .with_config(RedlineConfig::new().with_markdown_style(MarkdownStyle::None))
//!     .with_test("The quick brown fox walks past the lazy dog.");
//!
//! assert_eq!(
//!     redlines.output_markdown().unwrap(),
//!     "The quick brown fox <del>jumps over </del><ins>walks past </ins>the lazy dog.",
//! );
//! ```

pub mod algorithm;
pub mod changes;
pub mod config;
pub mod diff;
pub mod document;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod paragraphs;
pub mod processor;
pub mod render;
pub mod session;
pub mod stats;
pub mod tokenizers;

// Re-export main types
pub use changes::{ChangeKind, ChangeRecord};
pub use config::{CssClass, MarkdownStyle, OutputFormat, RedlineConfig};
pub use diff::{Chunk, ChunkDiff, DiffResult, EditType, Opcode};
pub use document::{Document, PlainTextFile, TextInput};
pub use engine::DiffEngine;
pub use error::{RedlineError, Result};
pub use processor::{ChunkingStrategy, Processor};
pub use session::Redlines;
pub use stats::Stats;

/// Main entry point for computing diffs between two strings
///
/// # Arguments
///
/// * `source` - The original text
/// * `test` - The text compared against it
/// * `config` - Optional configuration (uses default if None)
///
/// # Example
///
/// ```rust
/// use redline_core::compute_diff;
///
/// let result = compute_diff("Hello World", "Hello Rust", None);
/// assert_eq!(result.changes().len(), 1);
/// ```
pub fn compute_diff(source: &str, test: &str, config: Option<RedlineConfig>) -> DiffResult {
    let config = config.unwrap_or_default();
    let engine = DiffEngine::new(config);
    engine.diff(source, test)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_diff() {
        let result = compute_diff("hello world", "hello rust", None);
        assert_eq!(result.opcodes().len(), 2);
    }

    #[test]
    fn test_with_character_tokenizer() {
        let config =
            RedlineConfig::new().with_tokenizer(Box::new(tokenizers::CharacterTokenizer));

        let result = compute_diff("cat", "cut", Some(config));
        let changes = result.changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].source_text.as_deref(), Some("a"));
        assert_eq!(changes[0].test_text.as_deref(), Some("u"));
    }
}
