//! Error types for the redline engine
//!
//! Configuration errors carry a three part message: what went wrong, a
//! `Cause:` line and a `To fix:` line with an indented example.

use std::path::PathBuf;

/// Errors surfaced by the engine and its collaborators
#[derive(Debug, thiserror::Error)]
pub enum RedlineError {
    /// An operation needing the test text ran before one was supplied
    #[error(
        "No test text available.\n\
         Cause: The comparison needs both a source and a test text, but only the source was set.\n\
         To fix: Initialize Redlines with both texts, or set the test text before asking for results:\n    \
         let redlines = Redlines::new(\"original\").with_test(\"modified\");\n    \
         redlines.set_test(\"modified\");"
    )]
    MissingTest,

    /// `compare` was called without a test text and none was stored
    #[error(
        "No test text provided for comparison.\n\
         Cause: The compare() method was called without a test parameter and no test text was set earlier.\n\
         To fix:\n  \
         Option 1: Pass test text to compare():\n    \
         redlines.compare(Some(\"modified\"), OutputFormat::Markdown)?;\n  \
         Option 2: Set test during initialization:\n    \
         let redlines = Redlines::new(\"original\").with_test(\"modified\");\n  \
         Option 3: Set it on the session before comparing:\n    \
         redlines.set_test(\"modified\");"
    )]
    MissingTestForCompare,

    /// A change-kind filter named something other than delete/insert/replace
    #[error(
        "Invalid operation type: '{given}'.\n\
         Cause: The filter must be one of the three valid diff operation types.\n\
         To fix: Use one of the following, or pass None to Get all changes:\n    \
         redlines.get_changes(Some(\"delete\"))   // operation='delete'\n    \
         redlines.get_changes(Some(\"insert\"))   // operation='insert'\n    \
         redlines.get_changes(Some(\"replace\"))  // operation='replace'\n    \
         redlines.get_changes(None)              // Get all changes"
    )]
    InvalidOperation { given: String },

    /// Unknown markdown style name
    #[error(
        "Invalid markdown style: '{given}'.\n\
         Cause: The style must name one of the supported markup styles.\n\
         To fix: Use one of red_green, none, red, ghfm, bbcode, streamlit or custom_css:\n    \
         let style: MarkdownStyle = \"ghfm\".parse()?;"
    )]
    InvalidStyle { given: String },

    /// A custom CSS class name that cannot be embedded in a class attribute
    #[error(
        "Invalid CSS class name: '{class}'.\n\
         Cause: Class names must be non-empty and contain only letters, digits, '-' or '_'.\n\
         To fix: Choose a plain class name:\n    \
         MarkdownStyle::custom_css(\"redline-inserted\", \"redline-deleted\")?;"
    )]
    InvalidCssClass { class: String },

    /// Unknown chunking strategy name
    #[error(
        "Invalid chunking strategy: '{given}'.\n\
         Cause: The chunking strategy must be either 'whole' or 'sentences'.\n\
         To fix: Pick one of the supported strategies:\n    \
         let chunking: ChunkingStrategy = \"whole\".parse()?;"
    )]
    InvalidChunking { given: String },

    /// An optional capability was requested in a build without it
    #[error(
        "{capability} is not available in this build.\n\
         Cause: The '{feature}' cargo feature of redline-core was disabled at compile time.\n\
         To fix: Enable the feature, or supply your own implementation:\n    \
         redline-core = {{ version = \"*\", features = [\"{feature}\"] }}\n    \
         ChunkingStrategy::with_segmenter(Box::new(MySegmenter));"
    )]
    CapabilityUnavailable {
        capability: &'static str,
        feature: &'static str,
    },

    /// A document could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid UTF-8
    #[error(
        "File {} is not valid UTF-8.\n\
         Cause: Only UTF-8 encoded text can be compared.\n\
         To fix: Convert the file first, for example:\n    \
         iconv -f latin1 -t utf-8 input.txt > input.utf8.txt",
        path.display()
    )]
    NotUtf8 { path: PathBuf },

    /// Structured output could not be serialized
    #[error("Failed to serialize structured output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RedlineError>;
