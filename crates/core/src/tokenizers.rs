//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and the built-in implementations used to
//! split text into the units the alignment engine compares. The default
//! tokenizer keeps each word together with its trailing whitespace, so the
//! tokens of a text concatenate back to that text with its leading
//! whitespace trimmed, and renderers never have to re-insert spacing.
//!
//! Custom tokenizers are trusted: the round-trip property is not checked,
//! and renderers simply join whatever tokens they were given.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern of the default tokenizer: a run of characters other than
/// parentheses and whitespace, or a single bracket/punctuation character,
/// each followed by any trailing whitespace.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?:[^()\s]+|[().?!-])\s*";

static DEFAULT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_TOKEN_PATTERN).expect("default token pattern is valid"));

/// Trait for tokenizers that split text into tokens
pub trait Tokenizer: Send + Sync {
    /// Split `text` into an ordered sequence of tokens
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

// Implement Clone for Box<dyn Tokenizer>
impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for dyn Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").field("name", &self.name()).finish()
    }
}

/// Tokenize with the default pattern
///
/// ```rust
/// use redline_core::tokenizers::tokenize_text;
///
/// assert_eq!(
///     tokenize_text("Hello, world! This is a test."),
///     vec!["Hello, ", "world! ", "This ", "is ", "a ", "test."],
/// );
/// ```
pub fn tokenize_text(text: &str) -> Vec<String> {
    DEFAULT_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ============================================================================
// Built-in Tokenizers
// ============================================================================

/// Regex tokenizer; every match of the pattern becomes one token
#[derive(Clone, Debug)]
pub struct PatternTokenizer {
    pattern: Regex,
}

impl PatternTokenizer {
    /// The default word-plus-trailing-whitespace tokenizer
    pub fn new() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
        }
    }

    /// Tokenizer using a caller-supplied pattern
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

}

impl Default for PatternTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for PatternTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn name(&self) -> &str {
        "pattern"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Character-level tokenizer (splits into individual characters)
#[derive(Clone, Debug, Default)]
pub struct CharacterTokenizer;

impl Tokenizer for CharacterTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.chars().map(|ch| ch.to_string()).collect()
    }

    fn name(&self) -> &str {
        "character"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Whitespace tokenizer; drops the whitespace itself
///
/// The tokens no longer concatenate to the input, so rendered output loses
/// the spacing between words.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Adapter turning any `Fn(&str) -> Vec<String>` into a tokenizer
#[derive(Clone)]
pub struct FnTokenizer<F> {
    name: String,
    func: F,
}

impl<F> FnTokenizer<F>
where
    F: Fn(&str) -> Vec<String> + Clone + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Tokenizer for FnTokenizer<F>
where
    F: Fn(&str) -> Vec<String> + Clone + Send + Sync + 'static,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        (self.func)(text)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Box a closure as a custom tokenizer
///
/// ```rust
/// use redline_core::tokenizers::{from_fn, Tokenizer};
///
/// let lines = from_fn(|text: &str| text.lines().map(|l| format!("{l}\n")).collect());
/// assert_eq!(lines.tokenize("a\nb"), vec!["a\n", "b\n"]);
/// ```
pub fn from_fn<F>(func: F) -> Box<dyn Tokenizer>
where
    F: Fn(&str) -> Vec<String> + Clone + Send + Sync + 'static,
{
    Box::new(FnTokenizer::new("custom", func))
}
