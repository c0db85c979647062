//! Configuration for comparisons

use crate::error::{RedlineError, Result};
use crate::processor::{ChunkingStrategy, Processor};
use crate::tokenizers::{PatternTokenizer, Tokenizer};
use std::fmt;
use std::str::FromStr;

/// Markup wrapped around inserted and deleted text in markdown output
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MarkdownStyle {
    /// Plain `<ins>` / `<del>` tags
    None,
    /// Red spans for both sides
    Red,
    /// Green insertions, red struck-through deletions
    #[default]
    RedGreen,
    /// GitHub flavored markdown (`**bold**` / `~~strike~~`)
    Ghfm,
    /// BBCode color and strike tags
    BbCode,
    /// Streamlit colored text directives
    Streamlit,
    /// Spans carrying caller-chosen CSS classes
    CustomCss { ins_class: CssClass, del_class: CssClass },
}

/// A CSS class name holding only ASCII letters, digits, `-` and `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssClass(String);

impl CssClass {
    pub fn new(class: impl Into<String>) -> Result<Self> {
        let class = class.into();
        let valid = !class.is_empty()
            && class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(CssClass(class))
        } else {
            Err(RedlineError::InvalidCssClass { class })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CssClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CssClass {
    type Err = RedlineError;

    fn from_str(s: &str) -> Result<Self> {
        CssClass::new(s)
    }
}

impl MarkdownStyle {
    pub const DEFAULT_INS_CLASS: &'static str = "redline-inserted";
    pub const DEFAULT_DEL_CLASS: &'static str = "redline-deleted";

    /// Custom-CSS style; see [`CssClass`] for the allowed names
    pub fn custom_css(ins_class: impl Into<String>, del_class: impl Into<String>) -> Result<Self> {
        Ok(MarkdownStyle::CustomCss {
            ins_class: CssClass::new(ins_class)?,
            del_class: CssClass::new(del_class)?,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            MarkdownStyle::None => "none",
            MarkdownStyle::Red => "red",
            MarkdownStyle::RedGreen => "red_green",
            MarkdownStyle::Ghfm => "ghfm",
            MarkdownStyle::BbCode => "bbcode",
            MarkdownStyle::Streamlit => "streamlit",
            MarkdownStyle::CustomCss { .. } => "custom_css",
        }
    }
}

impl fmt::Display for MarkdownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for MarkdownStyle {
    type Err = RedlineError;

    /// Parse a style name; `custom_css` gets the default class names
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(MarkdownStyle::None),
            "red" => Ok(MarkdownStyle::Red),
            "red_green" | "red-green" => Ok(MarkdownStyle::RedGreen),
            "ghfm" => Ok(MarkdownStyle::Ghfm),
            "bbcode" => Ok(MarkdownStyle::BbCode),
            "streamlit" => Ok(MarkdownStyle::Streamlit),
            "custom_css" | "custom-css" => MarkdownStyle::custom_css(
                MarkdownStyle::DEFAULT_INS_CLASS,
                MarkdownStyle::DEFAULT_DEL_CLASS,
            ),
            other => Err(RedlineError::InvalidStyle {
                given: other.to_string(),
            }),
        }
    }
}

/// Rendering target for `Redlines::compare`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markup in the configured markdown style
    #[default]
    Markdown,
    /// ANSI-styled terminal text
    Terminal,
    /// Compact JSON document
    Json,
}

/// Configuration for a comparison
#[derive(Debug, Clone)]
pub struct RedlineConfig {
    /// Tokenizer to use (default word tokenizer when unset)
    pub tokenizer: Option<Box<dyn Tokenizer>>,

    /// Explicit processor; overrides `tokenizer` and `chunking`
    pub processor: Option<Box<dyn Processor>>,

    /// How texts are cut into chunk pairs
    pub chunking: ChunkingStrategy,

    /// Markup used by the markdown renderer
    pub markdown_style: MarkdownStyle,

    /// Whether stats include the character-level edit distance
    pub compute_edit_distance: bool,
}

impl Default for RedlineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RedlineConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            tokenizer: None,
            processor: None,
            chunking: ChunkingStrategy::default(),
            markdown_style: MarkdownStyle::default(),
            compute_edit_distance: true,
        }
    }

    /// Set the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Set an explicit processor
    pub fn with_processor(mut self, processor: Box<dyn Processor>) -> Self {
        self.processor = Some(processor);
        self
    }

    /// Set the chunking strategy
    pub fn with_chunking(mut self, chunking: ChunkingStrategy) -> Self {
        self.chunking = chunking;
        self
    }

    /// Set the markdown style
    pub fn with_markdown_style(mut self, style: MarkdownStyle) -> Self {
        self.markdown_style = style;
        self
    }

    /// Enable or disable the edit distance in stats
    pub fn with_edit_distance(mut self, enabled: bool) -> Self {
        self.compute_edit_distance = enabled;
        self
    }

    /// Processor this configuration compares with
    pub fn build_processor(&self) -> Box<dyn Processor> {
        if let Some(processor) = &self.processor {
            return processor.clone();
        }
        let tokenizer = self
            .tokenizer
            .clone()
            .unwrap_or_else(|| Box::new(PatternTokenizer::new()));
        self.chunking.build(tokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizers::CharacterTokenizer;

    #[test]
    fn test_default_config() {
        let config = RedlineConfig::default();
        assert!(config.tokenizer.is_none());
        assert_eq!(config.markdown_style, MarkdownStyle::RedGreen);
        assert!(config.compute_edit_distance);
        assert_eq!(config.build_processor().name(), "whole_document");
    }

    #[test]
    fn test_builder_pattern() {
        let config = RedlineConfig::new()
            .with_tokenizer(Box::new(CharacterTokenizer))
            .with_markdown_style(MarkdownStyle::Ghfm)
            .with_edit_distance(false);

        assert_eq!(config.tokenizer.as_ref().map(|t| t.name()), Some("character"));
        assert_eq!(config.markdown_style, MarkdownStyle::Ghfm);
        assert!(!config.compute_edit_distance);

        let chunks = config.build_processor().process("ab", "ac");
        assert_eq!(chunks[0].source.tokens, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_styles() {
        for name in ["none", "red", "red_green", "ghfm", "bbcode", "streamlit", "custom_css"] {
            let style: MarkdownStyle = name.parse().unwrap();
            assert_eq!(style.name(), name);
        }
        assert!(matches!(
            "purple".parse::<MarkdownStyle>(),
            Err(RedlineError::InvalidStyle { .. })
        ));
    }

    #[test]
    fn test_custom_css_validation() {
        let style = MarkdownStyle::custom_css("added", "removed_1").unwrap();
        assert_eq!(
            style,
            MarkdownStyle::CustomCss {
                ins_class: CssClass::new("added").unwrap(),
                del_class: CssClass::new("removed_1").unwrap(),
            }
        );
        assert!(matches!(
            MarkdownStyle::custom_css("ok", "bad'class"),
            Err(RedlineError::InvalidCssClass { class }) if class == "bad'class"
        ));
        assert!(MarkdownStyle::custom_css("", "ok").is_err());
    }

    #[test]
    fn test_css_class_rejects_markup() {
        for bad in ["", "a b", "x'><script>", "semi;colon"] {
            assert!(CssClass::new(bad).is_err(), "{bad:?} accepted");
            assert!(bad.parse::<CssClass>().is_err());
        }
        let class: CssClass = "track-ins_2".parse().unwrap();
        assert_eq!(class.as_str(), "track-ins_2");
        assert_eq!(class.to_string(), "track-ins_2");
    }
}
