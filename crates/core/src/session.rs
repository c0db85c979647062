//! Comparison session
//!
//! `Redlines` owns a source text, an optional test text and the diff
//! between them. Replacing either text recomputes the diff right away, so
//! every accessor reads a result that matches the current pair.

use crate::changes::{filter_changes, ChangeKind, ChangeRecord};
use crate::config::{MarkdownStyle, OutputFormat, RedlineConfig};
use crate::diff::{DiffResult, Opcode};
use crate::document::Document;
use crate::engine::DiffEngine;
use crate::error::{RedlineError, Result};
use crate::render::{render_json, render_markdown, render_terminal};
use crate::stats::Stats;

/// A source/test pair and the redline between them
///
/// ```rust
/// use redline_core::Redlines;
///
/// let redlines = Redlines::new("The quick brown fox jumps over the lazy dog.")
///     .with_test("The quick brown fox walks past the lazy dog.");
///
/// let ops: Vec<_> = redlines.opcodes().unwrap().iter().map(|op| op.as_tuple()).collect();
/// assert_eq!(
///     ops,
///     vec![("equal", 0, 4, 0, 4), ("replace", 4, 6, 4, 6), ("equal", 6, 9, 6, 9)],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Redlines {
    source: String,
    test: Option<String>,
    engine: DiffEngine,
    result: Option<DiffResult>,
}

impl Redlines {
    /// Session with a source text and the default configuration
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            test: None,
            engine: DiffEngine::default(),
            result: None,
        }
    }

    /// Session whose source is read from a document
    pub fn from_document<D: Document + ?Sized>(source: &D) -> Self {
        Self::new(source.text())
    }

    /// Set the test text
    pub fn with_test(mut self, test: impl Into<String>) -> Self {
        self.set_test(test);
        self
    }

    /// Set the test text from a document
    pub fn with_test_document<D: Document + ?Sized>(self, test: &D) -> Self {
        self.with_test(test.text())
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: RedlineConfig) -> Self {
        self.engine = DiffEngine::new(config);
        self.recompute();
        self
    }

    pub fn config(&self) -> &RedlineConfig {
        self.engine.config()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn test(&self) -> Result<&str> {
        self.test.as_deref().ok_or(RedlineError::MissingTest)
    }

    /// Replace the source text and recompute
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.recompute();
    }

    /// Replace the test text and recompute
    pub fn set_test(&mut self, test: impl Into<String>) {
        self.test = Some(test.into());
        self.recompute();
    }

    /// Change the markdown style; the diff itself is unaffected
    pub fn set_markdown_style(&mut self, style: MarkdownStyle) {
        let config = self.engine.config().clone().with_markdown_style(style);
        self.engine = DiffEngine::new(config);
    }

    fn recompute(&mut self) {
        self.result = self
            .test
            .as_deref()
            .map(|test| self.engine.diff(&self.source, test));
    }

    /// The current diff result
    pub fn result(&self) -> Result<&DiffResult> {
        self.result.as_ref().ok_or(RedlineError::MissingTest)
    }

    /// Operations turning source into test, over global token indices
    pub fn opcodes(&self) -> Result<Vec<Opcode>> {
        Ok(self.result()?.opcodes())
    }

    pub fn source_tokens(&self) -> Result<Vec<&str>> {
        Ok(self.result()?.source_tokens())
    }

    pub fn test_tokens(&self) -> Result<Vec<&str>> {
        Ok(self.result()?.test_tokens())
    }

    /// All change records
    pub fn changes(&self) -> Result<Vec<ChangeRecord>> {
        Ok(self.result()?.changes())
    }

    /// Change records of one kind, named `"delete"`, `"insert"` or `"replace"`
    ///
    /// `None` returns every record.
    pub fn get_changes(&self, operation: Option<&str>) -> Result<Vec<ChangeRecord>> {
        let kind = operation.map(str::parse::<ChangeKind>).transpose()?;
        Ok(filter_changes(self.changes()?, kind))
    }

    pub fn stats(&self) -> Result<Stats> {
        Ok(self.engine.stats(self.result()?))
    }

    /// Compare against `test` (or the stored test) and render in `output`
    ///
    /// Passing the already stored test does not recompute anything. An
    /// empty `test` counts as absent and keeps the stored one.
    pub fn compare(&mut self, test: Option<&str>, output: OutputFormat) -> Result<String> {
        match test.filter(|test| !test.is_empty()) {
            Some(test) if self.test.as_deref() != Some(test) => self.set_test(test),
            Some(_) => {}
            None if self.test.is_none() => return Err(RedlineError::MissingTestForCompare),
            None => {}
        }

        match output {
            OutputFormat::Markdown => self.output_markdown(),
            OutputFormat::Terminal => self.output_terminal(true),
            OutputFormat::Json => self.output_json(false),
        }
    }

    /// Markup in the configured markdown style
    pub fn output_markdown(&self) -> Result<String> {
        Ok(render_markdown(
            self.result()?,
            &self.engine.config().markdown_style,
        ))
    }

    pub fn output_terminal(&self, use_color: bool) -> Result<String> {
        Ok(render_terminal(self.result()?, use_color))
    }

    pub fn output_json(&self, pretty: bool) -> Result<String> {
        let result = self.result()?;
        render_json(result, &self.engine.stats(result), pretty)
    }
}
