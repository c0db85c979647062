//! Structured JSON output
//!
//! Unlike `changes()`, the report lists every operation, `equal` included,
//! so a consumer can rebuild both texts from it.

use crate::diff::{DiffResult, EditType};
use crate::error::Result;
use crate::mapping::{CharSpan, TokenOffsets};
use crate::paragraphs::restore_paragraph_breaks;
use crate::stats::Stats;
use serde::Serialize;

/// Top-level JSON document
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub source: &'a str,
    pub test: &'a str,
    pub source_tokens: Vec<&'a str>,
    pub test_tokens: Vec<&'a str>,
    pub changes: Vec<JsonChange>,
    pub stats: JsonStats<'a>,
}

/// One operation of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonChange {
    #[serde(rename = "type")]
    pub kind: EditType,

    /// Text of equal, insert and delete operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Source side of a replacement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,

    /// Test side of a replacement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_text: Option<String>,

    /// Character span in the source token stream
    pub source_position: Option<CharSpan>,
    /// Character span in the test token stream
    pub test_position: Option<CharSpan>,
    pub source_token_position: Option<[usize; 2]>,
    pub test_token_position: Option<[usize; 2]>,
}

/// Stats plus the number of unchanged spans
#[derive(Debug, Clone, Serialize)]
pub struct JsonStats<'a> {
    #[serde(flatten)]
    pub stats: &'a Stats,
    pub unchanged: usize,
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a DiffResult, stats: &'a Stats) -> Self {
        let diff = result.merged();
        let source_offsets = TokenOffsets::new(&diff.source.tokens);
        let test_offsets = TokenOffsets::new(&diff.test.tokens);

        let changes: Vec<JsonChange> = diff
            .opcodes
            .iter()
            .map(|op| {
                let source_text = diff.source.text_of(op.source_range());
                let test_text = diff.test.text_of(op.test_range());
                let has_source = op.tag != EditType::Insert;
                let has_test = op.tag != EditType::Delete;

                let (text, source_text, test_text) = match op.tag {
                    EditType::Equal => (Some(restore_paragraph_breaks(&source_text)), None, None),
                    EditType::Insert => (Some(test_text), None, None),
                    EditType::Delete => (Some(source_text), None, None),
                    EditType::Replace => (None, Some(source_text), Some(test_text)),
                };

                JsonChange {
                    kind: op.tag,
                    text,
                    source_text,
                    test_text,
                    source_position: has_source.then(|| source_offsets.span(op.i1, op.i2)),
                    test_position: has_test.then(|| test_offsets.span(op.j1, op.j2)),
                    source_token_position: has_source.then_some([op.i1, op.i2]),
                    test_token_position: has_test.then_some([op.j1, op.j2]),
                }
            })
            .collect();

        let unchanged = changes
            .iter()
            .filter(|change| change.kind == EditType::Equal)
            .count();

        Self {
            source: &result.source_text,
            test: &result.test_text,
            source_tokens: result.source_tokens(),
            test_tokens: result.test_tokens(),
            changes,
            stats: JsonStats { stats, unchanged },
        }
    }
}

/// Serialize `result` as a JSON report; compact unless `pretty`
pub fn render_json(result: &DiffResult, stats: &Stats, pretty: bool) -> Result<String> {
    let report = JsonReport::new(result, stats);
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DiffEngine;
    use serde_json::Value;

    fn report(source: &str, test: &str) -> Value {
        let engine = DiffEngine::default();
        let result = engine.diff(source, test);
        let stats = engine.stats(&result);
        serde_json::from_str(&render_json(&result, &stats, false).unwrap()).unwrap()
    }

    #[test]
    fn test_replace_report() {
        let data = report(
            "The quick brown fox jumps over the lazy dog.",
            "The quick brown fox walks past the lazy dog.",
        );

        assert_eq!(data["source"], "The quick brown fox jumps over the lazy dog.");
        let changes = data["changes"].as_array().unwrap();
        assert_eq!(changes.len(), 3);

        let replace = &changes[1];
        assert_eq!(replace["type"], "replace");
        assert_eq!(replace["source_text"], "jumps over ");
        assert_eq!(replace["test_text"], "walks past ");
        assert_eq!(replace["source_position"], serde_json::json!([20, 31]));
        assert_eq!(replace["test_position"], serde_json::json!([20, 31]));
        assert_eq!(replace["source_token_position"], serde_json::json!([4, 6]));
        assert!(replace.get("text").is_none());

        assert_eq!(data["stats"]["replacements"], 1);
        assert_eq!(data["stats"]["unchanged"], 2);
        assert_eq!(data["stats"]["total_changes"], 1);
    }

    #[test]
    fn test_absent_sides_are_null() {
        let data = report(
            "The quick brown fox jumps over the dog.",
            "The quick brown fox jumps over the lazy dog.",
        );
        let insert = data["changes"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["type"] == "insert")
            .unwrap();

        assert_eq!(insert["text"], "lazy ");
        assert!(insert["source_position"].is_null());
        assert!(insert["source_token_position"].is_null());
        assert!(!insert["test_position"].is_null());
    }

    #[test]
    fn test_equal_text_restores_paragraph_breaks() {
        let data = report("Hello\n\nWorld", "Hello\n\nEarth");
        let first = &data["changes"][0];
        assert_eq!(first["type"], "equal");
        assert_eq!(first["text"], "Hello \n\n");
    }

    #[test]
    fn test_unicode_positions_are_characters() {
        let data = report("Hello 世界", "Hello 🌍");
        let replace = &data["changes"][1];
        assert_eq!(replace["source_position"], serde_json::json!([6, 8]));
        assert_eq!(replace["test_position"], serde_json::json!([6, 7]));
    }

    #[test]
    fn test_pretty_output() {
        let engine = DiffEngine::default();
        let result = engine.diff("Hello world", "Hello there");
        let stats = engine.stats(&result);

        let compact = render_json(&result, &stats, false).unwrap();
        let pretty = render_json(&result, &stats, true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));

        let a: Value = serde_json::from_str(&compact).unwrap();
        let b: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_whitespace_only_inputs() {
        let data = report("   ", "   ");
        assert_eq!(data["source"], "   ");
        assert_eq!(data["changes"].as_array().unwrap().len(), 0);
        assert_eq!(data["stats"]["unchanged"], 0);
    }
}
