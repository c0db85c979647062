//! Structured change records
//!
//! One record per non-equal operation, with the affected text on each side.

use crate::diff::{Chunk, EditType, Opcode};
use crate::error::RedlineError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of an actual change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Delete,
    Insert,
    Replace,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Delete => "delete",
            ChangeKind::Insert => "insert",
            ChangeKind::Replace => "replace",
        }
    }

    /// `None` for `Equal`, which never yields a record
    pub fn from_edit(tag: EditType) -> Option<Self> {
        match tag {
            EditType::Equal => None,
            EditType::Insert => Some(ChangeKind::Insert),
            EditType::Delete => Some(ChangeKind::Delete),
            EditType::Replace => Some(ChangeKind::Replace),
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ChangeKind {
    type Err = RedlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delete" => Ok(ChangeKind::Delete),
            "insert" => Ok(ChangeKind::Insert),
            "replace" => Ok(ChangeKind::Replace),
            other => Err(RedlineError::InvalidOperation {
                given: other.to_string(),
            }),
        }
    }
}

/// A single change between source and test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    /// What kind of change this is
    #[serde(rename = "operation")]
    pub kind: ChangeKind,

    /// Source text; present for delete and replace
    pub source_text: Option<String>,

    /// Test text; present for insert and replace
    pub test_text: Option<String>,

    /// Source token range `(start, end)`; absent for insert
    pub source_position: Option<(usize, usize)>,

    /// Test token range `(start, end)`; absent for delete
    pub test_position: Option<(usize, usize)>,
}

impl ChangeRecord {
    /// Character length counted towards change statistics
    ///
    /// Deletes count their source text, inserts their test text and
    /// replacements the longer of the two.
    pub fn len(&self) -> usize {
        let source = self.source_len();
        let test = self.test_len();
        match self.kind {
            ChangeKind::Delete => source,
            ChangeKind::Insert => test,
            ChangeKind::Replace => source.max(test),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Characters of source text
    pub fn source_len(&self) -> usize {
        self.source_text
            .as_deref()
            .map_or(0, |text| text.chars().count())
    }

    /// Characters of test text
    pub fn test_len(&self) -> usize {
        self.test_text
            .as_deref()
            .map_or(0, |text| text.chars().count())
    }
}

/// One record per non-equal operation, in operation order
pub fn derive_changes(opcodes: &[Opcode], source: &Chunk, test: &Chunk) -> Vec<ChangeRecord> {
    opcodes
        .iter()
        .filter_map(|op| {
            let kind = ChangeKind::from_edit(op.tag)?;
            let has_source = kind != ChangeKind::Insert;
            let has_test = kind != ChangeKind::Delete;

            Some(ChangeRecord {
                kind,
                source_text: has_source.then(|| source.text_of(op.source_range())),
                test_text: has_test.then(|| test.text_of(op.test_range())),
                source_position: has_source.then_some((op.i1, op.i2)),
                test_position: has_test.then_some((op.j1, op.j2)),
            })
        })
        .collect()
}

/// Keep only the records of `kind`; `None` keeps everything
pub fn filter_changes(changes: Vec<ChangeRecord>, kind: Option<ChangeKind>) -> Vec<ChangeRecord> {
    match kind {
        None => changes,
        Some(kind) => changes
            .into_iter()
            .filter(|change| change.kind == kind)
            .collect(),
    }
}
