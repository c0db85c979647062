//! Diff result types and structures

use crate::changes::{derive_changes, ChangeRecord};
use crate::stats::{derive_stats, Stats};
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Type of edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditType {
    /// Content remained unchanged
    Equal,
    /// Content was inserted
    Insert,
    /// Content was deleted
    Delete,
    /// Content was replaced (delete + insert at the same place)
    Replace,
}

impl EditType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditType::Equal => "equal",
            EditType::Insert => "insert",
            EditType::Delete => "delete",
            EditType::Replace => "replace",
        }
    }
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One edit operation over token index ranges
///
/// `[i1, i2)` indexes the source chunk, `[j1, j2)` the test chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub tag: EditType,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

impl Opcode {
    pub fn new(tag: EditType, i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        Self { tag, i1, i2, j1, j2 }
    }

    pub fn source_range(&self) -> Range<usize> {
        self.i1..self.i2
    }

    pub fn test_range(&self) -> Range<usize> {
        self.j1..self.j2
    }

    /// Classic `(tag, i1, i2, j1, j2)` opcode shape
    pub fn as_tuple(&self) -> (&'static str, usize, usize, usize, usize) {
        (self.tag.as_str(), self.i1, self.i2, self.j1, self.j2)
    }

    /// Same operation with both ranges shifted
    pub fn offset(&self, source_offset: usize, test_offset: usize) -> Self {
        Self {
            tag: self.tag,
            i1: self.i1 + source_offset,
            i2: self.i2 + source_offset,
            j1: self.j1 + test_offset,
            j2: self.j2 + test_offset,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "('{}', {}, {}, {}, {})",
            self.tag, self.i1, self.i2, self.j1, self.j2
        )
    }
}

/// A tokenized unit of comparison
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chunk {
    /// The tokens of the chunk
    pub tokens: Vec<String>,

    /// Optional label describing where the chunk sits in its document
    pub location: Option<String>,
}

impl Chunk {
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Concatenation of the tokens in `range`
    pub fn text_of(&self, range: Range<usize>) -> String {
        self.tokens[range].concat()
    }

    /// Concatenation of all tokens
    pub fn text(&self) -> String {
        self.tokens.concat()
    }
}

/// One compared chunk pair and the operations aligning it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkDiff {
    pub source: Chunk,
    pub test: Chunk,
    pub opcodes: Vec<Opcode>,
}

impl ChunkDiff {
    pub fn new(source: Chunk, test: Chunk, opcodes: Vec<Opcode>) -> Self {
        Self {
            source,
            test,
            opcodes,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.opcodes.iter().any(|op| op.tag != EditType::Equal)
    }
}

/// Complete diff result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    /// Original source text
    pub source_text: String,

    /// Original test text
    pub test_text: String,

    /// Compared chunk pairs, in document order
    pub chunks: Vec<ChunkDiff>,
}

impl DiffResult {
    pub fn new(source_text: String, test_text: String, chunks: Vec<ChunkDiff>) -> Self {
        Self {
            source_text,
            test_text,
            chunks,
        }
    }

    /// All chunk pairs merged into one, with opcode ranges shifted to global token indices
    pub fn merged(&self) -> ChunkDiff {
        if self.chunks.len() == 1 {
            return self.chunks[0].clone();
        }

        let mut source = Vec::new();
        let mut test = Vec::new();
        let mut opcodes = Vec::new();

        for chunk in &self.chunks {
            let (source_offset, test_offset) = (source.len(), test.len());
            opcodes.extend(
                chunk
                    .opcodes
                    .iter()
                    .map(|op| op.offset(source_offset, test_offset)),
            );
            source.extend(chunk.source.tokens.iter().cloned());
            test.extend(chunk.test.tokens.iter().cloned());
        }

        ChunkDiff::new(Chunk::new(source), Chunk::new(test), opcodes)
    }

    /// Operations over global token indices
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut opcodes = Vec::new();
        let (mut source_offset, mut test_offset) = (0, 0);
        for chunk in &self.chunks {
            opcodes.extend(
                chunk
                    .opcodes
                    .iter()
                    .map(|op| op.offset(source_offset, test_offset)),
            );
            source_offset += chunk.source.len();
            test_offset += chunk.test.len();
        }
        opcodes
    }

    /// All source tokens in order
    pub fn source_tokens(&self) -> Vec<&str> {
        self.chunks
            .iter()
            .flat_map(|chunk| chunk.source.tokens.iter().map(String::as_str))
            .collect()
    }

    /// All test tokens in order
    pub fn test_tokens(&self) -> Vec<&str> {
        self.chunks
            .iter()
            .flat_map(|chunk| chunk.test.tokens.iter().map(String::as_str))
            .collect()
    }

    /// One record per actual change
    pub fn changes(&self) -> Vec<ChangeRecord> {
        let merged = self.merged();
        derive_changes(&merged.opcodes, &merged.source, &merged.test)
    }

    /// Aggregate statistics over the changes
    pub fn stats(&self, with_edit_distance: bool) -> Stats {
        derive_stats(
            &self.changes(),
            &self.source_text,
            &self.test_text,
            with_edit_distance,
        )
    }

    /// Check if the diff is empty (no changes)
    pub fn is_empty(&self) -> bool {
        !self.chunks.iter().any(ChunkDiff::has_changes)
    }
}
