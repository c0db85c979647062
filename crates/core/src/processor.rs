//! Processors: how texts are cut into chunk pairs before alignment
//!
//! A processor is the composition root of a comparison. It segments both
//! texts, tokenizes the pieces and aligns them, handing back chunk pairs
//! with their operations. Renderers and derivations only ever see that
//! output, so processors can be swapped freely.

use crate::algorithm::{AlignmentAlgorithm, BlockMatcher};
use crate::diff::{Chunk, ChunkDiff, EditType};
use crate::error::{RedlineError, Result};
use crate::paragraphs::{mark_paragraphs, split_paragraphs, MARKER_TOKEN};
use crate::tokenizers::{PatternTokenizer, Tokenizer};
use std::fmt;
use std::str::FromStr;

/// Trait for processors producing aligned chunk pairs
pub trait Processor: Send + Sync {
    /// Compare `source` with `test`
    fn process(&self, source: &str, test: &str) -> Vec<ChunkDiff>;

    /// Get the name of this processor
    fn name(&self) -> &str;

    /// Clone this processor into a Box
    fn clone_box(&self) -> Box<dyn Processor>;
}

impl Clone for Box<dyn Processor> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl fmt::Debug for dyn Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Processor").field("name", &self.name()).finish()
    }
}

/// Trait for sentence boundary detectors
///
/// The returned sentences must concatenate back to `text`.
pub trait SentenceSegmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn SentenceSegmenter>;
}

impl Clone for Box<dyn SentenceSegmenter> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl fmt::Debug for dyn SentenceSegmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceSegmenter")
            .field("name", &self.name())
            .finish()
    }
}

/// UAX #29 sentence boundaries
#[cfg(feature = "sentences")]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSegmenter;

#[cfg(feature = "sentences")]
impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        use unicode_segmentation::UnicodeSegmentation;
        text.split_sentence_bounds().collect()
    }

    fn name(&self) -> &str {
        "unicode"
    }

    fn clone_box(&self) -> Box<dyn SentenceSegmenter> {
        Box::new(*self)
    }
}

// ============================================================================
// Built-in Processors
// ============================================================================

/// Compares both texts as one chunk pair
#[derive(Debug, Clone)]
pub struct WholeDocumentProcessor {
    tokenizer: Box<dyn Tokenizer>,
    algorithm: Box<dyn AlignmentAlgorithm>,
}

impl WholeDocumentProcessor {
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(PatternTokenizer::new()),
            algorithm: Box::new(BlockMatcher::new()),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

}

impl Default for WholeDocumentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for WholeDocumentProcessor {
    fn process(&self, source: &str, test: &str) -> Vec<ChunkDiff> {
        let source = Chunk::new(self.tokenizer.tokenize(&mark_paragraphs(source)));
        let test = Chunk::new(self.tokenizer.tokenize(&mark_paragraphs(test)));
        let opcodes = self.algorithm.align(&source.tokens, &test.tokens);

        tracing::debug!(
            processor = self.name(),
            tokenizer = self.tokenizer.name(),
            source_tokens = source.len(),
            test_tokens = test.len(),
            opcodes = opcodes.len(),
            "processed"
        );

        vec![ChunkDiff::new(source, test, opcodes)]
    }

    fn name(&self) -> &str {
        "whole_document"
    }

    fn clone_box(&self) -> Box<dyn Processor> {
        Box::new(self.clone())
    }
}

/// Aligns sentences first, then tokens inside each aligned sentence run
///
/// Paragraph markers are units of their own, so an edit never straddles a
/// paragraph boundary unless the boundary itself changed.
#[derive(Debug, Clone)]
pub struct SentenceProcessor {
    segmenter: Box<dyn SentenceSegmenter>,
    tokenizer: Box<dyn Tokenizer>,
    algorithm: Box<dyn AlignmentAlgorithm>,
}

impl SentenceProcessor {
    pub fn new(segmenter: Box<dyn SentenceSegmenter>) -> Self {
        Self {
            segmenter,
            tokenizer: Box::new(PatternTokenizer::new()),
            algorithm: Box::new(BlockMatcher::new()),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Sentences and paragraph markers of `text`, concatenating to its marker-joined form
    pub fn units(&self, text: &str) -> Vec<String> {
        let mut units: Vec<String> = Vec::new();
        for (n, paragraph) in split_paragraphs(text).into_iter().enumerate() {
            if n > 0 {
                if let Some(last) = units.last_mut() {
                    last.push(' ');
                }
                units.push(MARKER_TOKEN.to_string());
            }
            units.extend(
                self.segmenter
                    .segment(paragraph)
                    .into_iter()
                    .filter(|sentence| !sentence.is_empty())
                    .map(str::to_string),
            );
        }
        units
    }

    fn chunk_pair(&self, source: &[String], test: &[String], location: String) -> ChunkDiff {
        let source = Chunk::new(self.tokenizer.tokenize(&source.concat())).with_location(&location);
        let test = Chunk::new(self.tokenizer.tokenize(&test.concat())).with_location(location);
        let opcodes = self.algorithm.align(&source.tokens, &test.tokens);
        ChunkDiff::new(source, test, opcodes)
    }
}

#[cfg(feature = "sentences")]
impl Default for SentenceProcessor {
    fn default() -> Self {
        Self::new(Box::new(UnicodeSentenceSegmenter))
    }
}

impl Processor for SentenceProcessor {
    fn process(&self, source: &str, test: &str) -> Vec<ChunkDiff> {
        let source_units = self.units(source);
        let test_units = self.units(test);
        let unit_ops = self.algorithm.align(&source_units, &test_units);

        let mut chunks = Vec::new();
        for op in &unit_ops {
            if op.tag == EditType::Equal {
                for k in 0..op.i2 - op.i1 {
                    let (i, j) = (op.i1 + k, op.j1 + k);
                    chunks.push(self.chunk_pair(
                        &source_units[i..i + 1],
                        &test_units[j..j + 1],
                        format!("sentence {}", i + 1),
                    ));
                }
            } else {
                chunks.push(self.chunk_pair(
                    &source_units[op.source_range()],
                    &test_units[op.test_range()],
                    format!("sentence {}", op.i1 + 1),
                ));
            }
        }

        tracing::debug!(
            processor = self.name(),
            segmenter = self.segmenter.name(),
            source_units = source_units.len(),
            test_units = test_units.len(),
            chunks = chunks.len(),
            "processed"
        );

        chunks
    }

    fn name(&self) -> &str {
        "sentences"
    }

    fn clone_box(&self) -> Box<dyn Processor> {
        Box::new(self.clone())
    }
}

// ============================================================================
// Chunking Strategy
// ============================================================================

/// Which processor a comparison runs with
#[derive(Debug, Clone, Default)]
pub enum ChunkingStrategy {
    /// One chunk pair for the whole document
    #[default]
    WholeDocument,
    /// Sentence-by-sentence alignment with the given segmenter
    Sentences(Box<dyn SentenceSegmenter>),
}

impl ChunkingStrategy {
    /// Sentence chunking with the bundled segmenter
    ///
    /// Fails with `CapabilityUnavailable` when the `sentences` feature is off.
    pub fn sentences() -> Result<Self> {
        #[cfg(feature = "sentences")]
        {
            Ok(ChunkingStrategy::Sentences(Box::new(UnicodeSentenceSegmenter)))
        }
        #[cfg(not(feature = "sentences"))]
        {
            Err(RedlineError::CapabilityUnavailable {
                capability: "Sentence segmentation",
                feature: "sentences",
            })
        }
    }

    /// Sentence chunking with a caller-supplied segmenter
    pub fn with_segmenter(segmenter: Box<dyn SentenceSegmenter>) -> Self {
        ChunkingStrategy::Sentences(segmenter)
    }

    pub fn name(&self) -> &str {
        match self {
            ChunkingStrategy::WholeDocument => "whole",
            ChunkingStrategy::Sentences(_) => "sentences",
        }
    }

    /// Build the processor for this strategy
    pub fn build(&self, tokenizer: Box<dyn Tokenizer>) -> Box<dyn Processor> {
        match self {
            ChunkingStrategy::WholeDocument => {
                Box::new(WholeDocumentProcessor::new().with_tokenizer(tokenizer))
            }
            ChunkingStrategy::Sentences(segmenter) => {
                Box::new(SentenceProcessor::new(segmenter.clone()).with_tokenizer(tokenizer))
            }
        }
    }
}

impl FromStr for ChunkingStrategy {
    type Err = RedlineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "whole" | "whole_document" => Ok(ChunkingStrategy::WholeDocument),
            "sentences" => ChunkingStrategy::sentences(),
            other => Err(RedlineError::InvalidChunking {
                given: other.to_string(),
            }),
        }
    }
}
