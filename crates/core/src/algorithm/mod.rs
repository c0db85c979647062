//! Alignment algorithms
//!
//! Turns two token sequences into the ordered list of edit operations that
//! transforms one into the other.
pub mod block_matcher;

pub use block_matcher::BlockMatcher;

use crate::diff::Opcode;

/// Trait for alignment algorithms
///
/// Implementations must return operations whose ranges partition both
/// token sequences in order, with no gaps or overlaps.
pub trait AlignmentAlgorithm: Send + Sync {
    /// Compute the edit operations between two token sequences
    fn align(&self, source: &[String], test: &[String]) -> Vec<Opcode>;

    /// Get the name of this algorithm
    fn name(&self) -> &str;

    /// Clone this algorithm into a Box
    fn clone_box(&self) -> Box<dyn AlignmentAlgorithm>;
}

impl Clone for Box<dyn AlignmentAlgorithm> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for dyn AlignmentAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignmentAlgorithm")
            .field("name", &self.name())
            .finish()
    }
}

/// Align two token sequences with the default block matcher
///
/// ```rust
/// use redline_core::algorithm::align;
///
/// let ops = align(&["a ", "b ", "c"], &["a ", "x ", "c"]);
/// let tuples: Vec<_> = ops.iter().map(|op| op.as_tuple()).collect();
/// assert_eq!(
///     tuples,
///     vec![("equal", 0, 1, 0, 1), ("replace", 1, 2, 1, 2), ("equal", 2, 3, 2, 3)],
/// );
/// ```
pub fn align<S: AsRef<str>>(source: &[S], test: &[S]) -> Vec<Opcode> {
    BlockMatcher::new().opcodes(source, test)
}
