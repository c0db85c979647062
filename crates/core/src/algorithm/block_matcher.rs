use crate::algorithm::AlignmentAlgorithm;
use crate::diff::{EditType, Opcode};
use rustc_hash::FxHashMap;

/// A common run: `size` tokens starting at `source[i]` and `test[j]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchingBlock {
    pub i: usize,
    pub j: usize,
    pub size: usize,
}

/// Longest-matching-block alignment
///
/// Finds the longest run of tokens common to both sequences, then repeats
/// on the ranges before and after it until no common token is left.
/// Tokens are compared with surrounding whitespace stripped. Among equally
/// long runs the one starting earliest in the source wins, then the one
/// starting earliest in the test sequence.
///
/// Pending ranges are kept on an explicit stack, so inputs with no common
/// runs at all do not grow the call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockMatcher;

impl BlockMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Maximal common runs in order, followed by the `(len(source), len(test), 0)` sentinel
    pub fn matching_blocks<S: AsRef<str>>(&self, source: &[S], test: &[S]) -> Vec<MatchingBlock> {
        Index::new(source, test).matching_blocks()
    }

    /// Edit operations turning `source` into `test`
    pub fn opcodes<S: AsRef<str>>(&self, source: &[S], test: &[S]) -> Vec<Opcode> {
        let blocks = self.matching_blocks(source, test);
        let mut ops = Vec::with_capacity(blocks.len() * 2);
        let (mut i, mut j) = (0, 0);

        for block in blocks {
            let tag = match (i < block.i, j < block.j) {
                (true, true) => Some(EditType::Replace),
                (true, false) => Some(EditType::Delete),
                (false, true) => Some(EditType::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                ops.push(Opcode::new(tag, i, block.i, j, block.j));
            }

            i = block.i + block.size;
            j = block.j + block.size;
            if block.size > 0 {
                ops.push(Opcode::new(EditType::Equal, block.i, i, block.j, j));
            }
        }

        ops
    }
}

impl AlignmentAlgorithm for BlockMatcher {
    fn align(&self, source: &[String], test: &[String]) -> Vec<Opcode> {
        self.opcodes(source, test)
    }

    fn name(&self) -> &str {
        "block_matcher"
    }

    fn clone_box(&self) -> Box<dyn AlignmentAlgorithm> {
        Box::new(*self)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Stripped views of both sequences plus the positions of each test token
struct Index<'a> {
    source: Vec<&'a str>,
    test: Vec<&'a str>,
    /// Ascending test positions of every distinct stripped token
    positions: FxHashMap<&'a str, Vec<usize>>,
}

impl<'a> Index<'a> {
    fn new<S: AsRef<str>>(source: &'a [S], test: &'a [S]) -> Self {
        let source: Vec<&str> = source.iter().map(|t| t.as_ref().trim()).collect();
        let test: Vec<&str> = test.iter().map(|t| t.as_ref().trim()).collect();

        let mut positions: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
        for (j, token) in test.iter().enumerate() {
            positions.entry(*token).or_default().push(j);
        }

        Self {
            source,
            test,
            positions,
        }
    }

    /// Longest common run inside `source[alo..ahi]` and `test[blo..bhi]`
    ///
    /// Returns a block of size 0 at `(alo, blo)` when the ranges share nothing.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let mut best = MatchingBlock {
            i: alo,
            j: blo,
            size: 0,
        };

        // run_len[j] = length of the common run ending at source[i - 1], test[j]
        let mut run_len: FxHashMap<usize, usize> = FxHashMap::default();
        for i in alo..ahi {
            let mut next_run_len = FxHashMap::default();
            if let Some(positions) = self.positions.get(self.source[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_run_len.insert(j, k);
                    if k > best.size {
                        best = MatchingBlock {
                            i: i + 1 - k,
                            j: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            run_len = next_run_len;
        }

        best
    }

    fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let (la, lb) = (self.source.len(), self.test.len());
        let mut pending = vec![(0, la, 0, lb)];
        let mut found = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            tracing::trace!(i = block.i, j = block.j, size = block.size, "matching block");

            if alo < block.i && blo < block.j {
                pending.push((alo, block.i, blo, block.j));
            }
            let (i_end, j_end) = (block.i + block.size, block.j + block.size);
            if i_end < ahi && j_end < bhi {
                pending.push((i_end, ahi, j_end, bhi));
            }
            found.push(block);
        }
        found.sort_unstable();

        // Collapse runs that turned out to be adjacent in both sequences
        let mut blocks: Vec<MatchingBlock> = Vec::with_capacity(found.len() + 1);
        for block in found {
            match blocks.last_mut() {
                Some(last) if last.i + last.size == block.i && last.j + last.size == block.j => {
                    last.size += block.size;
                }
                _ => blocks.push(block),
            }
        }
        blocks.push(MatchingBlock {
            i: la,
            j: lb,
            size: 0,
        });

        blocks
    }
}
