//! Aggregate statistics over change records
//!
//! All lengths are counted in characters (Unicode scalar values), never in
//! tokens or bytes.

use crate::changes::{ChangeKind, ChangeRecord};
use serde::Serialize;

/// Summary of the changes between source and test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    /// Deletions, insertions and replacements together
    pub total_changes: usize,
    pub deletions: usize,
    pub insertions: usize,
    pub replacements: usize,

    /// Length of the longest change (0 without changes)
    pub longest_change_length: usize,

    /// Length of the shortest change (0 without changes)
    pub shortest_change_length: usize,

    /// Mean change length (0.0 without changes)
    pub average_change_length: f64,

    /// Changed characters over the longer input, in `[0.0, 1.0]`
    pub change_ratio: f64,

    /// Test characters carried by inserts and replacements
    pub chars_added: usize,

    /// Source characters carried by deletes and replacements
    pub chars_deleted: usize,

    /// `chars_added - chars_deleted`
    pub chars_net_change: i64,

    /// Character-level edit distance between the full texts
    ///
    /// Independent of the token alignment, so it may disagree with the
    /// other figures in magnitude.
    pub levenshtein_distance: Option<usize>,
}

/// Aggregate `changes` between `source_text` and `test_text`
///
/// The edit distance is computed only when `with_edit_distance` is set; it
/// is quadratic in the text lengths.
pub fn derive_stats(
    changes: &[ChangeRecord],
    source_text: &str,
    test_text: &str,
    with_edit_distance: bool,
) -> Stats {
    let count = |kind: ChangeKind| changes.iter().filter(|c| c.kind == kind).count();

    let lengths: Vec<usize> = changes.iter().map(ChangeRecord::len).collect();
    let changed: usize = lengths.iter().sum();
    let average_change_length = if lengths.is_empty() {
        0.0
    } else {
        changed as f64 / lengths.len() as f64
    };

    let longest_input = source_text.chars().count().max(test_text.chars().count());
    let change_ratio = if longest_input == 0 {
        0.0
    } else {
        (changed as f64 / longest_input as f64).min(1.0)
    };

    let chars_added: usize = changes
        .iter()
        .filter(|c| c.kind != ChangeKind::Delete)
        .map(ChangeRecord::test_len)
        .sum();
    let chars_deleted: usize = changes
        .iter()
        .filter(|c| c.kind != ChangeKind::Insert)
        .map(ChangeRecord::source_len)
        .sum();

    Stats {
        total_changes: changes.len(),
        deletions: count(ChangeKind::Delete),
        insertions: count(ChangeKind::Insert),
        replacements: count(ChangeKind::Replace),
        longest_change_length: lengths.iter().copied().max().unwrap_or(0),
        shortest_change_length: lengths.iter().copied().min().unwrap_or(0),
        average_change_length,
        change_ratio,
        chars_added,
        chars_deleted,
        chars_net_change: chars_added as i64 - chars_deleted as i64,
        levenshtein_distance: with_edit_distance
            .then(|| levenshtein_distance(source_text, test_text)),
    }
}

/// Character-level Levenshtein distance
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows of the full matrix
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, c1) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, c2) in b.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::align;
    use crate::changes::derive_changes;
    use crate::diff::Chunk;
    use crate::tokenizers::tokenize_text;

    fn stats_between(source: &str, test: &str) -> Stats {
        let source_chunk = Chunk::new(tokenize_text(source));
        let test_chunk = Chunk::new(tokenize_text(test));
        let ops = align(&source_chunk.tokens, &test_chunk.tokens);
        let changes = derive_changes(&ops, &source_chunk, &test_chunk);
        derive_stats(&changes, source, test, true)
    }

    #[test]
    fn test_replace_stats() {
        let stats = stats_between(
            "The quick brown fox jumps over the lazy dog.",
            "The quick brown fox walks past the lazy dog.",
        );

        assert_eq!(stats.total_changes, 1);
        assert_eq!(stats.replacements, 1);
        assert_eq!(stats.longest_change_length, 11);
        assert_eq!(stats.shortest_change_length, 11);
        assert_eq!(stats.average_change_length, 11.0);
        assert!((stats.change_ratio - 11.0 / 44.0).abs() < 1e-9);
        assert_eq!(stats.chars_added, 11);
        assert_eq!(stats.chars_deleted, 11);
        assert_eq!(stats.chars_net_change, 0);
        assert!(stats.levenshtein_distance.unwrap() >= 1);
    }

    #[test]
    fn test_insert_and_delete_stats() {
        let inserted = stats_between("Hello world", "Hello beautiful world");
        assert_eq!(inserted.insertions, 1);
        assert_eq!(inserted.longest_change_length, 10);
        assert!((inserted.change_ratio - 10.0 / 21.0).abs() < 1e-9);
        assert_eq!(inserted.chars_added, 10);
        assert_eq!(inserted.chars_net_change, 10);

        let deleted = stats_between("Hello beautiful world", "Hello world");
        assert_eq!(deleted.deletions, 1);
        assert_eq!(deleted.chars_deleted, 10);
        assert_eq!(deleted.chars_net_change, -10);
    }

    #[test]
    fn test_mixed_operation_stats() {
        let stats = stats_between("A B C D E", "A X C E F");

        assert_eq!(stats.total_changes, 3);
        assert_eq!(
            (stats.replacements, stats.deletions, stats.insertions),
            (1, 1, 1)
        );
        assert_eq!(stats.longest_change_length, 2);
        assert_eq!(stats.shortest_change_length, 1);
        assert!((stats.average_change_length - 5.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.chars_added, 3);
        assert_eq!(stats.chars_deleted, 4);
        assert_eq!(stats.chars_net_change, -1);
    }

    #[test]
    fn test_no_change_stats() {
        for (source, test) in [("Hello world", "Hello world"), ("", "")] {
            let stats = stats_between(source, test);
            assert_eq!(stats.total_changes, 0);
            assert_eq!(stats.longest_change_length, 0);
            assert_eq!(stats.shortest_change_length, 0);
            assert_eq!(stats.average_change_length, 0.0);
            assert_eq!(stats.change_ratio, 0.0);
            assert_eq!(stats.chars_net_change, 0);
            assert_eq!(stats.levenshtein_distance, Some(0));
        }
    }

    #[test]
    fn test_unicode_lengths_are_characters() {
        let stats = stats_between("Hello 世界", "Hello 🌍");
        assert_eq!(stats.chars_deleted, 2);
        assert_eq!(stats.chars_added, 1);
        assert!((stats.change_ratio - 2.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_change_ratio_is_capped() {
        let stats = stats_between("a", "b c d e");
        assert!(stats.change_ratio <= 1.0);
    }

    #[test]
    fn test_edit_distance_is_optional() {
        let stats = derive_stats(&[], "abc", "abd", false);
        assert_eq!(stats.levenshtein_distance, None);
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("héllo", "hello"), 1);
    }
}
