//! End-to-end comparisons through the public API

use redline_core::{
    ChangeKind, ChunkingStrategy, MarkdownStyle, OutputFormat, RedlineConfig, RedlineError,
    Redlines,
};

const FOX: &str = "The quick brown fox jumps over the lazy dog.";
const FOX_WALKS: &str = "The quick brown fox walks past the lazy dog.";

#[test]
fn replaced_words_form_one_record() {
    let redlines = Redlines::new(FOX).with_test(FOX_WALKS);
    let changes = redlines.changes().unwrap();

    assert_eq!(changes.len(), 1);
    let change = &changes[0];
    assert_eq!(change.kind, ChangeKind::Replace);
    assert_eq!(change.source_text.as_deref(), Some("jumps over "));
    assert_eq!(change.test_text.as_deref(), Some("walks past "));
    assert_eq!(change.source_position, Some((4, 6)));
    assert_eq!(change.test_position, Some((4, 6)));
}

#[test]
fn inserted_word_forms_one_record() {
    let redlines = Redlines::new("The quick brown fox jumps over the dog.").with_test(FOX);
    let changes = redlines.changes().unwrap();

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Insert);
    assert_eq!(changes[0].test_text.as_deref(), Some("lazy "));
}

#[test]
fn identical_texts_have_no_changes() {
    let redlines = Redlines::new("Hello world").with_test("Hello world");
    assert!(redlines.changes().unwrap().is_empty());
    assert_eq!(redlines.stats().unwrap().total_changes, 0);
}

#[test]
fn mixed_changes_in_order() {
    let redlines = Redlines::new("A B C D E").with_test("A X C E F");
    let changes = redlines.changes().unwrap();

    let kinds: Vec<_> = changes.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![ChangeKind::Replace, ChangeKind::Delete, ChangeKind::Insert]
    );
    assert_eq!(changes[0].source_text.as_deref(), Some("B "));
    assert_eq!(changes[0].test_text.as_deref(), Some("X "));
    assert_eq!(changes[1].source_text.as_deref(), Some("D "));
    assert_eq!(changes[2].test_text.as_deref(), Some("F"));

    let stats = redlines.stats().unwrap();
    assert_eq!(stats.chars_added, 3);
    assert_eq!(stats.chars_deleted, 4);
    assert_eq!(stats.chars_net_change, -1);
}

#[test]
fn paragraph_change_stays_in_its_paragraph() {
    let redlines = Redlines::new("First.\n\nSecond.")
        .with_config(RedlineConfig::new().with_markdown_style(MarkdownStyle::None))
        .with_test("First.\n\nSecond changed.");

    let changes = redlines.changes().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].source_text.as_deref(), Some("Second."));
    assert_eq!(changes[0].source_position, Some((2, 3)));

    let output = redlines.output_markdown().unwrap();
    assert!(output.starts_with("First. \n\n"), "{output:?}");
}

#[test]
fn opcodes_have_the_classic_shape() {
    let redlines = Redlines::new(FOX).with_test(FOX_WALKS);
    let ops: Vec<_> = redlines
        .opcodes()
        .unwrap()
        .iter()
        .map(|op| op.as_tuple())
        .collect();
    assert_eq!(
        ops,
        vec![
            ("equal", 0, 4, 0, 4),
            ("replace", 4, 6, 4, 6),
            ("equal", 6, 9, 6, 9)
        ]
    );
}

#[test]
fn style_changes_markup_only() {
    let plain = Redlines::new(FOX).with_test(FOX_WALKS);
    let styled = Redlines::new(FOX)
        .with_config(RedlineConfig::new().with_markdown_style(MarkdownStyle::BbCode))
        .with_test(FOX_WALKS);

    assert_eq!(plain.opcodes().unwrap(), styled.opcodes().unwrap());
    assert_eq!(
        styled.output_markdown().unwrap(),
        "The quick brown fox [s][color=red]jumps over [/color][/s][b][color=green]walks past [/color][/b]the lazy dog."
    );
}

#[test]
fn json_positions_slice_the_inputs() {
    let redlines = Redlines::new(FOX).with_test(FOX_WALKS);
    let data: serde_json::Value =
        serde_json::from_str(&redlines.output_json(false).unwrap()).unwrap();

    let source: Vec<char> = FOX.chars().collect();
    let test: Vec<char> = FOX_WALKS.chars().collect();
    let slice = |chars: &[char], span: &serde_json::Value| -> String {
        let start = span[0].as_u64().unwrap() as usize;
        let end = span[1].as_u64().unwrap() as usize;
        chars[start..end].iter().collect()
    };

    for change in data["changes"].as_array().unwrap() {
        match change["type"].as_str().unwrap() {
            "equal" => {
                assert_eq!(slice(&source, &change["source_position"]), change["text"]);
                assert_eq!(slice(&test, &change["test_position"]), change["text"]);
            }
            "replace" => {
                assert_eq!(
                    slice(&source, &change["source_position"]),
                    change["source_text"]
                );
                assert_eq!(slice(&test, &change["test_position"]), change["test_text"]);
            }
            other => panic!("unexpected operation {other}"),
        }
    }
}

#[test]
fn json_tokens_rebuild_the_inputs() {
    let redlines = Redlines::new(FOX).with_test(FOX_WALKS);
    let data: serde_json::Value =
        serde_json::from_str(&redlines.output_json(true).unwrap()).unwrap();

    let join = |tokens: &serde_json::Value| -> String {
        tokens
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t.as_str().unwrap())
            .collect()
    };
    assert_eq!(join(&data["source_tokens"]), FOX);
    assert_eq!(join(&data["test_tokens"]), FOX_WALKS);
}

#[test]
fn compare_reports_missing_test() {
    let mut redlines = Redlines::new(FOX);
    let err = redlines.compare(None, OutputFormat::Markdown).unwrap_err();
    assert!(matches!(err, RedlineError::MissingTestForCompare));

    let output = redlines
        .compare(Some(FOX_WALKS), OutputFormat::Terminal)
        .unwrap();
    assert!(output.contains("walks past "));
}

#[test]
fn custom_segmenter_drives_sentence_chunking() {
    use redline_core::processor::SentenceSegmenter;

    #[derive(Clone)]
    struct Lines;

    impl SentenceSegmenter for Lines {
        fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
            text.split_inclusive("; ").collect()
        }

        fn name(&self) -> &str {
            "semicolons"
        }

        fn clone_box(&self) -> Box<dyn SentenceSegmenter> {
            Box::new(self.clone())
        }
    }

    let config =
        RedlineConfig::new().with_chunking(ChunkingStrategy::with_segmenter(Box::new(Lines)));
    let redlines = Redlines::new("one; two; three")
        .with_config(config)
        .with_test("one; 2; three");

    let result = redlines.result().unwrap();
    assert_eq!(result.chunks.len(), 3);
    assert_eq!(result.chunks[1].source.location.as_deref(), Some("sentence 2"));

    let changes = redlines.changes().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].source_text.as_deref(), Some("two; "));
    assert_eq!(changes[0].source_position, Some((1, 2)));
}

#[cfg(feature = "sentences")]
#[test]
fn sentence_chunking_matches_whole_document_changes() {
    let source = "The cat sat. The dog ran away quickly. Birds sang.";
    let test = "The cat sat. The dog walked away. Birds sang.";

    let whole = Redlines::new(source).with_test(test);
    let sentences = Redlines::new(source)
        .with_config(RedlineConfig::new().with_chunking(ChunkingStrategy::sentences().unwrap()))
        .with_test(test);

    assert_eq!(
        whole.output_markdown().unwrap(),
        sentences.output_markdown().unwrap()
    );
    assert_eq!(sentences.result().unwrap().chunks.len(), 3);
}
