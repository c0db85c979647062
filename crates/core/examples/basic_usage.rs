//! Basic usage example of the redline library

use redline_core::tokenizers::from_fn;
use redline_core::{compute_diff, MarkdownStyle, RedlineConfig, Redlines};

const LINE: &str = "----------------------------------------";

fn main() -> redline_core::Result<()> {
    println!("=== Redline Library Examples ===\n");

    // Example 1: Simple diff with default configuration
    example_simple_diff();

    // Example 2: Session with a markdown style
    example_markdown_styles()?;

    // Example 3: Custom tokenizer
    example_custom_tokenizer();

    // Example 4: Analyzing changes
    example_analyze_changes()?;

    Ok(())
}

fn example_simple_diff() {
    println!("Example 1: Simple Diff");
    println!("{}", LINE);

    let source = "Hello World! This is a test.";
    let test = "Hello Rust! This is a test.";

    let result = compute_diff(source, test, None);

    println!("Source: {}", source);
    println!("Test:   {}", test);
    println!("\nOperations:");
    for (i, op) in result.opcodes().iter().enumerate() {
        println!("  {}. {}", i + 1, op);
    }
    println!("\n");
}

fn example_markdown_styles() -> redline_core::Result<()> {
    println!("Example 2: Markdown Styles");
    println!("{}", LINE);

    let mut redlines = Redlines::new("The quick brown fox jumps over the lazy dog.")
        .with_test("The quick brown fox walks past the lazy dog.");

    for name in ["red_green", "none", "ghfm", "bbcode", "streamlit"] {
        redlines.set_markdown_style(name.parse::<MarkdownStyle>()?);
        println!("  {:<10} {}", name, redlines.output_markdown()?);
    }

    redlines.set_markdown_style(MarkdownStyle::custom_css("added", "removed")?);
    println!("  {:<10} {}", "custom_css", redlines.output_markdown()?);
    println!("\n");
    Ok(())
}

fn example_custom_tokenizer() {
    println!("Example 3: Custom Tokenizer");
    println!("{}", LINE);

    // One token per comma-separated field, keeping the separator
    let fields = from_fn(|text: &str| text.split_inclusive(',').map(str::to_string).collect());
    let config = RedlineConfig::new().with_tokenizer(fields);

    let result = compute_diff("red,green,blue", "red,yellow,blue", Some(config));
    for change in result.changes() {
        println!(
            "  {}: {:?} -> {:?}",
            change.kind, change.source_text, change.test_text
        );
    }
    println!("\n");
}

fn example_analyze_changes() -> redline_core::Result<()> {
    println!("Example 4: Analyzing Changes");
    println!("{}", LINE);

    let redlines = Redlines::new("A B C D E").with_test("A X C E F");

    for change in redlines.get_changes(None)? {
        println!(
            "  {:<8} source={:?} test={:?}",
            change.kind, change.source_text, change.test_text
        );
    }

    let stats = redlines.stats()?;
    println!("\nStatistics:");
    println!("  Total changes: {}", stats.total_changes);
    println!("  Change ratio:  {:.1}%", stats.change_ratio * 100.0);
    println!("  Net change:    {:+} characters", stats.chars_net_change);
    if let Some(distance) = stats.levenshtein_distance {
        println!("  Edit distance: {}", distance);
    }
    Ok(())
}
