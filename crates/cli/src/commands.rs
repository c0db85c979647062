//! Subcommand execution
//!
//! Every command writes to the given sink and reports whether the texts
//! differ; `main` turns that into the process exit code.

use crate::cli::{Chunking, Command, CompareArgs, JsonArgs, MarkdownArgs};
use anstyle::{AnsiColor, Color, Style};
use anyhow::{Context, Result};
use redline_core::{ChunkingStrategy, MarkdownStyle, RedlineConfig, Redlines, Stats, TextInput};
use std::io::Write;

/// Exit code for failures, including argument errors reported by clap
pub const EXIT_ERROR: u8 = 2;

/// Whether a comparison found any change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}

impl Outcome {
    pub fn from_changed(changed: bool) -> Self {
        if changed {
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }

    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Changed => 0,
            Outcome::Unchanged => 1,
        }
    }
}

/// Run `command`, writing its output to `out`
pub fn run(command: &Command, use_color: bool, out: &mut impl Write) -> Result<Outcome> {
    match command {
        Command::Text(args) => text(args, use_color, out),
        Command::SimpleText(args) => simple_text(args, use_color, out),
        Command::Markdown(args) => markdown(args, out),
        Command::Json(args) => json(args, out),
        Command::Stats(args) => stats(args, use_color, out),
    }
}

fn text(args: &CompareArgs, use_color: bool, out: &mut impl Write) -> Result<Outcome> {
    let redlines = open_session(args, RedlineConfig::new())?;
    let redline = redlines.output_terminal(use_color)?;

    if args.quiet {
        writeln!(out, "{}", redline)?;
    } else {
        writeln!(
            out,
            "{}\n",
            heading(
                &format!("redline v{}", env!("CARGO_PKG_VERSION")),
                use_color
            )
        )?;
        writeln!(out, "{}\n{}\n", heading("Redline", use_color), redline)?;
        writeln!(out, "{}\n{}\n", heading("Source", use_color), redlines.source())?;
        writeln!(out, "{}\n{}", heading("Test", use_color), redlines.test()?)?;
    }

    outcome(&redlines)
}

fn simple_text(args: &CompareArgs, use_color: bool, out: &mut impl Write) -> Result<Outcome> {
    let redlines = open_session(args, RedlineConfig::new())?;
    writeln!(out, "{}", redlines.output_terminal(use_color)?)?;
    outcome(&redlines)
}

fn markdown(args: &MarkdownArgs, out: &mut impl Write) -> Result<Outcome> {
    let config = RedlineConfig::new().with_markdown_style(markdown_style(args));
    let redlines = open_session(&args.compare, config)?;
    writeln!(out, "{}", redlines.output_markdown()?)?;
    outcome(&redlines)
}

fn json(args: &JsonArgs, out: &mut impl Write) -> Result<Outcome> {
    let redlines = open_session(&args.compare, RedlineConfig::new())?;
    writeln!(out, "{}", redlines.output_json(args.pretty)?)?;
    outcome(&redlines)
}

fn stats(args: &CompareArgs, use_color: bool, out: &mut impl Write) -> Result<Outcome> {
    let redlines = open_session(args, RedlineConfig::new())?;
    let stats = redlines.stats()?;

    if !args.quiet {
        writeln!(out, "{}", heading("Change Statistics", use_color))?;
    }
    write!(out, "{}", format_stats(&stats))?;

    Ok(Outcome::from_changed(stats.total_changes > 0))
}

/// Statistics as `Label: value` lines
pub fn format_stats(stats: &Stats) -> String {
    let mut lines = vec![
        format!("Total Changes: {}", stats.total_changes),
        format!("Deletions: {}", stats.deletions),
        format!("Insertions: {}", stats.insertions),
        format!("Replacements: {}", stats.replacements),
        format!("Longest Change: {} chars", stats.longest_change_length),
        format!("Shortest Change: {} chars", stats.shortest_change_length),
        format!("Average Change: {:.2} chars", stats.average_change_length),
        format!("Change Ratio: {:.2}%", stats.change_ratio * 100.0),
        format!("Characters Added: {}", stats.chars_added),
        format!("Characters Deleted: {}", stats.chars_deleted),
        format!("Net Change: {:+} chars", stats.chars_net_change),
    ];
    if let Some(distance) = stats.levenshtein_distance {
        lines.push(format!("Edit Distance: {}", distance));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn open_session(args: &CompareArgs, config: RedlineConfig) -> Result<Redlines> {
    let source = TextInput::resolve(&args.source).context("failed to read SOURCE")?;
    let test = TextInput::resolve(&args.test).context("failed to read TEST")?;
    tracing::debug!(
        source_is_file = source.is_file(),
        test_is_file = test.is_file(),
        chunking = ?args.chunking,
        "inputs resolved"
    );

    let config = config.with_chunking(chunking_strategy(args.chunking)?);
    Ok(Redlines::from_document(&source)
        .with_config(config)
        .with_test_document(&test))
}

fn chunking_strategy(chunking: Chunking) -> Result<ChunkingStrategy> {
    match chunking {
        Chunking::Whole => Ok(ChunkingStrategy::WholeDocument),
        Chunking::Sentences => Ok(ChunkingStrategy::sentences()?),
    }
}

/// Style named on the command line, with `--ins-class`/`--del-class` applied
fn markdown_style(args: &MarkdownArgs) -> MarkdownStyle {
    match args.markdown_style.clone() {
        MarkdownStyle::CustomCss {
            ins_class,
            del_class,
        } => MarkdownStyle::CustomCss {
            ins_class: args.ins_class.clone().unwrap_or(ins_class),
            del_class: args.del_class.clone().unwrap_or(del_class),
        },
        other => {
            if args.ins_class.is_some() || args.del_class.is_some() {
                tracing::warn!(style = %other, "CSS classes only apply to custom_css; ignored");
            }
            other
        }
    }
}

fn outcome(redlines: &Redlines) -> Result<Outcome> {
    Ok(Outcome::from_changed(!redlines.result()?.is_empty()))
}

fn heading(title: &str, use_color: bool) -> String {
    if !use_color {
        return format!("== {} ==", title);
    }
    let style = Style::new()
        .bold()
        .fg_color(Some(Color::Ansi(AnsiColor::Red)));
    format!("{}{}{}", style.render(), title, style.render_reset())
}
