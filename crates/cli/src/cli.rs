//! Command-line argument parsing using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use redline_core::{CssClass, MarkdownStyle, RedlineError};

/// Compare two texts and show the differences as track changes.
///
/// Changes are shown with strike-throughs and underlines, the way a word
/// processor tracks changes. SOURCE and TEST are read from disk when they
/// name an existing file and taken as literal text otherwise.
///
/// Exits with 0 when changes were found, 1 when the texts match and 2 on
/// errors.
#[derive(Parser, Debug)]
#[command(name = "redline")]
#[command(version)]
pub struct Cli {
    /// Log more (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the redline together with the source and test texts.
    Text(CompareArgs),

    /// Print only the redline.
    SimpleText(CompareArgs),

    /// Print the redline as markdown.
    Markdown(MarkdownArgs),

    /// Print the comparison as a JSON document.
    Json(JsonArgs),

    /// Print change statistics.
    Stats(CompareArgs),
}

impl Command {
    /// Inputs shared by every subcommand
    pub fn compare_args(&self) -> &CompareArgs {
        match self {
            Command::Text(args) | Command::SimpleText(args) | Command::Stats(args) => args,
            Command::Markdown(args) => &args.compare,
            Command::Json(args) => &args.compare,
        }
    }
}

/// How texts are cut before alignment.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Chunking {
    /// Align both texts in one pass.
    #[default]
    Whole,
    /// Align sentence by sentence.
    Sentences,
}

/// Inputs of a comparison.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Original text, or a path to a UTF-8 file.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Changed text, or a path to a UTF-8 file.
    #[arg(value_name = "TEST")]
    pub test: String,

    /// Plain output without headers.
    #[arg(short, long)]
    pub quiet: bool,

    /// Chunking strategy.
    #[arg(long, value_enum, default_value = "whole")]
    pub chunking: Chunking,
}

/// Arguments for the `markdown` command.
#[derive(Args, Debug, Clone)]
pub struct MarkdownArgs {
    #[command(flatten)]
    pub compare: CompareArgs,

    /// Markup style: none, red, red_green, ghfm, bbcode, streamlit or custom_css.
    #[arg(
        short,
        long,
        value_name = "STYLE",
        default_value = "red_green",
        value_parser = parse_markdown_style
    )]
    pub markdown_style: MarkdownStyle,

    /// CSS class for insertions (custom_css only).
    #[arg(long, value_name = "CLASS")]
    pub ins_class: Option<CssClass>,

    /// CSS class for deletions (custom_css only).
    #[arg(long, value_name = "CLASS")]
    pub del_class: Option<CssClass>,
}

/// Style names are matched case-insensitively
fn parse_markdown_style(s: &str) -> Result<MarkdownStyle, RedlineError> {
    s.to_ascii_lowercase().parse()
}

/// Arguments for the `json` command.
#[derive(Args, Debug, Clone)]
pub struct JsonArgs {
    #[command(flatten)]
    pub compare: CompareArgs,

    /// Indent the JSON document.
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_simple_text_with_global_flags() {
        let cli = Cli::try_parse_from(["redline", "simple-text", "a", "b", "--no-color", "-vv"])
            .unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::SimpleText(_)));
        assert_eq!(cli.command.compare_args().source, "a");
        assert_eq!(cli.command.compare_args().test, "b");
    }

    #[test]
    fn parses_markdown_options() {
        let cli = Cli::try_parse_from([
            "redline",
            "markdown",
            "a",
            "b",
            "-m",
            "custom_css",
            "--ins-class",
            "added",
            "--chunking",
            "sentences",
        ])
        .unwrap();
        let Command::Markdown(args) = cli.command else {
            panic!("expected markdown command");
        };
        assert_eq!(args.markdown_style.name(), "custom_css");
        assert_eq!(args.ins_class.as_ref().map(CssClass::as_str), Some("added"));
        assert_eq!(args.del_class, None);
        assert_eq!(args.compare.chunking, Chunking::Sentences);
    }

    #[test]
    fn requires_both_inputs() {
        assert!(Cli::try_parse_from(["redline", "json", "only-source"]).is_err());
    }

    #[test]
    fn markdown_style_is_case_insensitive() {
        let cli = Cli::try_parse_from(["redline", "markdown", "a", "b", "-m", "GHFM"]).unwrap();
        let Command::Markdown(args) = cli.command else {
            panic!("expected markdown command");
        };
        assert_eq!(args.markdown_style, MarkdownStyle::Ghfm);
    }

    #[test]
    fn rejects_unknown_markdown_style() {
        let err = Cli::try_parse_from(["redline", "markdown", "a", "b", "-m", "purple"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("purple"));
    }

    #[test]
    fn rejects_invalid_css_class() {
        let err = Cli::try_parse_from([
            "redline",
            "markdown",
            "a",
            "b",
            "-m",
            "custom_css",
            "--del-class",
            "x'y",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn rejects_unknown_chunking() {
        assert!(Cli::try_parse_from(["redline", "stats", "a", "b", "--chunking", "pages"]).is_err());
    }
}
