//! Markdown / HTML-ish markup output

use super::insert_pieces;
use crate::config::MarkdownStyle;
use crate::diff::{ChunkDiff, DiffResult, EditType};
use crate::paragraphs::{restore_paragraph_breaks, PARAGRAPH_BREAK};
use std::borrow::Cow;

const RED_GREEN_INS: &str = "<span style='color:green;font-weight:700;'>";
const RED_INS: &str = "<span style='color:red;font-weight:700;'>";
const STRUCK_RED_DEL: &str = "<span style='color:red;font-weight:700;text-decoration:line-through;'>";
const SPAN_CLOSE: &str = "</span>";

/// Opening and closing markup for both change sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup<'a> {
    pub ins_open: Cow<'a, str>,
    pub ins_close: &'static str,
    pub del_open: Cow<'a, str>,
    pub del_close: &'static str,
}

impl<'a> Markup<'a> {
    fn fixed(
        ins_open: &'static str,
        ins_close: &'static str,
        del_open: &'static str,
        del_close: &'static str,
    ) -> Self {
        Self {
            ins_open: Cow::Borrowed(ins_open),
            ins_close,
            del_open: Cow::Borrowed(del_open),
            del_close,
        }
    }

    fn insert(&self, text: &str) -> String {
        format!("{}{}{}", self.ins_open, text, self.ins_close)
    }

    fn delete(&self, text: &str) -> String {
        format!("{}{}{}", self.del_open, text, self.del_close)
    }
}

/// Markup table of a style
pub fn markup(style: &MarkdownStyle) -> Markup<'_> {
    match style {
        MarkdownStyle::None => Markup::fixed("<ins>", "</ins>", "<del>", "</del>"),
        MarkdownStyle::Red => Markup::fixed(RED_INS, SPAN_CLOSE, STRUCK_RED_DEL, SPAN_CLOSE),
        MarkdownStyle::RedGreen => {
            Markup::fixed(RED_GREEN_INS, SPAN_CLOSE, STRUCK_RED_DEL, SPAN_CLOSE)
        }
        MarkdownStyle::Ghfm => Markup::fixed("**", "**", "~~", "~~"),
        MarkdownStyle::BbCode => Markup::fixed(
            "[b][color=green]",
            "[/color][/b]",
            "[s][color=red]",
            "[/color][/s]",
        ),
        MarkdownStyle::Streamlit => Markup::fixed("**:green[", "]** ", "~~:red[", "]~~ "),
        MarkdownStyle::CustomCss {
            ins_class,
            del_class,
        } => Markup {
            ins_open: Cow::Owned(format!("<span class='{ins_class}'>")),
            ins_close: SPAN_CLOSE,
            del_open: Cow::Owned(format!("<span class='{del_class}'>")),
            del_close: SPAN_CLOSE,
        },
    }
}

/// Render the whole result as markup in `style`
pub fn render_markdown(result: &DiffResult, style: &MarkdownStyle) -> String {
    render_chunk(&result.merged(), &markup(style))
}

fn render_chunk(diff: &ChunkDiff, markup: &Markup<'_>) -> String {
    let mut out = String::new();

    for op in &diff.opcodes {
        match op.tag {
            EditType::Equal => {
                out.push_str(&restore_paragraph_breaks(
                    &diff.source.text_of(op.source_range()),
                ));
            }
            EditType::Insert => {
                push_insert(&mut out, &diff.test.text_of(op.test_range()), markup);
            }
            // Markers stay inside deletions; restoring them too would double the breaks
            EditType::Delete => {
                out.push_str(&markup.delete(&diff.source.text_of(op.source_range())));
            }
            EditType::Replace => {
                out.push_str(&markup.delete(&diff.source.text_of(op.source_range())));
                push_insert(&mut out, &diff.test.text_of(op.test_range()), markup);
            }
        }
    }

    out
}

fn push_insert(out: &mut String, text: &str, markup: &Markup<'_>) {
    for (n, piece) in insert_pieces(text).enumerate() {
        if n > 0 {
            out.push_str(PARAGRAPH_BREAK);
        }
        out.push_str(&markup.insert(piece));
    }
}
