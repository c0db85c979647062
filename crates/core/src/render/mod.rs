//! Renderers
//!
//! Stateless formatters over a `DiffResult`. They walk the operation list
//! of the merged chunk pair; none of them influences which operations are
//! produced.
pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::{render_json, JsonReport};
pub use markdown::{markup, render_markdown, Markup};
pub use terminal::{render_terminal, TerminalRenderer};

use crate::paragraphs::MARKER_TOKEN;

/// Inserted text cut at paragraph markers
///
/// Each piece is wrapped on its own so markup never spans a paragraph break.
pub(crate) fn insert_pieces(text: &str) -> std::str::Split<'_, &'static str> {
    text.split(MARKER_TOKEN)
}
