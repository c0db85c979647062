//! Terminal output with ANSI colors

use super::insert_pieces;
use crate::diff::{DiffResult, EditType};
use crate::paragraphs::restore_paragraph_breaks;
use anstyle::{AnsiColor, Color, Style};

/// Renders a diff for the console: green insertions, red struck-through deletions
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    use_color: bool,
    insert_style: Style,
    delete_style: Style,
}

impl TerminalRenderer {
    /// Creates a new renderer.
    pub fn new(use_color: bool) -> Self {
        let insert_style = if use_color {
            Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)))
        } else {
            Style::new()
        };

        let delete_style = if use_color {
            Style::new()
                .fg_color(Some(Color::Ansi(AnsiColor::Red)))
                .strikethrough()
        } else {
            Style::new()
        };

        Self {
            use_color,
            insert_style,
            delete_style,
        }
    }

    pub fn render(&self, result: &DiffResult) -> String {
        let diff = result.merged();
        let mut out = String::new();

        for op in &diff.opcodes {
            match op.tag {
                EditType::Equal => {
                    out.push_str(&restore_paragraph_breaks(
                        &diff.source.text_of(op.source_range()),
                    ));
                }
                EditType::Insert => {
                    self.push_insert(&mut out, &diff.test.text_of(op.test_range()));
                }
                EditType::Delete => {
                    out.push_str(&self.style_delete(&diff.source.text_of(op.source_range())));
                }
                EditType::Replace => {
                    out.push_str(&self.style_delete(&diff.source.text_of(op.source_range())));
                    self.push_insert(&mut out, &diff.test.text_of(op.test_range()));
                }
            }
        }

        out
    }

    fn push_insert(&self, out: &mut String, text: &str) {
        for piece in insert_pieces(text) {
            out.push_str(&self.style_insert(piece));
        }
    }

    fn style_insert(&self, s: &str) -> String {
        self.styled(self.insert_style, s)
    }

    fn style_delete(&self, s: &str) -> String {
        self.styled(self.delete_style, s)
    }

    fn styled(&self, style: Style, s: &str) -> String {
        if self.use_color && !s.is_empty() {
            format!("{}{}{}", style.render(), s, style.render_reset())
        } else {
            s.to_string()
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Render the whole result for a terminal
pub fn render_terminal(result: &DiffResult, use_color: bool) -> String {
    TerminalRenderer::new(use_color).render(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DiffEngine;

    fn diff(source: &str, test: &str) -> DiffResult {
        DiffEngine::default().diff(source, test)
    }

    #[test]
    fn test_plain_output() {
        let result = diff(
            "The quick brown fox jumps over the lazy dog.",
            "The quick brown fox walks past the lazy dog.",
        );
        assert_eq!(
            render_terminal(&result, false),
            "The quick brown fox jumps over walks past the lazy dog."
        );
    }

    #[test]
    fn test_colored_output() {
        let result = diff("Hello world", "Hello brave world");
        let output = render_terminal(&result, true);
        assert!(output.contains("\u{1b}[32mbrave \u{1b}[0m"), "{output:?}");
        assert!(output.starts_with("Hello "));
        assert!(output.ends_with("world"));
    }

    #[test]
    fn test_deleted_text_is_struck() {
        let result = diff("Hello cruel world", "Hello world");
        let output = render_terminal(&result, true);
        assert!(output.contains("cruel "));
        assert!(output.contains("\u{1b}["));
        assert_ne!(output, "Hello cruel world");
    }

    #[test]
    fn test_inserted_paragraph_pieces_are_concatenated() {
        let result = diff("Intro.", "Intro.\n\nNew paragraph.");
        assert_eq!(render_terminal(&result, false), "Intro.New paragraph.");
    }

    #[test]
    fn test_equal_text_restores_breaks() {
        let result = diff("First.\n\nSecond.", "First.\n\nSecond.");
        assert_eq!(render_terminal(&result, false), "First. \n\nSecond.");
    }
}
