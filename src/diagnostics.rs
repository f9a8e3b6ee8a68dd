//! Pretty error reporting for lisc
//!
//! Renders a compile error with the offending source line and a caret
//! run under the error span.

use crate::error::LiscError;
use crate::span::Span;

pub struct Diagnostics<'a> {
    source: &'a str,
    filename: &'a str,
}

impl<'a> Diagnostics<'a> {
    pub fn new(source: &'a str, filename: &'a str) -> Self {
        Self { source, filename }
    }

    /// Format an error with source context.
    pub fn format_error(&self, error: &LiscError) -> String {
        match error {
            LiscError::Lexer { message, span } => self.render("lex", message, *span),
            LiscError::Parser { message, span } => self.render("parse", message, *span),
            LiscError::Io(e) => format!("\n\x1b[1;31merror\x1b[0m: IO error: {}\n", e),
        }
    }

    fn render(&self, stage: &str, message: &str, span: Span) -> String {
        let (line_num, col, line_content) = self.line_info(span);

        let mut out = String::new();
        out.push_str(&format!(
            "\n\x1b[1;31merror[{}]\x1b[0m: {}\n",
            stage, message
        ));
        out.push_str(&format!(
            "  \x1b[1;34m-->\x1b[0m {}:{}:{}\n",
            self.filename, line_num, col
        ));
        out.push_str("   \x1b[1;34m|\x1b[0m\n");
        out.push_str(&format!(
            "\x1b[1;34m{:>3} |\x1b[0m {}\n",
            line_num, line_content
        ));

        // Caret run clipped to the visible line, at least one caret.
        let offset = col - 1;
        let remaining = line_content.len().saturating_sub(offset);
        let carets = span.len().min(remaining).max(1);
        out.push_str(&format!(
            "   \x1b[1;34m|\x1b[0m {}\x1b[1;31m{}\x1b[0m\n",
            " ".repeat(offset),
            "^".repeat(carets)
        ));

        out
    }

    /// Resolve a span's start to (1-based line, 1-based column, line text).
    fn line_info(&self, span: Span) -> (usize, usize, &str) {
        let start = span.start.min(self.source.len());

        let mut line_num = 1;
        let mut line_start = 0;
        for (i, c) in self.source.char_indices() {
            if i >= start {
                break;
            }
            if c == '\n' {
                line_num += 1;
                line_start = i + 1;
            }
        }

        let line_end = self.source[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(self.source.len());

        (line_num, start - line_start + 1, &self.source[line_start..line_end])
    }
}

/// Format an error without source context.
pub fn format_simple_error(error: &LiscError) -> String {
    format!("{}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    #[test]
    fn line_info_resolves_lines_and_columns() {
        let source = "(add 1 1)\n(add 2 2)\n(neg 3)";
        let diag = Diagnostics::new(source, "test.lisc");

        let (line, col, content) = diag.line_info(Span::new(0, 1));
        assert_eq!((line, col, content), (1, 1, "(add 1 1)"));

        // `2` in the second form, offset 15
        let (line, col, content) = diag.line_info(Span::new(15, 16));
        assert_eq!((line, col, content), (2, 6, "(add 2 2)"));

        let (line, col, content) = diag.line_info(Span::new(20, 21));
        assert_eq!((line, col, content), (3, 1, "(neg 3)"));
    }

    #[test]
    fn line_info_clamps_past_the_end() {
        let diag = Diagnostics::new("(f)", "test.lisc");
        let (line, col, _) = diag.line_info(Span::new(3, 3));
        assert_eq!((line, col), (1, 4));
    }

    #[test]
    fn rendered_error_names_the_location() {
        let source = "(add 1 1)\n(add 2 #)";
        let err = Lexer::new(source).tokenize().unwrap_err();
        let rendered = Diagnostics::new(source, "bad.lisc").format_error(&err);

        assert!(rendered.contains("unexpected character: '#'"));
        assert!(rendered.contains("bad.lisc:2:8"));
        assert!(rendered.contains("(add 2 #)"));
    }
}
