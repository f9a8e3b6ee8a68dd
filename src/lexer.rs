//! lisc Lexer - Lisp-style call expression tokens
//!
//! A single forward scan over the source text, producing tokens in the
//! order encountered. The grammar is tiny: parentheses, identifiers,
//! digit runs, and quoted character/string literals. Anything else is a
//! lexical error that stops the scan.

use crate::error::{LiscError, LiscResult};
use crate::span::Span;
use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    // A quote closes the literal unless it is escaped; an escaped
    // backslash right before it does not count as an escape. The regex
    // consumes `\x` pairs atomically, which encodes exactly that rule.
    // Payloads keep the inner text raw, delimiters stripped.
    #[regex(r"'([^'\\]|\\.)*'", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    CharLiteral(String),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    StringLiteral(String),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

impl TokenKind {
    /// Variant name, used by the token dump.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::Number(_) => "Number",
            TokenKind::CharLiteral(_) => "CharLiteral",
            TokenKind::StringLiteral(_) => "StringLiteral",
            TokenKind::Identifier(_) => "Identifier",
        }
    }

    /// The captured text: the payload for valued tokens, the paren
    /// character itself otherwise.
    pub fn text(&self) -> &str {
        match self {
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Number(s)
            | TokenKind::CharLiteral(s)
            | TokenKind::StringLiteral(s)
            | TokenKind::Identifier(s) => s,
        }
    }

    /// Human-readable form for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::OpenParen => "`(`".to_string(),
            TokenKind::CloseParen => "`)`".to_string(),
            TokenKind::Number(value) => format!("number `{}`", value),
            TokenKind::CharLiteral(value) => format!("character literal `'{}'`", value),
            TokenKind::StringLiteral(value) => format!("string literal `\"{}\"`", value),
            TokenKind::Identifier(name) => format!("identifier `{}`", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Tokenize the whole source, failing on the first unrecognized
    /// character or unterminated literal.
    pub fn tokenize(&self) -> LiscResult<Vec<Token>> {
        let mut lex = TokenKind::lexer(self.source);
        let mut tokens = Vec::new();

        while let Some(result) = lex.next() {
            let span = Span::new(lex.span().start, lex.span().end);
            match result {
                Ok(kind) => tokens.push(Token::new(kind, span)),
                Err(_) => return Err(self.classify_failure(span)),
            }
        }

        Ok(tokens)
    }

    // The literal rules only fail to match when no unescaped closing
    // delimiter follows, so an error sitting on a quote means the
    // literal ran off the end of the input.
    fn classify_failure(&self, span: Span) -> LiscError {
        let rest = &self.source[span.start..];
        if rest.starts_with('\'') {
            LiscError::lexer(
                "unterminated character literal",
                Span::new(span.start, self.source.len()),
            )
        } else if rest.starts_with('"') {
            LiscError::lexer(
                "unterminated string literal",
                Span::new(span.start, self.source.len()),
            )
        } else {
            LiscError::lexer(
                format!(
                    "unexpected character: '{}'",
                    &self.source[span.start..span.end]
                ),
                span,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn tokenizes_a_nested_call() {
        use TokenKind::*;
        let actual = kinds("(add 2 (subtract 4 2))");
        let expected = vec![
            OpenParen,
            Identifier("add".to_string()),
            Number("2".to_string()),
            OpenParen,
            Identifier("subtract".to_string()),
            Number("4".to_string()),
            Number("2".to_string()),
            CloseParen,
            CloseParen,
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn spans_cover_the_raw_text() {
        let tokens = Lexer::new("(add 42)").tokenize().unwrap();
        assert_eq!(tokens[1].span, Span::new(1, 4));
        assert_eq!(tokens[2].span, Span::new(5, 7));
    }

    #[test]
    fn whitespace_is_skipped_not_emitted() {
        let actual = kinds("(\tadd\n  1\r\n2 )");
        assert_eq!(actual.len(), 5);
    }

    #[test]
    fn digit_runs_keep_their_full_text() {
        assert_eq!(kinds("007"), vec![TokenKind::Number("007".to_string())]);
    }

    #[test]
    fn identifiers_allow_underscores_and_digits() {
        assert_eq!(
            kinds("_print2 x"),
            vec![
                TokenKind::Identifier("_print2".to_string()),
                TokenKind::Identifier("x".to_string()),
            ]
        );
    }

    #[test]
    fn quoted_literals_strip_delimiters() {
        assert_eq!(
            kinds(r#"'h' "hello""#),
            vec![
                TokenKind::CharLiteral("h".to_string()),
                TokenKind::StringLiteral("hello".to_string()),
            ]
        );
    }

    #[test]
    fn escaped_quote_does_not_close_a_literal() {
        // don\'t stays one literal, backslash kept raw
        assert_eq!(
            kinds(r"'don\'t'"),
            vec![TokenKind::CharLiteral(r"don\'t".to_string())]
        );
    }

    #[test]
    fn escaped_backslash_before_the_closing_quote() {
        assert_eq!(
            kinds(r#""x\\""#),
            vec![TokenKind::StringLiteral(r"x\\".to_string())]
        );
    }

    #[test]
    fn empty_literals_are_allowed() {
        assert_eq!(
            kinds(r#"'' """#),
            vec![
                TokenKind::CharLiteral(String::new()),
                TokenKind::StringLiteral(String::new()),
            ]
        );
    }

    #[test]
    fn empty_source_yields_no_tokens() {
        assert_eq!(kinds(""), vec![]);
        assert_eq!(kinds("  \n\t"), vec![]);
    }

    #[test]
    fn parens_stay_balanced_in_the_token_stream() {
        let tokens = Lexer::new("(add 2 (subtract 4 2))\n(neg 1)")
            .tokenize()
            .unwrap();
        let opens = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::OpenParen)
            .count();
        let closes = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::CloseParen)
            .count();
        assert_eq!(opens, closes);
    }

    #[test]
    fn unrecognized_character_is_a_lexical_error() {
        let err = Lexer::new("(add 1 #)").tokenize().unwrap_err();
        match err {
            LiscError::Lexer { message, span } => {
                assert_eq!(message, "unexpected character: '#'");
                assert_eq!(span, Span::new(7, 8));
            }
            other => panic!("expected a lexical error, got {:?}", other),
        }
    }

    #[test]
    fn no_tokens_survive_a_lexical_error() {
        assert!(Lexer::new("# (add 1 2)").tokenize().is_err());
    }

    #[test]
    fn unterminated_string_literal() {
        let err = Lexer::new(r#"(greet "hello)"#).tokenize().unwrap_err();
        match err {
            LiscError::Lexer { message, span } => {
                assert_eq!(message, "unterminated string literal");
                assert_eq!(span, Span::new(7, 14));
            }
            other => panic!("expected a lexical error, got {:?}", other),
        }
    }

    #[test]
    fn unterminated_char_literal() {
        let err = Lexer::new("'h").tokenize().unwrap_err();
        match err {
            LiscError::Lexer { message, .. } => {
                assert_eq!(message, "unterminated character literal");
            }
            other => panic!("expected a lexical error, got {:?}", other),
        }
    }

    #[test]
    fn escape_at_end_of_input_is_unterminated() {
        // The trailing \' never closes the literal.
        let err = Lexer::new(r"'ab\'").tokenize().unwrap_err();
        assert!(matches!(err, LiscError::Lexer { .. }));
    }

    #[test]
    fn token_text_round_trips_the_captured_substring() {
        let source = r#"(greet "hi")"#;
        let tokens = Lexer::new(source).tokenize().unwrap();
        assert_eq!(tokens[0].kind.text(), "(");
        assert_eq!(tokens[1].kind.text(), "greet");
        assert_eq!(tokens[2].kind.text(), "hi");
        assert_eq!(tokens[3].kind.text(), ")");
    }
}
