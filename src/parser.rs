//! lisc Parser - recursive descent over the token stream
//!
//! One forward pass, one stack frame per nesting level. The grammar has
//! a single compound form, the call expression, so the parser is a
//! top-level loop plus one recursive function.

use crate::ast::{CallExpr, Expr, Program};
use crate::error::{LiscError, LiscResult};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the whole token stream into a [`Program`].
    ///
    /// Every top-level form must be a parenthesized call expression.
    /// Any other token at the top level is a syntax error, not a silent
    /// skip.
    pub fn parse(&mut self) -> LiscResult<Program> {
        let start = self.current_span();
        let mut body = Vec::new();

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::OpenParen => body.push(self.parse_call()?),
                _ => {
                    return Err(LiscError::parser(
                        format!(
                            "expected `(` at top level, found {}",
                            token.kind.describe()
                        ),
                        token.span,
                    ))
                }
            }
        }

        let span = start.merge(self.last_span());
        Ok(Program { body, span })
    }

    /// Parse one call expression. The cursor sits on its `(`; on return
    /// the matching `)` has been consumed.
    ///
    /// Recurses once per nesting level, so the maximum nesting depth is
    /// bounded by the call stack.
    fn parse_call(&mut self) -> LiscResult<CallExpr> {
        let start = self.current_span();
        self.pos += 1; // consume `(`

        let name = match self.next_token() {
            Some(Token {
                kind: TokenKind::Identifier(name),
                ..
            }) => name,
            Some(token) => {
                return Err(LiscError::parser(
                    format!(
                        "expected function name after `(`, found {}",
                        token.kind.describe()
                    ),
                    token.span,
                ))
            }
            None => {
                return Err(LiscError::parser(
                    "unexpected end of input: expected function name after `(`",
                    self.eof_span(),
                ))
            }
        };

        let mut args = Vec::new();
        loop {
            let Some(token) = self.peek() else {
                return Err(LiscError::parser(
                    format!("unexpected end of input: `{}` is missing a closing `)`", name),
                    self.eof_span(),
                ));
            };
            let (kind, span) = (token.kind.clone(), token.span);

            match kind {
                TokenKind::CloseParen => {
                    self.pos += 1;
                    return Ok(CallExpr {
                        name,
                        args,
                        span: start.merge(span),
                    });
                }
                TokenKind::OpenParen => args.push(Expr::Call(self.parse_call()?)),
                TokenKind::Number(value) => {
                    self.pos += 1;
                    args.push(Expr::NumberLiteral { value, span });
                }
                // Char and string literals become the same node; the
                // distinction only ever mattered to the lexer.
                TokenKind::CharLiteral(value) | TokenKind::StringLiteral(value) => {
                    self.pos += 1;
                    args.push(Expr::StringLiteral { value, span });
                }
                TokenKind::Identifier(_) => {
                    return Err(LiscError::parser(
                        format!("unexpected {} in argument position", kind.describe()),
                        span,
                    ))
                }
            }
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn current_span(&self) -> Span {
        self.peek().map(|t| t.span).unwrap_or_else(|| self.eof_span())
    }

    fn last_span(&self) -> Span {
        if self.pos == 0 {
            self.eof_span()
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    // Zero-width span just past the final token.
    fn eof_span(&self) -> Span {
        match self.tokens.last() {
            Some(token) => Span::new(token.span.end, token.span.end),
            None => Span::new(0, 0),
        }
    }
}
