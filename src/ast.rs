//! lisc Abstract Syntax Tree
//!
//! The tree produced by parsing. A program is an ordered list of call
//! expressions; each argument is either a literal leaf or a nested
//! call. The char/string distinction from the lexer is gone here: both
//! collapse into [`Expr::StringLiteral`].
//!
//! Ownership is strictly single-parent: every node is owned by the
//! `Vec` of its parent, and the [`Program`] root owns the whole tree.

use crate::span::Span;

/// A complete lisc program
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level call expressions, in source order. This order is the
    /// emission order of the generated output.
    pub body: Vec<CallExpr>,
    pub span: Span,
}

/// `(name arg arg ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// Callee name; never empty.
    pub name: String,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// A call argument
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `42` — kept as its raw digit text
    NumberLiteral { value: String, span: Span },

    /// `"hello"` or `'h'` — inner text without delimiters
    StringLiteral { value: String, span: Span },

    /// `(name ...)` nested as an argument
    Call(CallExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::NumberLiteral { span, .. } | Expr::StringLiteral { span, .. } => *span,
            Expr::Call(call) => call.span,
        }
    }
}
