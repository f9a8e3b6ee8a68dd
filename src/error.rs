//! Error types for the lisc compiler

use crate::span::Span;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LiscError {
    #[error("Lexical error at {span:?}: {message}")]
    Lexer { message: String, span: Span },

    #[error("Syntax error at {span:?}: {message}")]
    Parser { message: String, span: Span },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LiscError {
    pub fn lexer(message: impl Into<String>, span: Span) -> Self {
        LiscError::Lexer {
            message: message.into(),
            span,
        }
    }

    pub fn parser(message: impl Into<String>, span: Span) -> Self {
        LiscError::Parser {
            message: message.into(),
            span,
        }
    }

    /// The source span the error points at, if it carries one.
    pub fn span(&self) -> Option<Span> {
        match self {
            LiscError::Lexer { span, .. } | LiscError::Parser { span, .. } => Some(*span),
            LiscError::Io(_) => None,
        }
    }
}

/// Result type for lisc operations
pub type LiscResult<T> = Result<T, LiscError>;
