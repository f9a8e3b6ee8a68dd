//! # lisc - a tiny call-expression compiler
//!
//! Lowers Lisp-style call expressions into C-style call syntax:
//!
//! ```text
//! (add 2 (subtract 4 2))   =>   add(2,subtract(4,2))
//! ```
//!
//! The pipeline is three strictly forward stages, each handing
//! ownership of its output to the next:
//! 1. [`lexer`] - source text to a token stream
//! 2. [`parser`] - token stream to the call expression tree
//! 3. [`codegen`] - tree walk emitting the target text
//!
//! A stage failure stops the pipeline; there is no partial output and
//! no error recovery.

pub mod ast;
pub mod codegen;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod span;

pub use ast::{CallExpr, Expr, Program};
pub use error::{LiscError, LiscResult};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use span::Span;

/// Compile lisc source to C-style call syntax.
pub fn compile(source: &str) -> LiscResult<String> {
    // 1. Lex
    let tokens = Lexer::new(source).tokenize()?;

    // 2. Parse
    let program = Parser::new(&tokens).parse()?;

    // 3. Generate code
    Ok(codegen::c::generate(&program))
}

/// Version of the lisc compiler
pub const VERSION: &str = "0.1.0";
