//! Human-readable dumps of the token stream and the AST
//!
//! Strictly read-only over the pipeline's data structures; nothing here
//! feeds back into compilation. The CLI surfaces these through
//! `--emit-tokens` and `--emit-ast`.

use crate::ast::{CallExpr, Expr, Program};
use crate::lexer::Token;

/// One line per token: variant name and captured text.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::from("Tokens:\n");
    for token in tokens {
        out.push_str(&format!(
            "  {:<13} {}\n",
            token.kind.name(),
            token.kind.text()
        ));
    }
    out
}

/// Indented tree, two spaces per nesting level.
pub fn render_program(program: &Program) -> String {
    let mut out = String::from("AST:\n");
    for call in &program.body {
        render_call(&mut out, call, 1);
    }
    out
}

fn render_call(out: &mut String, call: &CallExpr, depth: usize) {
    indent(out, depth);
    out.push_str(&format!("CallExpression {}\n", call.name));
    for arg in &call.args {
        match arg {
            Expr::NumberLiteral { value, .. } => {
                indent(out, depth + 1);
                out.push_str(&format!("NumberLiteral {}\n", value));
            }
            Expr::StringLiteral { value, .. } => {
                indent(out, depth + 1);
                out.push_str(&format!("StringLiteral {}\n", value));
            }
            Expr::Call(inner) => render_call(out, inner, depth + 1),
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
