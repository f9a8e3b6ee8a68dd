//! C-style call syntax backend
//!
//! Walks the program tree and emits one line per top-level call, in
//! body order. Nested calls render inline on the same line. This stage
//! cannot fail: every well-formed tree has a rendering.

use crate::ast::{CallExpr, Expr, Program};

/// Render a whole program, one newline-terminated line per top-level
/// call expression. The two-space line prefix is cosmetic.
pub fn generate(program: &Program) -> String {
    let mut out = String::new();
    for call in &program.body {
        out.push_str("  ");
        emit_call(&mut out, call);
        out.push('\n');
    }
    out
}

fn emit_call(out: &mut String, call: &CallExpr) {
    out.push_str(&call.name);
    out.push('(');
    for (i, arg) in call.args.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        match arg {
            Expr::NumberLiteral { value, .. } => out.push_str(value),
            // String literals always render double-quoted, whether they
            // started life as 'c' or "str".
            Expr::StringLiteral { value, .. } => {
                out.push('"');
                out.push_str(value);
                out.push('"');
            }
            Expr::Call(inner) => emit_call(out, inner),
        }
    }
    out.push(')');
}
