//! Rendering of compiled forms back to header text.
//!
//! `Display` for [`Expr`] produces a canonical formula with minimal
//! parenthesization: parentheses appear only where operator precedence
//! requires them, so `(n != 1)` renders as `n != 1` but
//! `(n + 1) * 2` keeps its parentheses. `Display` for [`CompiledForm`]
//! wraps the formula in a full `nplurals=<N>; plural=<expr>;` header.
//!
//! Malformed fragments render as `<description>` placeholders; such forms
//! fail at evaluation time anyway, so this surface only has to be useful
//! for diagnostics.

use std::fmt;

use crate::parser::ast::{TERNARY_BP, UNARY_BP};
use crate::parser::{BinaryOp, CompiledForm, Expr, UnaryOp};

impl fmt::Display for CompiledForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nplurals={}; plural={};", self.nplurals(), self.expression())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(self, f, 0)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Binding power of a rendered node, used to decide parenthesization.
/// Atoms never need parentheses.
fn binding_power(expr: &Expr) -> u8 {
    match expr {
        Expr::Literal(_) | Expr::Variable | Expr::Malformed(_) => u8::MAX,
        Expr::Unary(..) => UNARY_BP,
        Expr::Binary(op, ..) => op.precedence(),
        Expr::Ternary(..) => TERNARY_BP,
    }
}

/// Render `expr` as if it appears where operators must bind at least as
/// tightly as `min_bp`, parenthesizing when they do not.
fn write_expr(expr: &Expr, f: &mut fmt::Formatter<'_>, min_bp: u8) -> fmt::Result {
    let parens = binding_power(expr) < min_bp;
    if parens {
        f.write_str("(")?;
    }
    match expr {
        Expr::Literal(value) => write!(f, "{value}")?,
        Expr::Variable => f.write_str("n")?,
        Expr::Unary(op, operand) => {
            write!(f, "{op}")?;
            write_expr(operand, f, UNARY_BP)?;
        }
        Expr::Binary(op, lhs, rhs) => {
            let bp = op.precedence();
            write_expr(lhs, f, bp)?;
            write!(f, " {op} ")?;
            // Left-associative: the right child needs parentheses at
            // equal precedence.
            write_expr(rhs, f, bp + 1)?;
        }
        Expr::Ternary(condition, when_true, when_false) => {
            write_expr(condition, f, TERNARY_BP + 1)?;
            f.write_str(" ? ")?;
            write_expr(when_true, f, 0)?;
            f.write_str(" : ")?;
            // Right-associative: a chained ternary renders bare.
            write_expr(when_false, f, TERNARY_BP)?;
        }
        Expr::Malformed(detail) => write!(f, "<{detail}>")?,
    }
    if parens {
        f.write_str(")")?;
    }
    Ok(())
}
