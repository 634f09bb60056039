//! Tree-walk evaluator for compiled plural formulas.
//!
//! Evaluation is a pure, stateless function of the compiled form and the
//! count: no I/O, no mutation, safe to run concurrently against a shared
//! [`CompiledForm`].
//!
//! All arithmetic and comparisons run in `f64` so callers may pass
//! fractional counts; boolean sub-results are `0.0`/`1.0`. Both operands
//! of `||` and `&&` are always evaluated, so an error anywhere in the
//! tree surfaces regardless of which branch decides the result.

use crate::parser::{BinaryOp, CompiledForm, Expr, UnaryOp};

use super::error::EvalError;

/// Evaluate a compiled form for a count, returning the zero-based plural
/// index.
///
/// The formula's numeric result is truncated toward zero. The index is
/// reported as computed, without clamping against
/// [`CompiledForm::nplurals`]; range handling belongs to the caller.
///
/// # Errors
///
/// Returns [`EvalError::Syntax`] when the formula was tokenizable but not
/// well-formed, and [`EvalError::DivisionByZero`] when a `/` or `%` right
/// operand evaluates to zero for this `n`.
pub fn evaluate(form: &CompiledForm, n: f64) -> Result<i64, EvalError> {
    let value = eval_expr(form.expression(), n)?;
    Ok(value.trunc() as i64)
}

fn eval_expr(expr: &Expr, n: f64) -> Result<f64, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Variable => Ok(n),
        Expr::Unary(op, operand) => {
            let value = eval_expr(operand, n)?;
            Ok(match op {
                UnaryOp::Not => truth(value == 0.0),
                UnaryOp::Neg => -value,
            })
        }
        Expr::Binary(op, lhs, rhs) => eval_binary(*op, lhs, rhs, n),
        Expr::Ternary(condition, when_true, when_false) => {
            if eval_expr(condition, n)? != 0.0 {
                eval_expr(when_true, n)
            } else {
                eval_expr(when_false, n)
            }
        }
        Expr::Malformed(detail) => Err(EvalError::Syntax {
            detail: detail.clone(),
        }),
    }
}

fn eval_binary(op: BinaryOp, lhs: &Expr, rhs: &Expr, n: f64) -> Result<f64, EvalError> {
    let left = eval_expr(lhs, n)?;
    let right = eval_expr(rhs, n)?;
    match op {
        BinaryOp::Or => Ok(truth(left != 0.0 || right != 0.0)),
        BinaryOp::And => Ok(truth(left != 0.0 && right != 0.0)),
        BinaryOp::Eq => Ok(truth(left == right)),
        BinaryOp::Ne => Ok(truth(left != right)),
        BinaryOp::Lt => Ok(truth(left < right)),
        BinaryOp::Gt => Ok(truth(left > right)),
        BinaryOp::Le => Ok(truth(left <= right)),
        BinaryOp::Ge => Ok(truth(left >= right)),
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                Err(EvalError::DivisionByZero { operator: '/' })
            } else {
                Ok(left / right)
            }
        }
        // Truncated remainder, sign of the left operand (C semantics).
        BinaryOp::Rem => {
            if right == 0.0 {
                Err(EvalError::DivisionByZero { operator: '%' })
            } else {
                Ok(left % right)
            }
        }
    }
}

fn truth(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
