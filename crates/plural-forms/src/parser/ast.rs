//! Public AST types for compiled Plural-Forms expressions.
//!
//! These types are public to enable external tooling (linters, catalog
//! validators, etc.).

use serde::{Deserialize, Serialize};

use crate::interpreter::{EvalError, evaluate};

/// Binding power of the ternary `?:` operator, below every binary operator.
pub(crate) const TERNARY_BP: u8 = 1;

/// Binding power of the prefix operators `!` and `-`, above every binary
/// operator.
pub(crate) const UNARY_BP: u8 = 8;

/// The compiled, reusable result of parsing one Plural-Forms header.
///
/// Immutable after construction: evaluation only reads it, so a single
/// value can be cached and shared across threads by the catalog layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledForm {
    nplurals: u32,
    expression: Expr,
}

impl CompiledForm {
    pub(crate) fn new(nplurals: u32, expression: Expr) -> Self {
        Self {
            nplurals,
            expression,
        }
    }

    /// Number of plural variants declared by the `nplurals=` clause.
    pub fn nplurals(&self) -> u32 {
        self.nplurals
    }

    /// The parsed `plural=` formula.
    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    /// Evaluate the formula for a count, returning the zero-based variant
    /// index. Shorthand for [`crate::interpreter::evaluate`].
    ///
    /// The index is not clamped against [`Self::nplurals`]; out-of-range
    /// results are the caller's concern.
    pub fn plural_index(&self, n: f64) -> Result<i64, EvalError> {
        evaluate(self, n)
    }
}

impl Default for CompiledForm {
    /// The Germanic fallback gettext assumes when a catalog carries no
    /// Plural-Forms header: `nplurals=2; plural=n != 1;`.
    fn default() -> Self {
        Self {
            nplurals: 2,
            expression: Expr::Binary(
                BinaryOp::Ne,
                Box::new(Expr::Variable),
                Box::new(Expr::Literal(1.0)),
            ),
        }
    }
}

/// A node in a parsed plural formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A numeric literal.
    Literal(f64),
    /// The free variable `n`, bound to the runtime count.
    Variable,
    /// A prefix operation: `!x` or `-x`.
    Unary(UnaryOp, Box<Expr>),
    /// An infix operation: `x op y`.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// A conditional: `condition ? when_true : when_false`.
    Ternary(Box<Expr>, Box<Expr>, Box<Expr>),
    /// A fragment the parser could tokenize but not shape into an
    /// operation. Carries a description of the problem and fails with
    /// [`EvalError::Syntax`] when visited by the evaluator, preserving the
    /// historical gettext leniency of rejecting such headers at lookup
    /// time rather than load time.
    Malformed(String),
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Logical negation `!`: nonzero becomes `0`, zero becomes `1`.
    Not,
    /// Arithmetic negation `-`.
    Neg,
}

/// An infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// `||`
    Or,
    /// `&&`
    And,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
}

impl BinaryOp {
    /// Binding power of this operator, following C precedence: `||` binds
    /// loosest and `*`/`/`/`%` bind tightest. The ternary `?:` binds below
    /// all of these; unary `!`/`-` bind above.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 2,
            BinaryOp::And => 3,
            BinaryOp::Eq | BinaryOp::Ne => 4,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => 5,
            BinaryOp::Add | BinaryOp::Sub => 6,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 7,
        }
    }

    /// The operator's source text.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }
}

impl UnaryOp {
    /// The operator's source text.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
        }
    }
}
