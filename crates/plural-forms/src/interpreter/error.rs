//! Error types for plural formula evaluation.

use thiserror::Error;

/// An error that occurred while evaluating a compiled plural formula.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The formula tokenized but its tokens do not form a well-formed
    /// expression. Deliberately raised here rather than at parse time, so
    /// malformed-but-tokenizable headers fail per lookup the way legacy
    /// gettext handling does.
    #[error("malformed plural formula: {detail}")]
    Syntax { detail: String },

    /// A `/` or `%` operation whose right operand evaluated to zero.
    /// Data-dependent: the same formula may succeed for other values of
    /// `n`.
    #[error("division by zero in plural formula ('{operator}' operand is 0)")]
    DivisionByZero { operator: char },
}
