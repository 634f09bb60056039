//! Parse error types for Plural-Forms headers.

use thiserror::Error;

/// An error describing a structurally malformed header.
///
/// These cover the header skeleton only. Problems inside the `plural=`
/// formula itself are deferred to evaluation time; see
/// [`crate::interpreter::EvalError::Syntax`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// No `;` separates the `nplurals=` clause from the `plural=` clause.
    #[error("expected ';' separating the nplurals and plural clauses")]
    MissingSeparator,

    /// The second statement is not a `plural=` assignment.
    #[error("expected a 'plural=' clause, found '{found}'")]
    MissingPluralClause { found: String },

    /// The `nplurals=` clause is absent or its value is not a non-negative
    /// integer.
    #[error("invalid nplurals clause: '{found}'")]
    InvalidNplurals { found: String },
}
