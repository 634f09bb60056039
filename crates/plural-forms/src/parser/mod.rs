//! Plural-Forms header and formula parser.
//!
//! This module turns the raw `Plural-Forms` metadata string of a gettext
//! catalog into a [`CompiledForm`]: the declared variant count plus an
//! expression tree for the selection formula. The AST is public so
//! external tooling can inspect or persist compiled forms.

pub mod ast;
pub mod error;
mod formula;
mod header;
mod token;

pub use ast::{BinaryOp, CompiledForm, Expr, UnaryOp};
pub use error::ParseError;
pub use header::parse_header;
