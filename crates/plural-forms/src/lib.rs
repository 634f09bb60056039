//! Parser and evaluator for gettext Plural-Forms headers.
//!
//! Translation catalogs (`.po`/`.mo`) declare their plural rules in a
//! metadata header such as `nplurals=2; plural=(n != 1);`. This crate
//! compiles that header once into a reusable [`CompiledForm`] and then
//! evaluates it per message lookup to pick the zero-based index of the
//! plural variant to use.
//!
//! Catalog loading, caching, and message retrieval are the caller's
//! concern; this crate only consumes the header text and the runtime
//! count.
//!
//! # Example
//!
//! ```
//! use plural_forms::{evaluate, parse_header};
//!
//! let form = parse_header("nplurals=3; plural=(n == 0 ? 0 : n > 1 ? 2 : 1);").unwrap();
//! assert_eq!(form.nplurals(), 3);
//! assert_eq!(evaluate(&form, 0.0).unwrap(), 0);
//! assert_eq!(evaluate(&form, 1.0).unwrap(), 1);
//! assert_eq!(evaluate(&form, 7.0).unwrap(), 2);
//! ```
//!
//! # Error behavior
//!
//! Header-structure problems fail at parse time with [`ParseError`].
//! Formula problems deliberately do not: a tokenizable but malformed
//! formula (say `plural=n => 1`) parses successfully and fails with
//! [`EvalError::Syntax`] on first evaluation, matching the leniency of
//! historical gettext header handling. Division by zero is reported
//! per call, since it can depend on the value of `n`.

mod display;
pub mod interpreter;
pub mod parser;

pub use interpreter::{EvalError, evaluate};
pub use parser::{BinaryOp, CompiledForm, Expr, ParseError, UnaryOp, parse_header};
