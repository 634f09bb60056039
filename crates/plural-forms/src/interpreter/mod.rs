//! Evaluator for compiled plural formulas.
//!
//! Takes a [`crate::parser::CompiledForm`] and a runtime count and
//! computes the plural-form index that selects among the catalog's
//! message variants.

mod error;
mod evaluator;

pub use error::EvalError;
pub use evaluator::evaluate;
