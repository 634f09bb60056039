//! Plural-Forms header parser.
//!
//! Splits a header such as `nplurals=2; plural=(n != 1);` into its two
//! clauses, validates the skeleton, and compiles the formula.

use super::ast::CompiledForm;
use super::error::ParseError;
use super::formula::parse_formula;

/// Parse a Plural-Forms header into a [`CompiledForm`].
///
/// The header must carry a `nplurals=<N>;` statement followed by a
/// `plural=<expr>` statement. Whitespace around statements and around the
/// `=` signs is insignificant, a trailing `;` is optional, and statements
/// after the `plural=` clause are ignored (real catalogs occasionally
/// append stray clauses).
///
/// # Errors
///
/// Returns a [`ParseError`] when the header skeleton is malformed. A
/// formula that is tokenizable but not well-formed parses successfully
/// and fails later, at evaluation time.
///
/// # Examples
///
/// ```
/// use plural_forms::parse_header;
///
/// let form = parse_header("nplurals=2; plural=(n != 1);").unwrap();
/// assert_eq!(form.nplurals(), 2);
/// assert_eq!(form.plural_index(1.0).unwrap(), 0);
/// assert_eq!(form.plural_index(5.0).unwrap(), 1);
/// ```
pub fn parse_header(header: &str) -> Result<CompiledForm, ParseError> {
    let mut statements: Vec<&str> = header.split(';').map(str::trim).collect();
    // Headers may end with `;`, leaving one empty trailing statement.
    if statements.last() == Some(&"") {
        statements.pop();
    }
    if statements.len() < 2 {
        return Err(ParseError::MissingSeparator);
    }

    let nplurals = parse_nplurals(statements[0])?;
    let formula = assignment_value(statements[1], "plural").ok_or_else(|| {
        ParseError::MissingPluralClause {
            found: statements[1].to_string(),
        }
    })?;

    Ok(CompiledForm::new(nplurals, parse_formula(formula)))
}

fn parse_nplurals(statement: &str) -> Result<u32, ParseError> {
    let value =
        assignment_value(statement, "nplurals").ok_or_else(|| ParseError::InvalidNplurals {
            found: statement.to_string(),
        })?;
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNplurals {
            found: value.trim().to_string(),
        })
}

/// Extract the right-hand side of `<key> = <value>`, tolerating spaces
/// around the `=`. Returns `None` if the statement is not such an
/// assignment.
fn assignment_value<'s>(statement: &'s str, key: &str) -> Option<&'s str> {
    statement
        .strip_prefix(key)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('='))
}
