//! Integration tests for Plural-Forms header parsing.

use plural_forms::{CompiledForm, ParseError, parse_header};

// =============================================================================
// Well-formed headers
// =============================================================================

#[test]
fn two_form_header() {
    let form = parse_header("nplurals=2; plural=(n != 1);").unwrap();
    assert_eq!(form.nplurals(), 2);
}

#[test]
fn single_form_header() {
    let form = parse_header("nplurals=1; plural=0;").unwrap();
    assert_eq!(form.nplurals(), 1);
    assert_eq!(form.plural_index(0.0).unwrap(), 0);
    assert_eq!(form.plural_index(42.0).unwrap(), 0);
}

#[test]
fn trailing_semicolon_is_optional() {
    let with = parse_header("nplurals=2; plural=n != 1;").unwrap();
    let without = parse_header("nplurals=2; plural=n != 1").unwrap();
    assert_eq!(with, without);
}

#[test]
fn whitespace_around_assignments() {
    let form = parse_header("  nplurals = 2 ;  plural = n != 1  ").unwrap();
    assert_eq!(form.nplurals(), 2);
    assert_eq!(form.plural_index(3.0).unwrap(), 1);
}

#[test]
fn statements_after_plural_clause_are_ignored() {
    let form = parse_header("nplurals=2; plural=n != 1; charset=utf-8;").unwrap();
    assert_eq!(form.nplurals(), 2);
    assert_eq!(form.plural_index(1.0).unwrap(), 0);
}

#[test]
fn zero_nplurals_parses() {
    // The engine reports what the header says; range handling is the
    // caller's concern.
    let form = parse_header("nplurals=0; plural=0;").unwrap();
    assert_eq!(form.nplurals(), 0);
}

#[test]
fn large_nplurals() {
    let form = parse_header("nplurals=6; plural=n == 0 ? 0 : n == 1 ? 1 : 5;").unwrap();
    assert_eq!(form.nplurals(), 6);
}

// =============================================================================
// Malformed headers
// =============================================================================

#[test]
fn missing_separator_fails() {
    let err = parse_header("nplurals=2 plural=(n != 1)").unwrap_err();
    assert!(matches!(err, ParseError::MissingSeparator));
}

#[test]
fn lone_nplurals_clause_fails() {
    let err = parse_header("nplurals=2;").unwrap_err();
    assert!(matches!(err, ParseError::MissingSeparator));
}

#[test]
fn missing_plural_assignment_fails() {
    let err = parse_header("nplurals=2; (n > 1)").unwrap_err();
    assert!(matches!(err, ParseError::MissingPluralClause { .. }));
}

#[test]
fn missing_nplurals_clause_fails() {
    let err = parse_header("plurals=2; plural=0").unwrap_err();
    assert!(matches!(err, ParseError::InvalidNplurals { .. }));
}

#[test]
fn non_numeric_nplurals_fails() {
    let err = parse_header("nplurals=two; plural=0").unwrap_err();
    assert!(matches!(err, ParseError::InvalidNplurals { .. }));
}

#[test]
fn negative_nplurals_fails() {
    let err = parse_header("nplurals=-1; plural=0").unwrap_err();
    assert!(matches!(err, ParseError::InvalidNplurals { .. }));
}

#[test]
fn empty_header_fails() {
    assert!(matches!(
        parse_header("").unwrap_err(),
        ParseError::MissingSeparator
    ));
}

// =============================================================================
// Determinism and the default form
// =============================================================================

#[test]
fn parsing_is_deterministic() {
    let header = "nplurals=3; plural=(n == 0 ? 0 : n > 1 ? 2 : 1);";
    assert_eq!(parse_header(header).unwrap(), parse_header(header).unwrap());
}

#[test]
fn default_form_is_the_germanic_fallback() {
    let parsed = parse_header("nplurals=2; plural=n != 1;").unwrap();
    assert_eq!(CompiledForm::default(), parsed);
}

#[test]
fn compiled_form_serde_round_trip() {
    let form = parse_header("nplurals=2; plural=(n % 10 == 1 ? 0 : 1);").unwrap();
    let json = serde_json::to_string(&form).unwrap();
    let back: CompiledForm = serde_json::from_str(&json).unwrap();
    assert_eq!(form, back);
    assert_eq!(back.plural_index(21.0).unwrap(), 0);
}
