//! Integration tests for rendering compiled forms back to header text.

use insta::assert_snapshot;
use plural_forms::parse_header;

// =============================================================================
// Canonical rendering
// =============================================================================

#[test]
fn redundant_parentheses_are_dropped() {
    let form = parse_header("nplurals=2; plural=(n != 1);").unwrap();
    assert_snapshot!(form.to_string(), @"nplurals=2; plural=n != 1;");
}

#[test]
fn chained_ternary_renders_bare() {
    let form = parse_header("nplurals=3; plural=(n == 0 ? 0 : (n > 1 ? 2 : 1));").unwrap();
    assert_snapshot!(form.to_string(), @"nplurals=3; plural=n == 0 ? 0 : n > 1 ? 2 : 1;");
}

#[test]
fn required_parentheses_are_kept() {
    let form = parse_header("nplurals=9; plural=(n + 1) * 2;").unwrap();
    assert_snapshot!(form.to_string(), @"nplurals=9; plural=(n + 1) * 2;");
}

#[test]
fn unary_operand_parenthesization() {
    let form = parse_header("nplurals=2; plural=!(n == 1);").unwrap();
    assert_snapshot!(form.to_string(), @"nplurals=2; plural=!(n == 1);");
}

#[test]
fn malformed_fragment_renders_as_placeholder() {
    let form = parse_header("nplurals=2; plural=(n => 1)").unwrap();
    assert_snapshot!(form.to_string(), @"nplurals=2; plural=<unexpected token '='>;");
}

// =============================================================================
// Round-tripping
// =============================================================================

#[test]
fn rendered_header_parses_back_to_the_same_form() {
    let headers = [
        "nplurals=1; plural=0;",
        "nplurals=2; plural=(n != 1);",
        "nplurals=3; plural=(n == 0 ? 0 : n > 1 ? 2 : 1);",
        "nplurals=3; plural=(n % 10 == 1 && n % 100 != 11 ? 0 : \
         n % 10 >= 2 && n % 10 <= 4 && (n % 100 < 10 || n % 100 >= 20) ? 1 : 2);",
        "nplurals=2; plural=-n + 3;",
    ];
    for header in headers {
        let form = parse_header(header).unwrap();
        let rendered = form.to_string();
        assert_eq!(parse_header(&rendered).unwrap(), form, "{header}");
    }
}
