//! Formula tokenizer using winnow.
//!
//! Recognizes the fixed token set of gettext plural formulas: integer
//! literals, the identifier `n`, the C operator subset, and parentheses.
//! Anything else is retained as an [`Token::Unknown`] operand rather than
//! rejected here; the parser turns it into a malformed node that fails at
//! evaluation time.

use std::fmt;

use winnow::combinator::{alt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::BinaryOp;

/// A lexical token of a plural formula.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// An integer literal.
    Number(f64),
    /// The identifier `n`.
    Variable,
    /// An infix operator. `-` also doubles as prefix negation.
    Binary(BinaryOp),
    /// The prefix operator `!`.
    Bang,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Any text outside the recognized set, passed through for the parser
    /// to defer as an evaluation-time failure.
    Unknown(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(v) => write!(f, "{v}"),
            Token::Variable => f.write_str("n"),
            Token::Binary(op) => f.write_str(op.symbol()),
            Token::Bang => f.write_str("!"),
            Token::Question => f.write_str("?"),
            Token::Colon => f.write_str(":"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Unknown(text) => f.write_str(text),
        }
    }
}

/// Tokenize a formula. Whitespace is insignificant.
pub(crate) fn tokenize(formula: &str) -> Vec<Token> {
    let mut remaining = formula;
    // The unknown-token fallback consumes any character, so lexing only
    // stops at end of input and cannot fail.
    tokens(&mut remaining).unwrap_or_default()
}

fn tokens(input: &mut &str) -> ModalResult<Vec<Token>> {
    terminated(repeat(0.., preceded(ws, token)), ws).parse_next(input)
}

/// Optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

fn token(input: &mut &str) -> ModalResult<Token> {
    alt((number, operator, word, unknown_char)).parse_next(input)
}

fn number(input: &mut &str) -> ModalResult<Token> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .try_map(str::parse::<f64>)
        .map(Token::Number)
        .parse_next(input)
}

fn operator(input: &mut &str) -> ModalResult<Token> {
    alt((two_char_operator, one_char_operator)).parse_next(input)
}

// Two-character operators must be tried before their one-character
// prefixes so `<=` does not lex as `<` `=`.
fn two_char_operator(input: &mut &str) -> ModalResult<Token> {
    alt((
        "||".value(Token::Binary(BinaryOp::Or)),
        "&&".value(Token::Binary(BinaryOp::And)),
        "==".value(Token::Binary(BinaryOp::Eq)),
        "!=".value(Token::Binary(BinaryOp::Ne)),
        "<=".value(Token::Binary(BinaryOp::Le)),
        ">=".value(Token::Binary(BinaryOp::Ge)),
    ))
    .parse_next(input)
}

fn one_char_operator(input: &mut &str) -> ModalResult<Token> {
    alt((
        '<'.value(Token::Binary(BinaryOp::Lt)),
        '>'.value(Token::Binary(BinaryOp::Gt)),
        '+'.value(Token::Binary(BinaryOp::Add)),
        '-'.value(Token::Binary(BinaryOp::Sub)),
        '*'.value(Token::Binary(BinaryOp::Mul)),
        '/'.value(Token::Binary(BinaryOp::Div)),
        '%'.value(Token::Binary(BinaryOp::Rem)),
        '!'.value(Token::Bang),
        '?'.value(Token::Question),
        ':'.value(Token::Colon),
        '('.value(Token::LParen),
        ')'.value(Token::RParen),
    ))
    .parse_next(input)
}

/// An identifier-shaped word. Only `n` is meaningful; any other word is an
/// unknown operand.
fn word(input: &mut &str) -> ModalResult<Token> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .map(|w: &str| {
            if w == "n" {
                Token::Variable
            } else {
                Token::Unknown(w.to_string())
            }
        })
        .parse_next(input)
}

fn unknown_char(input: &mut &str) -> ModalResult<Token> {
    any.map(|c: char| Token::Unknown(c.to_string()))
        .parse_next(input)
}
