//! Precedence-climbing parser for plural formulas.
//!
//! Builds an [`Expr`] tree from the token stream with a Pratt loop: each
//! call parses an expression whose operators bind at least as tightly as a
//! minimum binding power, recursing with a higher minimum for operands.
//!
//! Parsing a formula never fails. Token arrangements that cannot form a
//! well-formed operation (a stray `=`, a missing operand, an unclosed
//! parenthesis, tokens left over after the expression) become
//! [`Expr::Malformed`] nodes that surface as syntax errors only when the
//! evaluator visits them, matching the lenient behavior of historical
//! gettext header handling.

use super::ast::{BinaryOp, Expr, TERNARY_BP, UnaryOp};
use super::token::{Token, tokenize};

/// Parse the right-hand side of a `plural=` clause.
pub(crate) fn parse_formula(formula: &str) -> Expr {
    let tokens = tokenize(formula);
    let mut cursor = Cursor { tokens: &tokens, pos: 0 };
    let expr = cursor.expression(0);
    // Leftover tokens cannot belong to a well-formed formula; defer the
    // failure to evaluation time.
    match cursor.peek() {
        Some(token) => Expr::Malformed(format!("unexpected token '{token}'")),
        None => expr,
    }
}

struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Parse an expression whose operators all bind at least as tightly as
    /// `min_bp`.
    fn expression(&mut self, min_bp: u8) -> Expr {
        let mut lhs = self.primary();
        loop {
            match self.peek() {
                Some(Token::Binary(op)) if op.precedence() >= min_bp => {
                    let op = *op;
                    self.bump();
                    // Left-associative: the right operand only claims
                    // operators that bind strictly tighter.
                    let rhs = self.expression(op.precedence() + 1);
                    lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Question) if TERNARY_BP >= min_bp => {
                    self.bump();
                    lhs = self.ternary(lhs);
                }
                _ => break,
            }
        }
        lhs
    }

    /// Parse the branches of `condition ? when_true : when_false`.
    ///
    /// The "then" branch re-enters the full grammar up to the `:`; the
    /// "else" branch parses at ternary precedence so nested ternaries
    /// chain rightward: `a ? b : c ? d : e` is `a ? b : (c ? d : e)`.
    fn ternary(&mut self, condition: Expr) -> Expr {
        let when_true = self.expression(0);
        let when_false = if let Some(Token::Colon) = self.peek() {
            self.bump();
            self.expression(TERNARY_BP)
        } else {
            Expr::Malformed("expected ':' after '?' branch".to_string())
        };
        Expr::Ternary(
            Box::new(condition),
            Box::new(when_true),
            Box::new(when_false),
        )
    }

    /// Parse a prefix-operator chain or a primary operand.
    ///
    /// `!` and prefix `-` bind tighter than every infix operator, so their
    /// operand is another primary rather than a climbing expression.
    fn primary(&mut self) -> Expr {
        match self.bump() {
            Some(Token::Number(value)) => Expr::Literal(value),
            Some(Token::Variable) => Expr::Variable,
            Some(Token::Bang) => Expr::Unary(UnaryOp::Not, Box::new(self.primary())),
            Some(Token::Binary(BinaryOp::Sub)) => {
                Expr::Unary(UnaryOp::Neg, Box::new(self.primary()))
            }
            Some(Token::LParen) => {
                let inner = self.expression(0);
                if let Some(Token::RParen) = self.peek() {
                    self.bump();
                    inner
                } else {
                    Expr::Malformed("expected ')'".to_string())
                }
            }
            Some(token) => Expr::Malformed(format!("unexpected token '{token}'")),
            None => Expr::Malformed("unexpected end of formula".to_string()),
        }
    }
}
