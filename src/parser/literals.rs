//! Literal value construction
//!
//! Tokens keep their raw source text; this module turns that text into
//! [`Literal`] values when the parser builds a literal expression.
//!
//! Escape decoding is shared by character and string literals:
//!
//! | escape | value |
//! |--------|-------|
//! | `\n` | newline |
//! | `\r` | carriage return |
//! | `\t` | tab |
//! | `\'` `\"` `\\` | the escaped character |
//!
//! Any other character after a backslash is kept as is, so `\b` decodes to
//! a plain `b`.

use super::ast::{Expr, Literal};
use super::parse::ParseError;
use super::token::{Token, TokenKind};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::str::FromStr;

/// Build the expression for a literal-bearing token.
///
/// Identifiers other than `NIL`, `TRUE` and `FALSE` become variables.
pub(crate) fn literal_from_token(token: &Token) -> Result<Expr, ParseError> {
    let text = token.literal.as_str();
    let literal = match token.kind {
        TokenKind::Identifier => match text {
            "NIL" => Literal::Nil,
            "TRUE" => Literal::Boolean(true),
            "FALSE" => Literal::Boolean(false),
            name => return Ok(Expr::variable(name)),
        },
        // The lexer classifies `1e10` as an integer; with an exponent the
        // value is only representable as a decimal.
        TokenKind::Integer if text.contains('e') => Literal::Decimal(decimal(token)?),
        TokenKind::Integer => Literal::Integer(
            BigInt::from_str(text).map_err(|_| invalid(token, "integer"))?,
        ),
        TokenKind::Decimal => Literal::Decimal(decimal(token)?),
        TokenKind::Character => {
            let body = strip_quotes(text, '\'').ok_or_else(|| invalid(token, "character"))?;
            let decoded = unescape(body);
            let mut chars = decoded.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Literal::Character(c),
                _ => return Err(invalid(token, "character")),
            }
        }
        TokenKind::String => {
            let body = strip_quotes(text, '"').ok_or_else(|| invalid(token, "string"))?;
            Literal::String(unescape(body))
        }
        TokenKind::Operator => {
            return Err(ParseError::new("expected a literal", Some(token.clone())));
        }
    };
    Ok(Expr::Literal(literal))
}

fn decimal(token: &Token) -> Result<BigDecimal, ParseError> {
    BigDecimal::from_str(&token.literal).map_err(|_| {
        // digits are valid but the scale does not fit in an i64
        match token.literal.split_once('e') {
            Some((mantissa, _)) if BigDecimal::from_str(mantissa).is_ok() => ParseError::new(
                "decimal exponent out of range",
                Some(token.clone()),
            ),
            _ => invalid(token, "decimal"),
        }
    })
}

fn invalid(token: &Token, what: &str) -> ParseError {
    ParseError::new(format!("invalid {what} literal"), Some(token.clone()))
}

fn strip_quotes(text: &str, quote: char) -> Option<&str> {
    text.strip_prefix(quote)?.strip_suffix(quote)
}

/// Decode backslash escapes in the body of a quoted literal.
pub fn unescape(body: &str) -> String {
    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('r') => decoded.push('\r'),
            Some('t') => decoded.push('\t'),
            Some(other) => decoded.push(other),
            // trailing backslash
            None => decoded.push('\\'),
        }
    }

    decoded
}
