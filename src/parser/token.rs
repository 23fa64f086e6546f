//! Token model shared by the lexer and the parser
//!
//! A [`Token`] keeps the exact slice of source text it was produced from.
//! Nothing is decoded at lex time: a string token still carries its quotes and
//! raw backslash escapes, and numeric tokens are not converted until the
//! parser builds a literal out of them.

use std::fmt;

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[A-Za-z_][A-Za-z0-9_-]*`; keywords such as `LET` are identifiers too
    Identifier,
    /// Digits with an optional sign and exponent but no fractional part
    Integer,
    /// Digits with a fractional part, optionally followed by an exponent
    Decimal,
    /// `'c'` or `'\n'`
    Character,
    /// `"..."`
    String,
    /// Any other single character, or a two-character comparison like `<=`
    Operator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Decimal => "decimal",
            TokenKind::Character => "character",
            TokenKind::String => "string",
            TokenKind::Operator => "operator",
        };
        f.write_str(name)
    }
}

/// A classified slice of source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn identifier(literal: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, literal)
    }

    pub fn integer(literal: impl Into<String>) -> Self {
        Self::new(TokenKind::Integer, literal)
    }

    pub fn decimal(literal: impl Into<String>) -> Self {
        Self::new(TokenKind::Decimal, literal)
    }

    pub fn character(literal: impl Into<String>) -> Self {
        Self::new(TokenKind::Character, literal)
    }

    pub fn string(literal: impl Into<String>) -> Self {
        Self::new(TokenKind::String, literal)
    }

    pub fn operator(literal: impl Into<String>) -> Self {
        Self::new(TokenKind::Operator, literal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Token::identifier("x"), Token::new(TokenKind::Identifier, "x"));
        assert_ne!(Token::identifier("x"), Token::operator("x"));
        assert_ne!(Token::integer("1"), Token::integer("01"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::operator(";").to_string(), "operator ';'");
        assert_eq!(Token::string("\"hi\"").to_string(), "string '\"hi\"'");
    }
}
