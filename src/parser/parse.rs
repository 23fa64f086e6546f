//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, the grammar entry points and the small helpers
//! the grammar rules share.
//!
//! # Parser Architecture
//!
//! The parser is a recursive descent parser over a [`TokenStream`]:
//! - This module: Parser struct, entry points, helper methods
//! - `statements`: `LET`, `DEF`, `IF`, `FOR`, `RETURN`, expression statements
//! - `expressions`: the precedence cascade, postfix access and primaries
//! - `literals`: decoding literal tokens into values
//!
//! Each entry point parses one grammar rule and then requires that every
//! token was consumed. Parsing stops at the first error.

use crate::parser::ast::{Expr, Source, Stmt};
use crate::parser::token::{Token, TokenKind};
use crate::parser::tokens::TokenStream;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Parser error type
///
/// `token` is the next unconsumed token when the error was raised, or `None`
/// if the parser ran out of input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}, found {}", describe(.token))]
pub struct ParseError {
    pub message: String,
    pub token: Option<Token>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, token: Option<Token>) -> Self {
        Self {
            message: message.into(),
            token,
        }
    }
}

fn describe(token: &Option<Token>) -> String {
    match token {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

/// Grammar rule a parse starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    #[default]
    Source,
    Stmt,
    Expr,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rule::Source => "source",
            Rule::Stmt => "stmt",
            Rule::Expr => "expr",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grammar rule '{0}' (expected source, stmt or expr)")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(Rule::Source),
            "stmt" => Ok(Rule::Stmt),
            "expr" => Ok(Rule::Expr),
            other => Err(UnknownRule(other.to_string())),
        }
    }
}

/// Result of [`Parser::parse`], one variant per [`Rule`]
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    Source(Source),
    Stmt(Stmt),
    Expr(Expr),
}

/// Recursive descent parser for DO/END programs
pub struct Parser {
    pub(crate) tokens: TokenStream,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
        }
    }

    /// Parse the whole token list as the given rule.
    pub fn parse(self, rule: Rule) -> Result<Ast, ParseError> {
        match rule {
            Rule::Source => self.parse_source().map(Ast::Source),
            Rule::Stmt => self.parse_stmt().map(Ast::Stmt),
            Rule::Expr => self.parse_expr().map(Ast::Expr),
        }
    }

    /// Parse a complete program.
    pub fn parse_source(self) -> Result<Source, ParseError> {
        self.parse_all(Rule::Source, Self::parse_program)
    }

    /// Parse exactly one statement.
    pub fn parse_stmt(self) -> Result<Stmt, ParseError> {
        self.parse_all(Rule::Stmt, Self::parse_statement)
    }

    /// Parse exactly one expression.
    pub fn parse_expr(self) -> Result<Expr, ParseError> {
        self.parse_all(Rule::Expr, Self::parse_expression)
    }

    fn parse_all<T>(
        mut self,
        rule: Rule,
        parse_rule: fn(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        debug!(%rule, "parsing started");
        let result = parse_rule(&mut self)?;
        if self.tokens.has(0) {
            return Err(self.error("expected end of input"));
        }
        debug!(%rule, "parsing finished");
        Ok(result)
    }

    /// `source ::= statement*`
    pub(crate) fn parse_program(&mut self) -> Result<Source, ParseError> {
        let mut statements = Vec::new();
        while self.tokens.has(0) {
            statements.push(self.parse_statement()?);
        }
        Ok(Source::new(statements))
    }

    // ===== Helper methods =====

    /// Error positioned at the next unconsumed token.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.tokens.next_token())
    }

    /// Consume the token with the given literal text or fail.
    pub(crate) fn expect(&mut self, literal: &str, context: &str) -> Result<(), ParseError> {
        if self.tokens.match_token(literal) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{literal}' {context}")))
        }
    }

    pub(crate) fn expect_identifier(&mut self, context: &str) -> Result<String, ParseError> {
        if self.tokens.match_token(TokenKind::Identifier) {
            Ok(self.tokens.previous().literal.clone())
        } else {
            Err(self.error(format!("expected identifier {context}")))
        }
    }
}
