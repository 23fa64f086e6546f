//! DO/END source code parser
//!
//! This module transforms program text into an Abstract Syntax Tree (AST):
//! - [`token`]: the token model shared by both stages
//! - [`chars`] and [`lexer`]: tokenization (source text → tokens)
//! - [`tokens`] and [`parse`]: parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! - Statements: `LET`, `DEF`, `IF`/`ELSE`, `FOR`/`IN`, `RETURN`,
//!   expression statements and assignments; blocks are `DO ... END`
//! - Expressions: `AND`/`OR`, comparisons, `+ - * /`, grouping, property and
//!   method access, function calls, `OBJECT` literals
//! - Literals: `NIL`, `TRUE`, `FALSE`, arbitrary-precision integers and
//!   decimals, characters, strings
//! - `//` line comments
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one method per precedence
//! level. No external parser generator dependencies.

pub mod ast;
pub mod chars;
mod expressions;
pub mod lexer;
pub mod literals;
pub mod parse;
mod statements;
pub mod token;
pub mod tokens;

pub use ast::*;
pub use lexer::{LexError, Lexer};
pub use parse::{Ast, ParseError, Parser, Rule, UnknownRule};
pub use token::{Token, TokenKind};

/// Any failure on the way from text to AST
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
