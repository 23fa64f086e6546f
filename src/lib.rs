//! # Introduction
//!
//! dolang is the front end of a small scripting language whose blocks are
//! delimited by `DO` and `END`. It turns program text into a typed syntax
//! tree and reports the first lexical or syntactic error it meets.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`]: splits the text into [`Token`]s using maximal munch.
//! 2. [`parser::parse`]: recursive descent over the tokens, producing
//!    [`parser::Source`], [`parser::Stmt`] or [`parser::Expr`] depending on
//!    the requested [`Rule`].
//! 3. [`driver`]: the interactive read/parse/print loop behind the binary;
//!    not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! let source = dolang::parse_source(r#"print("Hello, World!");"#).unwrap();
//! assert_eq!(source.statements.len(), 1);
//! ```

pub mod driver;
pub mod parser;

pub use parser::{Ast, Error, LexError, ParseError, Parser, Rule, Token, TokenKind};

use parser::{Lexer, Source};

/// Tokenize `source`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).lex()
}

/// Lex and parse `source` as the given rule.
pub fn parse(source: &str, rule: Rule) -> Result<Ast, Error> {
    let tokens = lex(source)?;
    Ok(Parser::new(tokens).parse(rule)?)
}

/// Lex and parse a complete program.
pub fn parse_source(source: &str) -> Result<Source, Error> {
    let tokens = lex(source)?;
    Ok(Parser::new(tokens).parse_source()?)
}
