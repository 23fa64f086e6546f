//! Statement parsing implementation
//!
//! Statements are chosen by their leading keyword. Anything that does not
//! start with a keyword is an expression statement, which becomes an
//! assignment if an `=` follows the first expression.
//!
//! # Grammar
//!
//! ```text
//! statement  ::= let_stmt | def_stmt | if_stmt | for_stmt | return_stmt
//!              | expr_stmt
//! let_stmt   ::= "LET" IDENT ("=" expr)? ";"
//! def_stmt   ::= "DEF" IDENT "(" (IDENT ("," IDENT)*)? ")" "DO" statement* "END"
//! if_stmt    ::= "IF" expr "DO" statement* ("ELSE" statement*)? "END"
//! for_stmt   ::= "FOR" IDENT "IN" expr "DO" statement* "END"
//! return_stmt::= "RETURN" expr? ";"
//!              | "RETURN" "IF" expr ";"
//! expr_stmt  ::= expr ("=" expr)? ";"
//! ```
//!
//! `RETURN IF cond;` is shorthand for `IF cond DO RETURN; END`.

use crate::parser::ast::{DefStmt, LetStmt, Stmt};
use crate::parser::parse::{ParseError, Parser};
use tracing::trace;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        trace!(next = ?self.tokens.next_token(), "statement");

        if self.tokens.check("LET") {
            self.parse_let_statement().map(Stmt::Let)
        } else if self.tokens.check("DEF") {
            self.parse_def_statement().map(Stmt::Def)
        } else if self.tokens.check("IF") {
            self.parse_if_statement()
        } else if self.tokens.check("FOR") {
            self.parse_for_statement()
        } else if self.tokens.check("RETURN") {
            self.parse_return_statement()
        } else {
            self.parse_expression_statement()
        }
    }

    /// Statements up to (not including) one of the terminator keywords or
    /// the end of input.
    fn parse_block(&mut self, terminators: &[&str]) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while self.tokens.has(0) && !terminators.iter().any(|&t| self.tokens.check(t)) {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    pub(crate) fn parse_let_statement(&mut self) -> Result<LetStmt, ParseError> {
        self.expect("LET", "to start a declaration")?;
        let name = self.expect_identifier("after 'LET'")?;

        let value = if self.tokens.match_token("=") {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect(";", "after declaration")?;
        Ok(LetStmt { name, value })
    }

    pub(crate) fn parse_def_statement(&mut self) -> Result<DefStmt, ParseError> {
        self.expect("DEF", "to start a definition")?;
        let name = self.expect_identifier("after 'DEF'")?;

        self.expect("(", "after function name")?;
        let mut parameters = Vec::new();
        if !self.tokens.check(")") {
            parameters.push(self.expect_identifier("in parameter list")?);
            while self.tokens.match_token(",") {
                parameters.push(self.expect_identifier("after ','")?);
            }
        }
        self.expect(")", "to close the parameter list")?;

        self.expect("DO", "before function body")?;
        let body = self.parse_block(&["END"])?;
        self.expect("END", "to close function body")?;

        Ok(DefStmt {
            name,
            parameters,
            body,
        })
    }

    fn parse_if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect("IF", "to start a conditional")?;
        let condition = self.parse_expression()?;

        self.expect("DO", "after condition")?;
        let then_body = self.parse_block(&["ELSE", "END"])?;

        let else_body = if self.tokens.match_token("ELSE") {
            self.parse_block(&["END"])?
        } else {
            Vec::new()
        };
        self.expect("END", "to close conditional")?;

        Ok(Stmt::If {
            condition,
            then_body,
            else_body,
        })
    }

    fn parse_for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect("FOR", "to start a loop")?;
        let name = self.expect_identifier("after 'FOR'")?;

        self.expect("IN", "after loop variable")?;
        let iterable = self.parse_expression()?;

        self.expect("DO", "after loop iterable")?;
        let body = self.parse_block(&["END"])?;
        self.expect("END", "to close loop")?;

        Ok(Stmt::For {
            name,
            iterable,
            body,
        })
    }

    fn parse_return_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect("RETURN", "to start a return")?;

        if self.tokens.match_token("IF") {
            let condition = self.parse_expression()?;
            self.expect(";", "after return condition")?;
            return Ok(Stmt::If {
                condition,
                then_body: vec![Stmt::Return { value: None }],
                else_body: Vec::new(),
            });
        }

        let value = if self.tokens.check(";") {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect(";", "after return value")?;
        Ok(Stmt::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;

        if self.tokens.match_token("=") {
            let value = self.parse_expression()?;
            self.expect(";", "after assignment")?;
            return Ok(Stmt::Assignment {
                target: expr,
                value,
            });
        }

        self.expect(";", "after expression")?;
        Ok(Stmt::Expression(expr))
    }
}
