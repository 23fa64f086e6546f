//! Expression parsing with precedence climbing
//!
//! Each precedence level is a separate method; every binary level is
//! left-associative, so `a - b - c` parses as `(a - b) - c`.
//!
//! # Grammar
//!
//! ```text
//! expr           ::= logical
//! logical        ::= comparison (("AND" | "OR") comparison)*
//! comparison     ::= additive (("<" | "<=" | ">" | ">=" | "==" | "!=") additive)*
//! additive       ::= multiplicative (("+" | "-") multiplicative)*
//! multiplicative ::= secondary (("*" | "/") secondary)*
//! secondary      ::= primary ("." IDENT ("(" arguments? ")")?)*
//! primary        ::= literal | "(" expr ")" | object | IDENT ("(" arguments? ")")?
//! object         ::= "OBJECT" IDENT? "DO" let_stmt* def_stmt* "END"
//! arguments      ::= expr ("," expr)*
//! ```
//!
//! `AND` and `OR` share one level; the lexer binds a sign directly in front
//! of a digit into the number, so `a -1` is two primaries rather than a
//! subtraction.

use crate::parser::ast::{BinaryOp, Expr, ObjectExpr};
use crate::parser::literals::literal_from_token;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

const LOGICAL: &[BinaryOp] = &[BinaryOp::And, BinaryOp::Or];
const COMPARISON: &[BinaryOp] = &[
    BinaryOp::Lt,
    BinaryOp::Le,
    BinaryOp::Gt,
    BinaryOp::Ge,
    BinaryOp::Eq,
    BinaryOp::Ne,
];
const ADDITIVE: &[BinaryOp] = &[BinaryOp::Add, BinaryOp::Sub];
const MULTIPLICATIVE: &[BinaryOp] = &[BinaryOp::Mul, BinaryOp::Div];

impl Parser {
    /// Parse an expression
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_logical()
    }

    fn parse_logical(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(LOGICAL, Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(COMPARISON, Self::parse_additive)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(ADDITIVE, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(MULTIPLICATIVE, Self::parse_secondary)
    }

    /// One left-associative level: `operand (op operand)*`
    fn parse_binary(
        &mut self,
        operators: &[BinaryOp],
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;

        while let Some(op) = self.match_operator(operators) {
            let right = operand(self)?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    fn match_operator(&mut self, operators: &[BinaryOp]) -> Option<BinaryOp> {
        let op = operators
            .iter()
            .copied()
            .find(|op| self.tokens.check(op.symbol()))?;
        self.tokens.match_token(op.symbol());
        Some(op)
    }

    /// Primary followed by any number of `.name` or `.name(args)` accesses
    fn parse_secondary(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        while self.tokens.match_token(".") {
            let name = self.expect_identifier("after '.'")?;

            expr = if self.tokens.match_token("(") {
                let arguments = self.parse_arguments()?;
                Expr::Method {
                    receiver: Box::new(expr),
                    name,
                    arguments,
                }
            } else {
                Expr::Property {
                    receiver: Box::new(expr),
                    name,
                }
            };
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.tokens.next_token() else {
            return Err(self.error("expected an expression"));
        };

        match token.kind {
            TokenKind::Integer | TokenKind::Decimal | TokenKind::Character | TokenKind::String => {
                self.tokens.match_token(token.kind);
                literal_from_token(&token)
            }
            TokenKind::Identifier => match token.literal.as_str() {
                "NIL" | "TRUE" | "FALSE" => {
                    self.tokens.match_token(TokenKind::Identifier);
                    literal_from_token(&token)
                }
                "OBJECT" => self.parse_object().map(Expr::Object),
                _ => self.parse_variable_or_function(),
            },
            TokenKind::Operator if token.literal == "(" => self.parse_group(),
            TokenKind::Operator => Err(self.error("expected an expression")),
        }
    }

    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        self.expect("(", "to open a group")?;
        let expr = self.parse_expression()?;
        self.expect(")", "to close the group")?;
        Ok(Expr::Group(Box::new(expr)))
    }

    fn parse_variable_or_function(&mut self) -> Result<Expr, ParseError> {
        let name = self.expect_identifier("in expression")?;

        if self.tokens.match_token("(") {
            let arguments = self.parse_arguments()?;
            Ok(Expr::Function { name, arguments })
        } else {
            Ok(Expr::Variable(name))
        }
    }

    /// Argument list after an already consumed `(`, through the closing `)`
    fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut arguments = Vec::new();

        if !self.tokens.check(")") {
            arguments.push(self.parse_expression()?);
            while self.tokens.match_token(",") {
                arguments.push(self.parse_expression()?);
            }
        }

        self.expect(")", "to close the argument list")?;
        Ok(arguments)
    }

    /// `OBJECT [name] DO` fields, then methods, `END`
    fn parse_object(&mut self) -> Result<ObjectExpr, ParseError> {
        self.expect("OBJECT", "to start an object")?;

        let name = if !self.tokens.check("DO") && self.tokens.check(TokenKind::Identifier) {
            Some(self.expect_identifier("as object name")?)
        } else {
            None
        };
        self.expect("DO", "to open object body")?;

        let mut fields = Vec::new();
        while self.tokens.check("LET") {
            fields.push(self.parse_let_statement()?);
        }

        let mut methods = Vec::new();
        while self.tokens.check("DEF") {
            methods.push(self.parse_def_statement()?);
        }

        self.expect("END", "to close object body")?;
        Ok(ObjectExpr {
            name,
            fields,
            methods,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::Parser;
    use crate::parser::token::Token;
    use num_bigint::BigInt;

    fn parse_expr(tokens: Vec<Token>) -> Expr {
        Parser::new(tokens).parse_expr().unwrap()
    }

    fn var(name: &str) -> Expr {
        Expr::variable(name)
    }

    #[test]
    fn test_left_associative() {
        let expr = parse_expr(vec![
            Token::identifier("a"),
            Token::operator("-"),
            Token::identifier("b"),
            Token::operator("-"),
            Token::identifier("c"),
        ]);
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Sub,
                Expr::binary(BinaryOp::Sub, var("a"), var("b")),
                var("c")
            )
        );
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let expr = parse_expr(vec![
            Token::identifier("a"),
            Token::operator("+"),
            Token::identifier("b"),
            Token::operator("*"),
            Token::identifier("c"),
        ]);
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Add,
                var("a"),
                Expr::binary(BinaryOp::Mul, var("b"), var("c"))
            )
        );
    }

    #[test]
    fn test_and_or_share_a_level() {
        let expr = parse_expr(vec![
            Token::identifier("a"),
            Token::identifier("OR"),
            Token::identifier("b"),
            Token::identifier("AND"),
            Token::identifier("c"),
        ]);
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::And,
                Expr::binary(BinaryOp::Or, var("a"), var("b")),
                var("c")
            )
        );
    }

    #[test]
    fn test_chained_access() {
        let expr = parse_expr(vec![
            Token::identifier("a"),
            Token::operator("."),
            Token::identifier("b"),
            Token::operator("."),
            Token::identifier("c"),
            Token::operator("("),
            Token::integer("1"),
            Token::operator(")"),
        ]);
        assert_eq!(
            expr,
            Expr::Method {
                receiver: Box::new(Expr::Property {
                    receiver: Box::new(var("a")),
                    name: "b".to_string(),
                }),
                name: "c".to_string(),
                arguments: vec![Expr::Literal(Literal::Integer(BigInt::from(1)))],
            }
        );
    }

    #[test]
    fn test_anonymous_object() {
        let expr = parse_expr(vec![
            Token::identifier("OBJECT"),
            Token::identifier("DO"),
            Token::identifier("END"),
        ]);
        assert_eq!(
            expr,
            Expr::Object(ObjectExpr {
                name: None,
                fields: vec![],
                methods: vec![],
            })
        );
    }

    #[test]
    fn test_keyword_literals_are_not_calls() {
        let err = Parser::new(vec![
            Token::identifier("TRUE"),
            Token::operator("("),
            Token::operator(")"),
        ])
        .parse_expr()
        .unwrap_err();
        assert_eq!(err.message, "expected end of input");
        assert_eq!(err.token, Some(Token::operator("(")));
    }
}
