// AST (Abstract Syntax Tree) definitions produced by the parser

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::fmt;

/// Program root: statements in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    pub statements: Vec<Stmt>,
}

impl Source {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}

/// `LET name [= value];`
///
/// A standalone struct so that object expressions can hold a list of fields
/// that is guaranteed to contain nothing but `LET` statements.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: String,
    pub value: Option<Expr>,
}

/// `DEF name(parameters) DO body END`
#[derive(Debug, Clone, PartialEq)]
pub struct DefStmt {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Vec<Stmt>,
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Def(DefStmt),
    If {
        condition: Expr,
        then_body: Vec<Stmt>,
        else_body: Vec<Stmt>,
    },
    For {
        name: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    Return {
        value: Option<Expr>,
    },
    /// Expression evaluated for its effect
    Expression(Expr),
    Assignment {
        target: Expr,
        value: Expr,
    },
}

/// Binary operators, loosest binding first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Logical
    And,
    Or,
    // Comparison
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// The operator as written in source.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "AND" => BinaryOp::And,
            "OR" => BinaryOp::Or,
            "<" => BinaryOp::Lt,
            "<=" => BinaryOp::Le,
            ">" => BinaryOp::Gt,
            ">=" => BinaryOp::Ge,
            "==" => BinaryOp::Eq,
            "!=" => BinaryOp::Ne,
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Literal values, decoded from their tokens at parse time
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Nil,
    Boolean(bool),
    Integer(BigInt),
    Decimal(BigDecimal),
    Character(char),
    String(String),
}

/// `OBJECT [name] DO fields methods END`
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpr {
    pub name: Option<String>,
    pub fields: Vec<LetStmt>,
    pub methods: Vec<DefStmt>,
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Group(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Variable(String),
    Property {
        receiver: Box<Expr>,
        name: String,
    },
    Function {
        name: String,
        arguments: Vec<Expr>,
    },
    Method {
        receiver: Box<Expr>,
        name: String,
        arguments: Vec<Expr>,
    },
    Object(ObjectExpr),
}

impl Expr {
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol_rejects_non_operators() {
        assert_eq!(BinaryOp::from_symbol("<="), Some(BinaryOp::Le));
        assert_eq!(BinaryOp::from_symbol("AND"), Some(BinaryOp::And));
        assert_eq!(BinaryOp::from_symbol("="), None);
        assert_eq!(BinaryOp::from_symbol("and"), None);
        assert_eq!(BinaryOp::from_symbol(".="), None);
    }

    #[test]
    fn test_display_uses_source_symbol() {
        let expr = Expr::binary(BinaryOp::Or, Expr::variable("a"), Expr::variable("b"));
        match expr {
            Expr::Binary { op, .. } => assert_eq!(op.to_string(), "OR"),
            _ => panic!("Expected binary expression"),
        }
    }
}
