// End-to-end tests: program text through the lexer and the parser

use dolang::parser::{BinaryOp, DefStmt, Expr, LetStmt, Literal, ObjectExpr, Stmt};
use dolang::{parse, parse_source, Ast, Error, Rule};
use num_bigint::BigInt;

fn int(value: i64) -> Expr {
    Expr::Literal(Literal::Integer(BigInt::from(value)))
}

#[test]
fn test_hello_world() {
    let source = parse_source(
        r#"
        DEF main() DO
            print("Hello, World!");
        END
        "#,
    )
    .unwrap();

    assert_eq!(
        source.statements,
        vec![Stmt::Def(DefStmt {
            name: "main".to_string(),
            parameters: vec![],
            body: vec![Stmt::Expression(Expr::Function {
                name: "print".to_string(),
                arguments: vec![Expr::Literal(Literal::String("Hello, World!".to_string()))],
            })],
        })]
    );
}

#[test_log::test]
fn test_counter_object() {
    let source = parse_source(
        r#"
        // a counter with one field and two methods
        LET counter = OBJECT Counter DO
            LET count = 0;
            DEF increment() DO
                this.count = this.count + 1;
            END
            DEF get() DO
                RETURN this.count;
            END
        END;

        FOR i IN range(0, 10) DO
            counter.increment();
        END
        "#,
    )
    .unwrap();

    assert_eq!(source.statements.len(), 2);

    let Stmt::Let(LetStmt {
        name,
        value: Some(Expr::Object(object)),
    }) = &source.statements[0]
    else {
        panic!("Expected object declaration, got {:?}", source.statements[0]);
    };
    assert_eq!(name, "counter");
    assert_eq!(
        object,
        &ObjectExpr {
            name: Some("Counter".to_string()),
            fields: vec![LetStmt {
                name: "count".to_string(),
                value: Some(int(0)),
            }],
            methods: vec![
                DefStmt {
                    name: "increment".to_string(),
                    parameters: vec![],
                    body: vec![Stmt::Assignment {
                        target: Expr::Property {
                            receiver: Box::new(Expr::variable("this")),
                            name: "count".to_string(),
                        },
                        value: Expr::binary(
                            BinaryOp::Add,
                            Expr::Property {
                                receiver: Box::new(Expr::variable("this")),
                                name: "count".to_string(),
                            },
                            int(1)
                        ),
                    }],
                },
                DefStmt {
                    name: "get".to_string(),
                    parameters: vec![],
                    body: vec![Stmt::Return {
                        value: Some(Expr::Property {
                            receiver: Box::new(Expr::variable("this")),
                            name: "count".to_string(),
                        }),
                    }],
                },
            ],
        }
    );

    assert_eq!(
        source.statements[1],
        Stmt::For {
            name: "i".to_string(),
            iterable: Expr::Function {
                name: "range".to_string(),
                arguments: vec![int(0), int(10)],
            },
            body: vec![Stmt::Expression(Expr::Method {
                receiver: Box::new(Expr::variable("counter")),
                name: "increment".to_string(),
                arguments: vec![],
            })],
        }
    );
}

#[test]
fn test_nested_blocks() {
    let source = parse_source(
        "DEF abs(x) DO\n\
             IF x < 0 DO RETURN 0 - x; ELSE RETURN x; END\n\
         END",
    )
    .unwrap();

    let Stmt::Def(def) = &source.statements[0] else {
        panic!("Expected definition");
    };
    assert_eq!(def.parameters, ["x"]);
    assert!(matches!(
        &def.body[..],
        [Stmt::If { then_body, else_body, .. }] if then_body.len() == 1 && else_body.len() == 1
    ));
}

#[test]
fn test_sign_binds_to_number() {
    // `x -1` is `x` followed by the integer `-1`, not a subtraction
    let err = parse("x -1", Rule::Expr).unwrap_err();
    match err {
        Error::Parse(err) => assert_eq!(err.token, Some(dolang::Token::integer("-1"))),
        Error::Lex(err) => panic!("Unexpected lex error {err}"),
    }

    assert_eq!(
        parse("x - 1", Rule::Expr).unwrap(),
        Ast::Expr(Expr::binary(BinaryOp::Sub, Expr::variable("x"), int(1)))
    );
}

#[test]
fn test_exponent_integer_is_decimal() {
    let ast = parse("1e3", Rule::Expr).unwrap();
    assert!(matches!(ast, Ast::Expr(Expr::Literal(Literal::Decimal(_)))));
}

#[test]
fn test_backspace_escape_in_string_is_literal_b() {
    assert_eq!(
        parse(r#""a\bc""#, Rule::Expr).unwrap(),
        Ast::Expr(Expr::Literal(Literal::String("abc".to_string())))
    );
}

#[test]
fn test_lex_error_surfaces() {
    let err = parse_source(r#"print("unterminated);"#).unwrap_err();
    assert!(matches!(err, Error::Lex(ref e) if e.index == 21), "{err:?}");
}

#[test]
fn test_missing_end() {
    let err = parse_source("IF TRUE DO print(1);").unwrap_err();
    let Error::Parse(err) = err else {
        panic!("Expected parse error");
    };
    assert_eq!(err.token, None);
    assert_eq!(
        err.to_string(),
        "expected 'END' to close conditional, found end of input"
    );
}
