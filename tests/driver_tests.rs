// Tests for the read/parse/print loop behind the binary

use dolang::driver::{evaluate, repl, Options};
use dolang::Rule;
use std::io::Cursor;

fn run(input: &str, options: Options) -> String {
    let mut out = Vec::new();
    repl(&mut Cursor::new(input.as_bytes()), &mut out, &options).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_tokens_mode() {
    let options = Options {
        tokens_only: true,
        ..Options::default()
    };
    assert_eq!(
        run("LET x;\n", options),
        "3 token(s)\n - identifier 'LET'\n - identifier 'x'\n - operator ';'\n"
    );
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let output = run("'u\nx;;\nx;\n", Options::default());
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(
        lines[..3],
        [
            "LexError: expected closing ' in character literal at index 2",
            "  'u",
            "    ^",
        ]
    );
    assert_eq!(
        lines[3],
        "ParseError: expected an expression, found operator ';'"
    );
    assert!(lines[4].starts_with("Source("), "{output}");
    assert!(output.contains("Variable(\n"), "{output}");
}

#[test]
fn test_multiline_input() {
    let output = run("\nLET x = 1;\nx = 2;\n\n", Options::default());
    assert!(output.starts_with("Multiline input - enter empty line to submit:\n"));
    assert!(output.contains("Let("));
    assert!(output.contains("Assignment {"));
}

#[test]
fn test_rule_selection() {
    let options = Options {
        rule: Rule::Expr,
        ..Options::default()
    };
    let mut out = Vec::new();
    assert!(evaluate("a + b", &options, &mut out).unwrap());
    assert!(String::from_utf8(out).unwrap().starts_with("Expr("));

    let mut out = Vec::new();
    assert!(!evaluate("a + b;", &options, &mut out).unwrap());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "ParseError: expected end of input, found operator ';'\n"
    );
}
