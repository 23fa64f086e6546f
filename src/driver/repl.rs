//! Input collection and evaluation
//!
//! A non-empty line is a complete program. An empty line switches to
//! multiline mode, which collects lines until the next empty one. Every
//! program is lexed and parsed independently; errors are reported and the
//! loop moves on to the next input.

use crate::parser::{Error, LexError, Lexer, Parser, Rule};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const MULTILINE_PROMPT: &str = "Multiline input - enter empty line to submit:";

/// How each program is evaluated
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub rule: Rule,
    /// Print the token list instead of parsing
    pub tokens_only: bool,
    /// Colour error headers
    pub color: bool,
}

/// Read the next program, or `None` at end of input.
pub fn read_input<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    if !line.is_empty() {
        return Ok(Some(line));
    }

    writeln!(out, "{MULTILINE_PROMPT}")?;
    out.flush()?;

    let mut program = String::new();
    while let Some(line) = read_line(input)? {
        if line.is_empty() {
            break;
        }
        program.push_str(&line);
        program.push('\n');
    }
    Ok(Some(program))
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Lex and parse `source`, printing the result or the error.
///
/// Returns `Ok(false)` if the program had a lexical or syntactic error.
pub fn evaluate<W: Write>(source: &str, options: &Options, out: &mut W) -> io::Result<bool> {
    match run_front_end(source, options, out)? {
        Ok(()) => Ok(true),
        Err(err) => {
            debug!(%err, "evaluation failed");
            report(&err, source, options.color, out)?;
            Ok(false)
        }
    }
}

fn run_front_end<W: Write>(
    source: &str,
    options: &Options,
    out: &mut W,
) -> io::Result<Result<(), Error>> {
    let tokens = match Lexer::new(source).lex() {
        Ok(tokens) => tokens,
        Err(err) => return Ok(Err(err.into())),
    };

    if options.tokens_only {
        writeln!(out, "{} token(s)", tokens.len())?;
        for token in &tokens {
            writeln!(out, " - {token}")?;
        }
        return Ok(Ok(()));
    }

    match Parser::new(tokens).parse(options.rule) {
        Ok(ast) => {
            writeln!(out, "{ast:#?}")?;
            Ok(Ok(()))
        }
        Err(err) => Ok(Err(err.into())),
    }
}

/// Print an error, with the offending line and a caret for lexical errors.
pub fn report<W: Write>(err: &Error, source: &str, color: bool, out: &mut W) -> io::Result<()> {
    match err {
        Error::Lex(err) => {
            write_header("LexError", color, out)?;
            writeln!(out, " {err}")?;
            write_caret(err, source, out)
        }
        Error::Parse(_) => {
            write_header("ParseError", color, out)?;
            writeln!(out, " {err}")
        }
    }
}

fn write_header<W: Write>(kind: &str, color: bool, out: &mut W) -> io::Result<()> {
    let header = format!("{kind}:");
    if color {
        write!(out, "{}", header.red().bold())
    } else {
        write!(out, "{header}")
    }
}

fn write_caret<W: Write>(err: &LexError, source: &str, out: &mut W) -> io::Result<()> {
    let line_start = source
        .chars()
        .take(err.index)
        .enumerate()
        .filter(|&(_, c)| c == '\n')
        .last()
        .map_or(0, |(i, _)| i + 1);
    let line: String = source
        .chars()
        .skip(line_start)
        .take_while(|&c| c != '\n' && c != '\r')
        .collect();

    writeln!(out, "  {line}")?;
    writeln!(out, "  {}^", " ".repeat(err.index - line_start))
}

/// Evaluate programs from `input` until it is exhausted.
pub fn repl<R: BufRead, W: Write>(input: &mut R, out: &mut W, options: &Options) -> io::Result<()> {
    while let Some(source) = read_input(input, out)? {
        evaluate(&source, options, out)?;
        out.flush()?;
    }
    debug!("end of input");
    Ok(())
}
