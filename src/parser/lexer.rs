//! Lexer (tokenizer) for program source text
//!
//! Converts raw source text into a flat [`Token`] list consumed by the parser.
//! Whitespace and `//` line comments are skipped. Every token class is lexed
//! with maximal munch over a [`CharStream`]: a rule keeps consuming while its
//! character class matches, and whatever it leaves behind starts the next
//! token (`1fish2fish` is an integer followed by an identifier).

use super::chars::{CharClass, CharStream};
use super::token::{Token, TokenKind};
use tracing::{debug, trace};

const WHITESPACE: CharClass = CharClass::AnyOf(" \u{8}\n\r\t");
const IDENTIFIER_START: CharClass = CharClass::Where(|c| c.is_ascii_alphabetic() || c == '_');
const IDENTIFIER_PART: CharClass =
    CharClass::Where(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
const DIGIT: CharClass = CharClass::Where(|c| c.is_ascii_digit());
const SIGN: CharClass = CharClass::AnyOf("+-");
const CHARACTER_BODY: CharClass = CharClass::NoneOf("'\n\r\\");
const STRING_BODY: CharClass = CharClass::NoneOf("\"\n\r\\");
const ESCAPE_CODE: CharClass = CharClass::AnyOf("bnrt'\"\\");
const COMMENT_BODY: CharClass = CharClass::NoneOf("\n\r");
/// Characters that combine with a following `=` into one operator.
const COMPARISON_PREFIX: CharClass = CharClass::AnyOf("<>!=.+");
/// Everything that cannot start an identifier, number, quoted literal or
/// whitespace run lexes as a single-character operator.
const OPERATOR: CharClass = CharClass::Where(|c| {
    !(c.is_ascii_alphanumeric()
        || matches!(c, '_' | '\'' | '"' | ' ' | '\u{8}' | '\n' | '\r' | '\t'))
});

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at index {index}")]
pub struct LexError {
    pub message: String,
    /// Offset into the source at which lexing failed, counted in Unicode
    /// scalar values (`char`s), not bytes or UTF-16 code units
    pub index: usize,
}

/// Lexer for program source text
pub struct Lexer {
    chars: CharStream,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            chars: CharStream::new(input),
        }
    }

    /// Tokenize the entire input.
    ///
    /// The first malformed token aborts lexing; no partial token list is
    /// returned.
    pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
        debug!(len = self.chars.remaining(), "lexing started");
        let mut tokens = Vec::new();

        while self.chars.has(0) {
            if self.chars.peek(&[WHITESPACE]) {
                self.skip_whitespace();
            } else if self.chars.peek(&[CharClass::Is('/'), CharClass::Is('/')]) {
                self.skip_comment();
            } else {
                let token = self.lex_token()?;
                trace!(kind = %token.kind, literal = %token.literal, "token");
                tokens.push(token);
            }
        }

        debug!(count = tokens.len(), "lexing finished");
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.consume(&[WHITESPACE]) {}
        let skipped = self.chars.cut();
        trace!(len = skipped.chars().count(), "skipped whitespace");
    }

    fn skip_comment(&mut self) {
        self.chars.consume(&[CharClass::Is('/'), CharClass::Is('/')]);
        while self.chars.consume(&[COMMENT_BODY]) {}
        let comment = self.chars.cut();
        trace!(%comment, "skipped comment");
    }

    /// Lex one token, choosing the token class from the leading character(s).
    fn lex_token(&mut self) -> Result<Token, LexError> {
        if self.chars.peek(&[IDENTIFIER_START]) {
            Ok(self.lex_identifier())
        } else if self.chars.peek(&[DIGIT]) || self.chars.peek(&[SIGN, DIGIT]) {
            Ok(self.lex_number())
        } else if self.chars.peek(&[CharClass::Is('\'')]) {
            self.lex_character()
        } else if self.chars.peek(&[CharClass::Is('"')]) {
            self.lex_string()
        } else if self.chars.peek(&[COMPARISON_PREFIX]) || self.chars.peek(&[OPERATOR]) {
            self.lex_operator()
        } else {
            Err(self.error("not a valid token"))
        }
    }

    fn lex_identifier(&mut self) -> Token {
        self.chars.consume(&[IDENTIFIER_START]);
        while self.chars.consume(&[IDENTIFIER_PART]) {}
        Token::new(TokenKind::Identifier, self.chars.cut())
    }

    /// Integer or decimal, with an optional leading sign and exponent.
    ///
    /// Only a fractional part makes a decimal; `1e10` stays an integer. The
    /// `.` and the `e` are consumed only together with the digit(s) that must
    /// follow them, so `1.` and `1e` leave the suffix for the next token.
    fn lex_number(&mut self) -> Token {
        let mut kind = TokenKind::Integer;

        self.chars.consume(&[SIGN]);
        while self.chars.consume(&[DIGIT]) {}

        if self.chars.consume(&[CharClass::Is('.'), DIGIT]) {
            kind = TokenKind::Decimal;
            while self.chars.consume(&[DIGIT]) {}
        }

        if self.chars.consume(&[CharClass::Is('e'), SIGN, DIGIT])
            || self.chars.consume(&[CharClass::Is('e'), DIGIT])
        {
            while self.chars.consume(&[DIGIT]) {}
        }

        Token::new(kind, self.chars.cut())
    }

    /// Character literal: exactly one body character or escape between quotes.
    fn lex_character(&mut self) -> Result<Token, LexError> {
        self.chars.consume(&[CharClass::Is('\'')]);

        if self.chars.peek(&[CharClass::Is('\\')]) {
            self.lex_escape()?;
        } else if !self.chars.consume(&[CHARACTER_BODY]) {
            return Err(self.error("invalid character literal"));
        }

        if !self.chars.consume(&[CharClass::Is('\'')]) {
            return Err(self.error("expected closing ' in character literal"));
        }

        Ok(Token::new(TokenKind::Character, self.chars.cut()))
    }

    /// String literal: any number of body characters or escapes between quotes.
    fn lex_string(&mut self) -> Result<Token, LexError> {
        self.chars.consume(&[CharClass::Is('"')]);

        while self.chars.has(0) && !self.chars.peek(&[CharClass::Is('"')]) {
            if self.chars.peek(&[CharClass::Is('\\')]) {
                self.lex_escape()?;
            } else if !self.chars.consume(&[STRING_BODY]) {
                return Err(self.error("unterminated string literal"));
            }
        }

        if !self.chars.consume(&[CharClass::Is('"')]) {
            return Err(self.error("unterminated string literal"));
        }

        Ok(Token::new(TokenKind::String, self.chars.cut()))
    }

    /// Backslash followed by one of `b n r t ' " \`.
    fn lex_escape(&mut self) -> Result<(), LexError> {
        self.chars.consume(&[CharClass::Is('\\')]);
        if !self.chars.consume(&[ESCAPE_CODE]) {
            return Err(self.error("invalid escape sequence"));
        }
        Ok(())
    }

    fn lex_operator(&mut self) -> Result<Token, LexError> {
        if self.chars.consume(&[COMPARISON_PREFIX]) {
            self.chars.consume(&[CharClass::Is('=')]);
        } else if !self.chars.consume(&[OPERATOR]) {
            return Err(self.error("not a valid operator"));
        }
        Ok(Token::new(TokenKind::Operator, self.chars.cut()))
    }

    fn error(&self, message: &str) -> LexError {
        LexError {
            message: message.to_string(),
            index: self.chars.index(),
        }
    }
}
