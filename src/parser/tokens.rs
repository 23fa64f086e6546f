//! Token cursor driven by the parser
//!
//! [`TokenStream`] mirrors [`CharStream`](super::chars::CharStream) one level
//! up: lookahead and consumption over tokens instead of characters. A
//! [`Pattern`] matches a token either by kind or by exact literal text, so
//! `Token::identifier("LET")` is matched by both
//! `Pattern::Kind(TokenKind::Identifier)` and `Pattern::Literal("LET")`.

use super::token::{Token, TokenKind};

/// A single-token pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'a> {
    Kind(TokenKind),
    Literal(&'a str),
}

impl Pattern<'_> {
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            Pattern::Kind(kind) => token.kind == *kind,
            Pattern::Literal(literal) => token.literal == *literal,
        }
    }
}

impl From<TokenKind> for Pattern<'static> {
    fn from(kind: TokenKind) -> Self {
        Pattern::Kind(kind)
    }
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(literal: &'a str) -> Self {
        Pattern::Literal(literal)
    }
}

/// Position-tracking cursor over a token list.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Returns true if there is a token at `index + offset`.
    pub fn has(&self, offset: usize) -> bool {
        self.index + offset < self.tokens.len()
    }

    /// Returns the token at `index + offset`.
    ///
    /// # Panics
    ///
    /// Panics if there is no token at that offset; callers check with
    /// [`has`](Self::has) or a successful [`peek`](Self::peek) first.
    pub fn get(&self, offset: usize) -> &Token {
        assert!(
            self.has(offset),
            "token offset {offset} out of range at index {}",
            self.index
        );
        &self.tokens[self.index + offset]
    }

    /// Returns the most recently consumed token.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been consumed yet.
    pub fn previous(&self) -> &Token {
        assert!(self.index > 0, "no token has been consumed");
        &self.tokens[self.index - 1]
    }

    /// The next unconsumed token, or `None` at end of input.
    pub fn next_token(&self) -> Option<Token> {
        self.tokens.get(self.index).cloned()
    }

    /// Returns true if the tokens at consecutive offsets each match the
    /// corresponding pattern. Nothing is consumed.
    pub fn peek(&self, patterns: &[Pattern<'_>]) -> bool {
        patterns.iter().enumerate().all(|(offset, pattern)| {
            self.tokens
                .get(self.index + offset)
                .is_some_and(|token| pattern.matches(token))
        })
    }

    /// Same test as [`peek`](Self::peek); on success advances past the
    /// matched tokens.
    pub fn consume(&mut self, patterns: &[Pattern<'_>]) -> bool {
        let matched = self.peek(patterns);
        if matched {
            self.index += patterns.len();
        }
        matched
    }

    pub fn check<'p>(&self, pattern: impl Into<Pattern<'p>>) -> bool {
        self.peek(&[pattern.into()])
    }

    pub fn match_token<'p>(&mut self, pattern: impl Into<Pattern<'p>>) -> bool {
        self.consume(&[pattern.into()])
    }
}
