//! Character cursor driven by the lexer
//!
//! [`CharStream`] separates *matching* characters from *cutting* them into a
//! literal. A lexing rule may call [`CharStream::consume`] any number of times
//! while it decides how far a token extends, then call [`CharStream::cut`]
//! once to take everything matched since the previous cut. Whitespace and
//! comments go through the same path and simply drop their cut text.

/// A single-character pattern.
#[derive(Debug, Clone, Copy)]
pub enum CharClass {
    /// Exactly this character
    Is(char),
    /// Any character contained in the string
    AnyOf(&'static str),
    /// Any character not contained in the string
    NoneOf(&'static str),
    /// Any character accepted by the predicate
    Where(fn(char) -> bool),
}

impl CharClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Is(expected) => c == expected,
            CharClass::AnyOf(set) => set.contains(c),
            CharClass::NoneOf(set) => !set.contains(c),
            CharClass::Where(predicate) => predicate(c),
        }
    }
}

/// Position-tracking cursor over the source characters.
///
/// Indices are character offsets into the input, which is also what
/// [`LexError`](super::lexer::LexError) reports.
#[derive(Debug)]
pub struct CharStream {
    input: Vec<char>,
    index: usize,
    length: usize,
}

impl CharStream {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            index: 0,
            length: 0,
        }
    }

    /// Current position in the input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of characters not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.index
    }

    /// Returns true if a character exists at `index + offset`.
    pub fn has(&self, offset: usize) -> bool {
        self.index + offset < self.input.len()
    }

    /// Returns true if the characters at consecutive offsets each match the
    /// corresponding pattern. Nothing is consumed.
    pub fn peek(&self, patterns: &[CharClass]) -> bool {
        patterns.iter().enumerate().all(|(offset, pattern)| {
            self.input
                .get(self.index + offset)
                .is_some_and(|&c| pattern.matches(c))
        })
    }

    /// Same test as [`peek`](Self::peek); on success advances past the
    /// matched characters and adds them to the pending literal.
    pub fn consume(&mut self, patterns: &[CharClass]) -> bool {
        let matched = self.peek(patterns);
        if matched {
            self.index += patterns.len();
            self.length += patterns.len();
        }
        matched
    }

    /// Takes every character consumed since the last cut.
    pub fn cut(&mut self) -> String {
        let literal = self.input[self.index - self.length..self.index]
            .iter()
            .collect();
        self.length = 0;
        literal
    }
}
