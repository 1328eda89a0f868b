//! The scanning cursor.

use super::pattern::Pattern;

/// A position over an immutable input string.
///
/// The position is a byte offset, always on a `char` boundary, and satisfies
/// `0 <= position <= source.len()`. Reading at or past the end yields `None`
/// rather than an error; every scanning loop therefore terminates on finite
/// input.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    position: usize,
}

impl Cursor {
    /// Create a cursor at the start of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            position: 0,
        }
    }

    /// True iff the position is at or past the end of the input.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte offset into the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Reset the position to the start of the input, for reuse of the same
    /// cursor on the same source. Not invoked mid-parse in normal operation.
    pub const fn rewind(&mut self) {
        self.position = 0;
    }

    /// The unconsumed input from the current position to the end.
    #[must_use]
    pub fn remainder(&self) -> &str {
        &self.source[self.position..]
    }

    /// The current character, without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Return the current character and advance past it, or `None` without
    /// advancing when out of bounds.
    pub fn read(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// True iff `pattern` matches at the very start of the remainder.
    /// Does not consume.
    #[must_use]
    pub fn matches(&self, pattern: &Pattern) -> bool {
        pattern.match_len(self.remainder()).is_some()
    }

    /// If `pattern` matches at the start of the remainder, advance past the
    /// match and return true; otherwise leave the cursor unchanged.
    pub fn consume_match(&mut self, pattern: &Pattern) -> bool {
        match pattern.match_len(self.remainder()) {
            Some(len) => {
                self.position += len;
                true
            }
            None => false,
        }
    }

    /// Advance one character at a time, collecting consumed characters,
    /// until end of input or until `stop` holds at the current, unconsumed
    /// position. Returns the collected substring.
    pub fn read_until(&mut self, stop: impl Fn(&Self) -> bool) -> String {
        let start = self.position;
        while !self.eof() && !stop(self) {
            if let Some(c) = self.peek() {
                self.position += c.len_utf8();
            }
        }
        self.source[start..self.position].to_string()
    }

    /// Read a maximal run of word characters starting at the cursor.
    /// Empty when the cursor is not at a word character.
    pub fn read_identifier(&mut self) -> String {
        self.read_until(|cursor| !cursor.matches(&Pattern::Word))
    }

    /// Skip a maximal run of whitespace, returning what was skipped.
    pub fn skip_whitespace(&mut self) -> String {
        self.read_until(|cursor| !cursor.matches(&Pattern::Whitespace))
    }
}
