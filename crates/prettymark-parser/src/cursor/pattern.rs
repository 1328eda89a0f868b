//! Anchored patterns for cursor lookahead.
//!
//! A pattern answers exactly one question: does it match at the very start
//! of the remaining input, and if so, how many bytes did it cover? There is
//! no backtracking and there are no capture groups, which keeps every match
//! a single forward scan.

/// A pattern matchable at the cursor's current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// A fixed literal prefix such as `"<!--"` or `"-->"`.
    Literal(&'static str),
    /// A single specific character. Used for quote closers, where the
    /// character is only known at runtime.
    Char(char),
    /// One word character: ASCII letter, digit, or underscore.
    Word,
    /// One whitespace character.
    Whitespace,
    /// A tag terminator: an optional `/` followed by `>`.
    TagEnd,
    /// An attribute assignment: `=` with optional whitespace on both sides.
    AttrEquals,
    /// One character that ends an unquoted attribute value: whitespace,
    /// `/`, or `>`.
    ValueEnd,
}

impl Pattern {
    /// Length in bytes of the match at the start of `input`, or `None` if
    /// the pattern does not match there.
    #[must_use]
    pub fn match_len(&self, input: &str) -> Option<usize> {
        match self {
            Self::Literal(literal) => input.starts_with(literal).then_some(literal.len()),
            Self::Char(expected) => input.starts_with(*expected).then_some(expected.len_utf8()),
            Self::Word => input
                .chars()
                .next()
                .filter(|c| is_word_char(*c))
                .map(char::len_utf8),
            Self::Whitespace => input
                .chars()
                .next()
                .filter(|c| c.is_whitespace())
                .map(char::len_utf8),
            Self::TagEnd => {
                if input.starts_with("/>") {
                    Some(2)
                } else if input.starts_with('>') {
                    Some(1)
                } else {
                    None
                }
            }
            Self::AttrEquals => padded_equals_len(input),
            Self::ValueEnd => input
                .chars()
                .next()
                .filter(|c| c.is_whitespace() || *c == '/' || *c == '>')
                .map(char::len_utf8),
        }
    }
}

/// Word characters: ASCII letters, digits, underscore.
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Match `=` with optional whitespace on both sides; the `=` itself is
/// required.
fn padded_equals_len(input: &str) -> Option<usize> {
    let mut len = 0;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.peek().copied() {
        if !c.is_whitespace() {
            break;
        }
        len += c.len_utf8();
        let _ = chars.next();
    }

    if chars.next() != Some('=') {
        return None;
    }
    len += 1;

    while let Some(c) = chars.peek().copied() {
        if !c.is_whitespace() {
            break;
        }
        len += c.len_utf8();
        let _ = chars.next();
    }

    Some(len)
}
