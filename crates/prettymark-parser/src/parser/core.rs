//! The recursive-descent grammar.
//!
//! Three mutually recursive rules (content, element, comment) plus the
//! attribute rule. All parse state lives in the cursor; there is no separate
//! parser state to corrupt, and any finite input yields a tree.

use prettymark_common::warning::warn_once;
use prettymark_dom::{Attribute, Node, is_void_element};

use crate::cursor::{Cursor, Pattern};

/// Parse a markup string into a generic tree rooted at a
/// [`Node::Fragment`].
///
/// Never fails: malformed input degrades to a best-effort partial tree, and
/// tolerated defects are reported through the warn-once diagnostics channel
/// on stderr rather than to the caller.
#[must_use]
pub fn parse(source: &str) -> Node {
    Parser::new(source).run()
}

/// Markup parser over a [`Cursor`].
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    /// Create a parser for the given input.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Consume the parser and return the parsed tree.
    #[must_use]
    pub fn run(mut self) -> Node {
        let children = self.parse_content();
        Node::Fragment { children }
    }

    /// Content rule: a sequence of text runs, comments, and elements.
    ///
    /// Loops until end of input or a `</` closing marker, which belongs to
    /// the enclosing element rule. Re-entered for every element's children
    /// and once for the document root. Pending literal characters are
    /// coalesced into a single text node before each structural boundary.
    fn parse_content(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut text = String::new();

        while !self.cursor.eof() && !self.cursor.matches(&Pattern::Literal("</")) {
            if self.cursor.consume_match(&Pattern::Literal("<!--")) {
                flush_text(&mut text, &mut nodes);
                nodes.push(self.parse_comment());
            } else if self.cursor.consume_match(&Pattern::Literal("<")) {
                flush_text(&mut text, &mut nodes);
                nodes.push(self.parse_element());
            } else if let Some(c) = self.cursor.read() {
                text.push(c);
            }
        }

        flush_text(&mut text, &mut nodes);
        nodes
    }

    /// Comment rule: everything up to (not including) the first `-->`.
    ///
    /// Precondition: the `<!--` opener has been consumed. A comment that
    /// runs off the end of the input keeps everything that was there.
    fn parse_comment(&mut self) -> Node {
        let text = self
            .cursor
            .read_until(|cursor| cursor.matches(&Pattern::Literal("-->")));
        if !self.cursor.consume_match(&Pattern::Literal("-->")) {
            warn_once("Parser", "unterminated comment at end of input");
        }
        Node::Comment { text }
    }

    /// Element rule. Precondition: the opening `<` has been consumed.
    ///
    /// The tag name is stored exactly as scanned; membership in the void set
    /// is checked case-sensitively here (the pretty-printer lower-cases for
    /// its own check). Void elements take no children and accept either `>`
    /// or `/>` as their terminator. The closing tag of a non-void element is
    /// skipped without validating its name against the opening tag.
    fn parse_element(&mut self) -> Node {
        let tag_name = self.cursor.read_identifier();
        if tag_name.is_empty() {
            warn_once(
                "Parser",
                &format!(
                    "element with empty tag name at position {}",
                    self.cursor.position()
                ),
            );
        }
        let _ = self.cursor.skip_whitespace();

        let mut attributes = Vec::new();
        while !self.cursor.eof() && !self.cursor.matches(&Pattern::TagEnd) {
            let start = self.cursor.position();
            if let Some(attribute) = self.parse_attribute() {
                attributes.push(attribute);
            } else if self.cursor.position() == start {
                // Not even a nameless attribute could be scanned here; step
                // over one character so the loop always makes progress.
                let _ = self.cursor.read();
                warn_once(
                    "Parser",
                    &format!("skipping unexpected character in tag at position {start}"),
                );
            }
            let _ = self.cursor.skip_whitespace();
        }

        let mut children = Vec::new();
        if is_void_element(&tag_name) {
            // Structurally closed at the opening tag; both terminator forms
            // are accepted.
            if !self.cursor.consume_match(&Pattern::Literal("/>")) {
                let _ = self.cursor.consume_match(&Pattern::Literal(">"));
            }
        } else if self.cursor.consume_match(&Pattern::Literal(">")) {
            children = self.parse_content();
            if self.cursor.consume_match(&Pattern::Literal("</")) {
                // Skip until and including the next `>`. The closing tag's
                // name is read but never validated.
                let _ = self
                    .cursor
                    .read_until(|cursor| cursor.matches(&Pattern::Char('>')));
                let _ = self.cursor.consume_match(&Pattern::Char('>'));
            } else {
                warn_once("Parser", &format!("unclosed element <{tag_name}>"));
            }
        } else {
            // Self-closing form.
            let _ = self.cursor.consume_match(&Pattern::Literal("/>"));
        }

        Node::Element {
            tag_name,
            attributes,
            children,
        }
    }

    /// Attribute rule: a word-character name, optionally followed by
    /// `=value` where the value is quoted (either kind; only the matching
    /// quote terminates it) or unquoted (up to whitespace, `/`, or `>`).
    ///
    /// Returns `None` when no name could be scanned; a nameless attribute is
    /// never constructed.
    fn parse_attribute(&mut self) -> Option<Attribute> {
        let name = self.cursor.read_identifier();
        let mut value = String::new();

        if self.cursor.consume_match(&Pattern::AttrEquals) {
            match self.cursor.peek() {
                Some(quote @ ('"' | '\'')) => {
                    let _ = self.cursor.read();
                    value = self
                        .cursor
                        .read_until(|cursor| cursor.matches(&Pattern::Char(quote)));
                    if !self.cursor.consume_match(&Pattern::Char(quote)) {
                        warn_once("Parser", "unterminated quoted attribute value");
                    }
                }
                _ => {
                    value = self
                        .cursor
                        .read_until(|cursor| cursor.matches(&Pattern::ValueEnd));
                }
            }
        }

        if name.is_empty() {
            if !value.is_empty() {
                warn_once("Parser", "dropping attribute value with no name");
            }
            return None;
        }
        Some(Attribute::new(name, value))
    }
}

/// Flush a pending literal run into a text node, if non-empty.
fn flush_text(text: &mut String, nodes: &mut Vec<Node>) {
    if !text.is_empty() {
        nodes.push(Node::Text {
            text: std::mem::take(text),
        });
    }
}
