//! Generic markup tree for the prettymark formatter.
//!
//! This crate defines the structural parse result shared by the parser and
//! the pretty-printer: a closed sum type with one variant per node kind and
//! strictly hierarchical ownership (parents own their children, no
//! back-references, no sharing between invocations).
//!
//! # Design
//!
//! The tree is a plain owned enum rather than an arena or a polymorphic
//! object hierarchy. Exhaustive matching keeps every consumer total: adding
//! a node kind is a compile-time-checked change in each transform that walks
//! the tree.

use strum_macros::Display;

/// An attribute on an element.
///
/// Attributes are attached to their owning element in source order; they are
/// not child nodes of the tree proper. Duplicate names are preserved as
/// written — both occurrences simply appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, a maximal run of word characters. Never empty: the
    /// parser drops nameless attribute fragments instead of constructing one.
    pub name: String,
    /// Attribute value. The empty string when no `=value` was present.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }

    /// Returns true if the attribute carried an explicit `=value` part.
    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }
}

/// A node in the generic markup tree.
///
/// The `Display` derive renders the variant name (`Element`, `Text`, ...),
/// used as a kind label in diagnostics and statistics output.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Node {
    /// Root / content container. Carries no data of its own beyond its
    /// children; produced once per parse at the top level.
    Fragment {
        /// Child nodes in source order.
        children: Vec<Node>,
    },
    /// A markup element such as `<div class="a">...</div>`.
    Element {
        /// Tag name exactly as scanned, case preserved.
        tag_name: String,
        /// Attributes in source order, duplicates included.
        attributes: Vec<Attribute>,
        /// Child nodes in source order. Always empty for elements whose tag
        /// name is in the void set — those are structurally closed at their
        /// opening tag regardless of what follows in the markup.
        children: Vec<Node>,
    },
    /// A comment: the raw text between `<!--` and `-->`.
    Comment {
        /// Comment body, unescaped.
        text: String,
    },
    /// A maximal run of literal characters not interpretable as a tag or
    /// comment start. Adjacent literal characters are always coalesced into
    /// a single node before a structural boundary is reached.
    Text {
        /// Literal text, unescaped.
        text: String,
    },
}

impl Node {
    /// Child nodes of this node, or an empty slice for leaf kinds.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Fragment { children } | Self::Element { children, .. } => children,
            Self::Comment { .. } | Self::Text { .. } => &[],
        }
    }
}

/// Tag names that can never have children or a closing tag.
///
/// An element with one of these names is closed at its opening tag; markup
/// following it belongs to the parent. The parser matches against this set
/// case-sensitively (names are stored as scanned); the pretty-printer
/// lower-cases first, so `<BR>` still displays as a void element.
pub const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns true if `tag_name` is a member of [`VOID_ELEMENTS`].
///
/// The comparison is exact; callers wanting case-insensitive behavior
/// lower-case the name first.
#[must_use]
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}
