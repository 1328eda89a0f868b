//! Presentation tree node types.
//!
//! One rendering unit per generic-tree node kind. Every visual unit a host
//! might style — open tag, close tag, tag name, attribute name, attribute
//! value, comment body, text body — is a distinct type or field, so a
//! renderer never has to re-parse strings to find boundaries.
//!
//! The types serialize to JSON (internally tagged by `kind`, camelCase
//! fields) for tooling consumers.

use serde::Serialize;

/// A node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViewNode {
    /// An element with its open/close boundaries made explicit.
    Element(ElementView),
    /// A comment body, raw and unescaped.
    Comment {
        /// Comment text.
        text: String,
    },
    /// A literal text run, raw and unescaped.
    Text {
        /// Literal text.
        text: String,
    },
}

/// The rendering view of an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementView {
    /// True for void elements, which render as a lone opening tag.
    pub is_void: bool,
    /// The opening tag with its name and attributes.
    pub open_tag: TagView,
    /// Transformed children. Always empty for void elements, even when the
    /// source markup carried content that looked like children.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
    /// The closing tag, rendered independently of the opening tag.
    /// `None` exactly when the element is void.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_tag: Option<CloseTagView>,
}

/// An opening tag: lower-cased name plus attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagView {
    /// Tag name, always lower-cased for display.
    pub name: String,
    /// Attributes in source order, duplicates included.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeView>,
}

/// A closing tag. Carries the same lower-cased name as its opening tag; it
/// is emitted whether or not the source markup actually closed the element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseTagView {
    /// Tag name, always lower-cased for display.
    pub name: String,
}

/// The rendering view of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeView {
    /// Attribute name, always lower-cased for display.
    pub name: String,
    /// Attribute value. `None` when the source had no value (or an empty
    /// one), so valueless attributes render as a bare name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
