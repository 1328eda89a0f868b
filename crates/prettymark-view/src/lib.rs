//! Presentation tree and pretty-printing transform.
//!
//! # Scope
//!
//! This crate implements:
//! - **Presentation Tree** - an annotated tree whose node kinds expose tag
//!   names, attribute names/values, open/close boundaries, and void-element
//!   status as distinguishable units a renderer can style independently
//! - **Transform** - the structural conversion from the generic parse tree
//!   to the presentation tree
//! - **Renderer** - a plain indented-text rendering, for hosts that do not
//!   bring their own
//!
//! The transform is a pure function of the generic tree: it is independent
//! of the parser and never mutates its input. Hosts consume the presentation
//! tree read-only.

/// Plain text rendering of a presentation tree.
pub mod render;
/// Presentation tree node types.
pub mod tree;
/// Generic-tree to presentation-tree transform.
pub mod transform;

pub use render::render_plain;
pub use transform::pretty_print;
pub use tree::{AttributeView, CloseTagView, ElementView, TagView, ViewNode};
