//! Markup lexing and parsing for the prettymark formatter.
//!
//! # Scope
//!
//! This crate implements:
//! - **Cursor** - a scanning position over an immutable input string with
//!   read/peek/rewind and anchored pattern matching
//! - **Parser** - a recursive-descent grammar producing a generic tree of
//!   fragments, elements, attributes, comments, and text
//!
//! The grammar is deliberately permissive: it never raises a structural
//! parse error. Missing closing tags, mismatched closing tag names,
//! unterminated comments, and malformed attribute syntax all degrade to a
//! best-effort partial tree. The tool exists to render useful structure for
//! arbitrary, possibly-invalid fragments typed interactively, so this
//! tolerance is a contract, not an oversight.
//!
//! # Not Implemented
//!
//! - Script/style raw-text modes
//! - Character reference decoding
//! - Close-tag name validation (tolerated by design, see above)

/// Scanning cursor and pattern matching over the input text.
pub mod cursor;
/// Recursive-descent markup parser.
pub mod parser;

pub use cursor::{Cursor, Pattern};
pub use parser::{Parser, parse};
