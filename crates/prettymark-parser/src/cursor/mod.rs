//! Scanning cursor over the input text.
//!
//! The cursor knows nothing about markup grammar: it offers character reads,
//! anchored pattern matches, and "read until condition" scanning. The parser
//! layers the grammar on top.

/// The cursor implementation.
pub mod core;
/// Anchored patterns the cursor can match and consume.
pub mod pattern;

pub use self::core::Cursor;
pub use pattern::Pattern;
