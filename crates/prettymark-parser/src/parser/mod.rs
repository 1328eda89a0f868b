//! Recursive-descent markup parser.

/// Parser implementation.
pub mod core;

pub use self::core::{Parser, parse};
