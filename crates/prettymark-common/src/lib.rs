//! Common utilities for the prettymark formatter.
//!
//! This crate provides shared infrastructure used by all formatter components:
//! - **Warning System** - colored terminal output for tolerated markup defects

pub mod warning;
