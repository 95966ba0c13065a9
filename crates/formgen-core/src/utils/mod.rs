//! Utility functions for formgen.
//!
//! - [`text`]: HTML text helpers.

pub mod text;
