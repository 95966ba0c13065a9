//! # formgen-core
//!
//! Core types, settings, and error types for formgen.
//! This crate has no dependency on the form component and provides the
//! foundation for the other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`utils`] - HTML text helpers
//! - [`settings`] - Settings and the global settings container
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{FormGenError, FormGenResult};
pub use settings::{Settings, SETTINGS};
