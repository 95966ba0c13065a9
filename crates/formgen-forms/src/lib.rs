//! # formgen-forms
//!
//! Schema-driven forms for formgen. A JSON [`schema::FormSchema`] describes
//! the fields; [`builder::FormBuilder`] renders them as themed HTML, binds
//! user input, validates it, and exports successful submissions as
//! `form_submission.json`.
//!
//! ## Modules
//!
//! - [`schema`] - The input schema and field kinds
//! - [`fields`] - Per-field validation rules
//! - [`widgets`] - HTML widgets for each field kind
//! - [`bound_field`] - A field bound to its current value and errors
//! - [`form`] - The form-state binder
//! - [`validation`] - The whole-form validation pipeline
//! - [`data`] - Parsed form submissions
//! - [`submission`] - The ordered submission document
//! - [`theme`] - Light and dark styling
//! - [`export`] - Downloads
//! - [`clipboard`] - Clipboard access
//! - [`notifier`] - User acknowledgments
//! - [`builder`] - The form component

pub mod bound_field;
pub mod builder;
pub mod clipboard;
pub mod data;
pub mod export;
pub mod fields;
pub mod form;
pub mod notifier;
pub mod schema;
pub mod submission;
pub mod theme;
pub mod validation;
pub mod widgets;

pub use builder::{CopyOutcome, FormBuilder, SubmitOutcome};
pub use schema::{Field, FieldKind, FormSchema};
pub use theme::Theme;
