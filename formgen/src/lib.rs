//! # formgen
//!
//! Schema-driven HTML form generation.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `formgen` for everything, or on the individual crates
//! for finer-grained control.

/// Settings, logging, and error types.
pub use formgen_core as core;

/// Schemas, widgets, validation, and the form component.
pub use formgen_forms as forms;

/// Commonly used types.
pub mod prelude {
    pub use formgen_core::{FormGenError, FormGenResult, Settings};
    pub use formgen_forms::{
        CopyOutcome, Field, FieldKind, FormBuilder, FormSchema, SubmitOutcome, Theme,
    };
}

// Third-party re-exports
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;
