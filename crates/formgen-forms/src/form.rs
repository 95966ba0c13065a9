//! The form-state binder.
//!
//! [`FormBinder`] owns the transient [`FormState`] of one form instance: the
//! current value and the validation errors of every registered field. Each
//! renderable schema field is registered once, at construction, under its id.
//! Values change through explicit events ([`set_value`], [`bind`]);
//! [`validate`] runs the whole-form pipeline; [`reset`] returns every field to
//! its initial empty state.
//!
//! Validation failures never surface as `Err`: they are stored per field and
//! rendered inline next to the control.
//!
//! [`set_value`]: FormBinder::set_value
//! [`bind`]: FormBinder::bind
//! [`validate`]: FormBinder::validate
//! [`reset`]: FormBinder::reset

use std::collections::HashMap;

use tracing::debug;

use formgen_core::FormGenResult;

use crate::bound_field::BoundField;
use crate::data::FormData;
use crate::fields::FormFieldDef;
use crate::schema::FormSchema;
use crate::theme::Theme;
use crate::validation;
use crate::widgets;

/// Per-field values and errors, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Current value of every registered field.
    pub values: HashMap<String, String>,
    /// Error messages of every failing field.
    pub errors: HashMap<String, Vec<String>>,
}

/// Binds rendered controls to the shared form state.
#[derive(Debug, Clone)]
pub struct FormBinder {
    field_defs: Vec<FormFieldDef>,
    state: FormState,
}

impl FormBinder {
    /// Creates a binder and registers every renderable field of the schema.
    ///
    /// Fails with [`FormGenError::InvalidPattern`] when a field's pattern
    /// does not compile.
    ///
    /// [`FormGenError::InvalidPattern`]: formgen_core::FormGenError::InvalidPattern
    pub fn new(schema: &FormSchema) -> FormGenResult<Self> {
        let mut binder = Self {
            field_defs: Vec::with_capacity(schema.fields.len()),
            state: FormState::default(),
        };
        for field in &schema.fields {
            match FormFieldDef::from_schema(field)? {
                Some(def) => binder.register(def),
                None => debug!(field = %field.id, kind = %field.kind, "skipping unknown field kind"),
            }
        }
        Ok(binder)
    }

    /// Registers a field under its id. Registering an id twice is a no-op.
    fn register(&mut self, def: FormFieldDef) {
        if self.state.values.contains_key(def.name()) {
            debug!(field = def.name(), "field already registered");
            return;
        }
        self.state.values.insert(def.name().to_string(), String::new());
        self.field_defs.push(def);
    }

    /// Returns the registered field definitions in schema order.
    pub fn field_defs(&self) -> &[FormFieldDef] {
        &self.field_defs
    }

    /// Returns `true` if a field with this id is registered.
    pub fn is_registered(&self, id: &str) -> bool {
        self.state.values.contains_key(id)
    }

    /// Returns the whole form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Handles an edit of one control. Unknown ids are ignored.
    ///
    /// Other fields' errors are left untouched.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        match self.state.values.get_mut(id) {
            Some(slot) => *slot = value.into(),
            None => debug!(field = id, "ignoring value for unregistered field"),
        }
    }

    /// Binds submitted form data.
    ///
    /// Every registered field takes the last submitted value for its id, or
    /// becomes empty when the id is absent. Previous errors are cleared.
    pub fn bind(&mut self, data: &FormData) {
        self.state.errors.clear();
        for def in &self.field_defs {
            let value = widgets::create_widget(&def.field)
                .and_then(|w| w.value_from_data(data, def.name()))
                .unwrap_or_default();
            self.state.values.insert(def.name().to_string(), value);
        }
    }

    /// Parses and binds an `application/x-www-form-urlencoded` body.
    pub fn bind_query(&mut self, body: &str) {
        self.bind(&FormData::parse(body));
    }

    /// Returns the current value of a field.
    pub fn value(&self, id: &str) -> Option<&str> {
        self.state.values.get(id).map(String::as_str)
    }

    /// Returns per-field validation errors.
    pub fn errors(&self) -> &HashMap<String, Vec<String>> {
        &self.state.errors
    }

    /// Returns the errors of one field, if it has any.
    pub fn field_errors(&self, id: &str) -> Option<&[String]> {
        self.state.errors.get(id).map(Vec::as_slice)
    }

    /// Runs validation over every field in schema order.
    ///
    /// Replaces the stored errors and returns `true` when none failed. Use
    /// [`validation::full_clean`] to also get the submission document.
    pub fn validate(&mut self) -> bool {
        validation::full_clean(self).is_ok()
    }

    pub(crate) fn set_errors(&mut self, errors: HashMap<String, Vec<String>>) {
        self.state.errors = errors;
    }

    /// Clears every value and every error.
    pub fn reset(&mut self) {
        for value in self.state.values.values_mut() {
            value.clear();
        }
        self.state.errors.clear();
    }

    /// Returns bound fields for rendering, in schema order.
    pub fn bound_fields(&self, theme: Theme) -> Vec<BoundField> {
        self.field_defs
            .iter()
            .filter_map(|def| {
                let data = self.value(def.name()).unwrap_or_default().to_string();
                let errors = self.state.errors.get(def.name()).cloned().unwrap_or_default();
                BoundField::new(def, data, errors, theme)
            })
            .collect()
    }
}
