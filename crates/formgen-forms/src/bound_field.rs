//! Form fields bound to a value, errors, and a theme.
//!
//! A [`BoundField`] pairs a field definition with its current value, its
//! validation errors, the widget used for rendering and the active theme.
//! Rendering a form is rendering each of its bound fields as a row.

use formgen_core::utils::text::escape_html;

use crate::fields::FormFieldDef;
use crate::theme::Theme;
use crate::widgets::{self, Attrs, Widget};

/// A form field bound to its current state.
pub struct BoundField {
    /// The field id (HTML `name` and `id`).
    pub name: String,
    /// Owned snapshot of the descriptor metadata.
    pub field: BoundFieldDef,
    /// The current value (empty when unset).
    pub data: String,
    /// Validation error messages for this field.
    pub errors: Vec<String>,
    /// The widget instance used for rendering.
    pub widget: Box<dyn Widget>,
    /// The theme the row is rendered with.
    pub theme: Theme,
}

/// Minimal field metadata stored in a `BoundField`.
#[derive(Debug, Clone)]
pub struct BoundFieldDef {
    /// Human-readable label.
    pub label: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Whether the field is required.
    pub required: bool,
}

impl BoundField {
    /// Creates a `BoundField`, or `None` if the field has no widget.
    pub fn new(
        field_def: &FormFieldDef,
        data: String,
        errors: Vec<String>,
        theme: Theme,
    ) -> Option<Self> {
        let widget = widgets::create_widget(&field_def.field)?;
        Some(Self {
            name: field_def.field.id.clone(),
            field: BoundFieldDef {
                label: field_def.field.label.clone(),
                placeholder: field_def.field.placeholder.clone(),
                required: field_def.field.required,
            },
            data,
            errors,
            widget,
            theme,
        })
    }

    /// Renders the widget HTML for this bound field.
    pub fn render(&self) -> String {
        let mut attrs = Attrs::new();
        attrs.insert("id".to_string(), self.name.clone());
        if let Some(placeholder) = &self.field.placeholder {
            attrs.insert("placeholder".to_string(), placeholder.clone());
        }
        if self.widget.is_themed() {
            attrs.insert("class".to_string(), self.theme.input_class());
        }
        self.widget.render(&self.name, &self.data, &attrs)
    }

    /// Renders the `<label>` element, with a marker for required fields.
    pub fn label_tag(&self) -> String {
        let label_id = self.widget.id_for_label(&self.name);
        let marker = if self.field.required {
            r#" <span class="text-red-500">*</span>"#
        } else {
            ""
        };
        format!(
            r#"<label for="{}" class="block text-sm font-medium">{}{marker}</label>"#,
            escape_html(&label_id),
            escape_html(&self.field.label)
        )
    }

    /// Returns `true` if this field has any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Renders the inline error text, or an empty string.
    pub fn errors_html(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!(r#"<span class="text-red-500 text-sm">{}</span>"#, escape_html(e)))
            .collect()
    }

    /// Renders the complete row: label, control, inline errors.
    pub fn as_row(&self) -> String {
        format!(
            r#"<div class="space-y-2">{}{}{}</div>"#,
            self.label_tag(),
            self.render(),
            self.errors_html()
        )
    }
}
