//! The declarative form schema.
//!
//! A [`FormSchema`] is the caller-owned input describing one form: a title, a
//! description, and an ordered list of [`Field`] descriptors. The JSON shape
//! uses camelCase keys and a `type` tag per field:
//!
//! ```json
//! {
//!   "formTitle": "Contact",
//!   "formDescription": "Reach out",
//!   "fields": [
//!     { "id": "name", "label": "Name", "type": "text", "required": true }
//!   ]
//! }
//! ```
//!
//! Field kinds outside the supported set are kept as [`FieldKind::Unknown`],
//! but they render nothing and take no part in validation or submission.
//!
//! A schema parsed with [`FormSchema::from_json`] also keeps the parsed
//! document, so [`FormSchema::to_pretty_json`] reproduces the input with its
//! key order, omitted keys and extra keys intact.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use formgen_core::{FormGenError, FormGenResult};

/// A complete form description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    /// Heading rendered above the form.
    pub form_title: String,
    /// Paragraph rendered below the heading.
    pub form_description: String,
    /// Field descriptors in render order.
    pub fields: Vec<Field>,
    /// The document this schema was parsed from.
    #[serde(skip)]
    source: Option<serde_json::Value>,
}

impl PartialEq for FormSchema {
    fn eq(&self, other: &Self) -> bool {
        self.form_title == other.form_title
            && self.form_description == other.form_description
            && self.fields == other.fields
    }
}

impl Eq for FormSchema {}

impl FormSchema {
    /// Creates a schema from its parts.
    pub fn new(
        form_title: impl Into<String>,
        form_description: impl Into<String>,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            form_title: form_title.into(),
            form_description: form_description.into(),
            fields,
            source: None,
        }
    }

    /// Parses a schema from JSON text, keeping the parsed document.
    pub fn from_json(json: &str) -> FormGenResult<Self> {
        let source: serde_json::Value =
            serde_json::from_str(json).map_err(|e| FormGenError::InvalidSchema(e.to_string()))?;
        let mut schema: Self = serde_json::from_value(source.clone())
            .map_err(|e| FormGenError::InvalidSchema(e.to_string()))?;
        schema.source = Some(source);
        Ok(schema)
    }

    /// Reads and parses a schema from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> FormGenResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Returns the document this schema was parsed from, if any.
    pub fn source(&self) -> Option<&serde_json::Value> {
        self.source.as_ref()
    }

    /// Serializes the schema as pretty-printed JSON (two-space indentation).
    ///
    /// A parsed schema prints its source document; a schema built in code
    /// prints its typed fields.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        match &self.source {
            Some(source) => serde_json::to_string_pretty(source),
            None => serde_json::to_string_pretty(self),
        }
    }

    /// Returns the fields whose kind this component knows how to render.
    pub fn renderable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.kind.is_unknown())
    }

    /// Looks up a field by id.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// One field descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Unique id within the schema; used as DOM id, input name, and state key.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// The field kind, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Whether an empty value is rejected.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Placeholder text for free-text controls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Choices for `select` and `radio` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ChoiceOption>>,
    /// Optional pattern rule and message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,
}

impl Field {
    /// Creates an optional field with no placeholder, options, or validation.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            options: None,
            validation: None,
        }
    }

    /// Sets whether this field is required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the choices from `(value, label)` pairs.
    #[must_use]
    pub fn options<V, L>(mut self, options: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        self.options = Some(
            options
                .into_iter()
                .map(|(value, label)| ChoiceOption::new(value, label))
                .collect(),
        );
        self
    }

    /// Sets the regular expression a non-empty value must fully match.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.validation.get_or_insert_with(ValidationRule::default).pattern = Some(pattern.into());
        self
    }

    /// Sets the message shown when this field fails validation.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.validation.get_or_insert_with(ValidationRule::default).message = Some(message.into());
        self
    }

    /// Returns the declared choices, or an empty slice.
    pub fn choices(&self) -> &[ChoiceOption] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Returns the configured pattern source, if any.
    pub fn pattern_source(&self) -> Option<&str> {
        self.validation.as_ref().and_then(|v| v.pattern.as_deref())
    }

    /// Returns the configured validation message, if any.
    pub fn validation_message(&self) -> Option<&str> {
        self.validation.as_ref().and_then(|v| v.message.as_deref())
    }
}

/// The kind of control a field renders as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Single-line input with email semantics.
    Email,
    /// Multi-line text input.
    Textarea,
    /// Drop-down single choice.
    Select,
    /// Exclusive choice among radio buttons.
    Radio,
    /// Any other tag; kept verbatim and rendered as nothing.
    Unknown(String),
}

impl FieldKind {
    /// Returns the wire tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Unknown(tag) => tag,
        }
    }

    /// Returns `true` for kinds outside the supported set.
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Returns `true` for `select` and `radio`.
    pub const fn is_choice(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => Self::Text,
            "email" => Self::Email,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "radio" => Self::Radio,
            _ => Self::Unknown(tag),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Unknown(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One choice of a `select` or `radio` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Submitted value.
    pub value: String,
    /// Displayed text.
    pub label: String,
}

impl ChoiceOption {
    /// Creates a choice.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Pattern rule attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Regular expression source a non-empty value must fully match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Message shown when the field fails validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
