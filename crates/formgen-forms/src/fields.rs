//! Form field definitions and per-field validation.
//!
//! A [`FormFieldDef`] is the compiled form of one schema [`Field`]: the
//! descriptor itself, its [`FieldRules`] (required flag, anchored pattern,
//! allowed choices, configured message) and the widget type it renders with.
//! [`clean_field_value`] applies the rules to one raw value.
//!
//! Patterns compile with `regex` when they can. Patterns that need
//! look-around or backreferences fall back to `fancy_regex`.

use tracing::warn;

use formgen_core::{FormGenError, FormGenResult};

use crate::schema::Field;
use crate::widgets::{widget_type_for_kind, WidgetType};

/// Message for a failing value when the field configures none.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required";
/// Message for a choice value outside the declared options.
pub const INVALID_CHOICE_MESSAGE: &str = "Select a valid choice.";

/// A compiled `validation.pattern`, anchored to the whole value.
#[derive(Debug, Clone)]
pub enum FieldPattern {
    /// Linear-time matcher for patterns `regex` accepts.
    Plain(regex::Regex),
    /// Backtracking matcher for look-around and backreferences.
    Fancy(fancy_regex::Regex),
}

impl FieldPattern {
    /// Compiles `source` so it must match the whole value.
    pub fn compile(source: &str) -> Result<Self, fancy_regex::Error> {
        let anchored = format!("^(?:{source})$");
        match regex::Regex::new(&anchored) {
            Ok(re) => Ok(Self::Plain(re)),
            Err(_) => fancy_regex::Regex::new(&anchored).map(Self::Fancy),
        }
    }

    /// Returns `true` if the whole value matches.
    ///
    /// A backtracking matcher that gives up counts as a mismatch.
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Plain(re) => re.is_match(value),
            Self::Fancy(re) => re.is_match(value).unwrap_or_else(|e| {
                warn!(pattern = re.as_str(), error = %e, "pattern match aborted");
                false
            }),
        }
    }
}

/// The rule set applied to one field's value.
#[derive(Debug, Clone)]
pub struct FieldRules {
    /// Whether an empty value is an error.
    pub required: bool,
    /// Pattern a non-empty value must fully match.
    pub pattern: Option<FieldPattern>,
    /// Allowed values for choice fields.
    pub choices: Option<Vec<String>>,
    /// Configured message replacing the default for any failure.
    pub message: Option<String>,
}

impl FieldRules {
    /// Compiles the rule set for a field descriptor.
    ///
    /// The pattern is anchored so it must match the whole value.
    pub fn for_field(field: &Field) -> Result<Self, fancy_regex::Error> {
        let pattern = field.pattern_source().map(FieldPattern::compile).transpose()?;
        let choices = field
            .kind
            .is_choice()
            .then(|| field.choices().iter().map(|o| o.value.clone()).collect());
        Ok(Self {
            required: field.required,
            pattern,
            choices,
            message: field.validation_message().map(String::from),
        })
    }

    fn message_or(&self, default: &str) -> String {
        self.message.clone().unwrap_or_else(|| default.to_string())
    }
}

/// Complete definition of a renderable form field.
#[derive(Debug, Clone)]
pub struct FormFieldDef {
    /// The schema descriptor.
    pub field: Field,
    /// The compiled rule set.
    pub rules: FieldRules,
    /// The widget type used for rendering.
    pub widget: WidgetType,
}

impl FormFieldDef {
    /// Compiles a schema field.
    ///
    /// Returns `Ok(None)` for unknown kinds, which take no part in rendering,
    /// validation, or submission.
    pub fn from_schema(field: &Field) -> FormGenResult<Option<Self>> {
        let Some(widget) = widget_type_for_kind(&field.kind) else {
            return Ok(None);
        };
        let rules = FieldRules::for_field(field).map_err(|source| FormGenError::InvalidPattern {
            field: field.id.clone(),
            source,
        })?;
        Ok(Some(Self {
            field: field.clone(),
            rules,
            widget,
        }))
    }

    /// The field id, used as the state key.
    pub fn name(&self) -> &str {
        &self.field.id
    }
}

/// Cleans (validates) a raw value against a rule set.
///
/// 1. Required check (if `required` and the value is empty)
/// 2. Empty optional values pass untouched
/// 3. Pattern check (full match)
/// 4. Choice membership for select/radio
///
/// Returns the value to submit or the error messages for the field.
pub fn clean_field_value(rules: &FieldRules, raw: &str) -> Result<String, Vec<String>> {
    if raw.is_empty() {
        if rules.required {
            return Err(vec![rules.message_or(DEFAULT_REQUIRED_MESSAGE)]);
        }
        return Ok(String::new());
    }

    if let Some(pattern) = &rules.pattern {
        if !pattern.is_match(raw) {
            return Err(vec![rules.message_or(DEFAULT_REQUIRED_MESSAGE)]);
        }
    }

    if let Some(choices) = &rules.choices {
        if !choices.iter().any(|c| c == raw) {
            return Err(vec![INVALID_CHOICE_MESSAGE.to_string()]);
        }
    }

    Ok(raw.to_string())
}
