//! Widget system for rendering HTML form controls.
//!
//! Widgets are the bridge between field descriptors and their HTML
//! representation. Each widget knows how to render itself for a given name,
//! current value and attribute set, how to extract its value from submitted
//! [`FormData`], and which element id a `<label for>` should target.
//!
//! One widget exists per supported [`FieldKind`]; [`create_widget`] performs
//! the dispatch and returns `None` for unknown kinds.

use std::collections::BTreeMap;
use std::fmt;

use formgen_core::utils::text::escape_html;

use crate::data::FormData;
use crate::schema::{Field, FieldKind};

/// Text of the synthetic empty option every select starts with.
pub const EMPTY_OPTION_LABEL: &str = "Select an option";

/// HTML attributes, rendered in key order.
pub type Attrs = BTreeMap<String, String>;

/// Enumerates all built-in widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="email">`.
    EmailInput,
    /// `<textarea>`.
    Textarea,
    /// `<select>` with a leading empty option.
    Select,
    /// A set of `<input type="radio">` elements.
    RadioSelect,
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::EmailInput => "EmailInput",
            Self::Textarea => "Textarea",
            Self::Select => "Select",
            Self::RadioSelect => "RadioSelect",
        };
        write!(f, "{name}")
    }
}

/// A trait for HTML form widgets.
///
/// All widgets must be `Send + Sync` so a rendered form can move across
/// threads together with its bound fields.
pub trait Widget: Send + Sync + fmt::Debug {
    /// Returns the widget type enum variant.
    fn widget_type(&self) -> WidgetType;

    /// Renders the widget as an HTML string.
    ///
    /// `name` is the field id, `value` the current value (empty when unset).
    fn render(&self, name: &str, value: &str, attrs: &Attrs) -> String;

    /// Extracts a raw string value from the submitted form data.
    ///
    /// Returns `None` if no value was submitted for this field name.
    fn value_from_data(&self, data: &FormData, name: &str) -> Option<String> {
        data.get(name).map(String::from)
    }

    /// Returns the HTML `id` attribute value for a label targeting this widget.
    fn id_for_label(&self, id: &str) -> String {
        id.to_string()
    }

    /// Whether the themed input classes apply to this widget.
    fn is_themed(&self) -> bool {
        true
    }
}

/// Formats an attributes map into a string like ` key="value" key2="value2"`.
fn render_attrs(attrs: &Attrs) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {k}="{}""#, escape_html(v)))
        .collect()
}

/// A basic `<input type="text">` widget.
#[derive(Debug, Clone)]
pub struct TextInput;

impl Widget for TextInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::TextInput
    }

    fn render(&self, name: &str, value: &str, attrs: &Attrs) -> String {
        format!(
            r#"<input type="text" name="{}" value="{}"{} />"#,
            escape_html(name),
            escape_html(value),
            render_attrs(attrs)
        )
    }
}

/// A `<input type="email">` widget.
#[derive(Debug, Clone)]
pub struct EmailInput;

impl Widget for EmailInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::EmailInput
    }

    fn render(&self, name: &str, value: &str, attrs: &Attrs) -> String {
        format!(
            r#"<input type="email" name="{}" value="{}"{} />"#,
            escape_html(name),
            escape_html(value),
            render_attrs(attrs)
        )
    }
}

/// A `<textarea>` widget.
#[derive(Debug, Clone)]
pub struct Textarea;

impl Widget for Textarea {
    fn widget_type(&self) -> WidgetType {
        WidgetType::Textarea
    }

    fn render(&self, name: &str, value: &str, attrs: &Attrs) -> String {
        format!(
            r#"<textarea name="{}"{}>{}</textarea>"#,
            escape_html(name),
            render_attrs(attrs),
            escape_html(value)
        )
    }
}

/// A `<select>` widget with a synthetic empty option.
#[derive(Debug, Clone)]
pub struct Select {
    /// The available choices as `(value, display_label)` pairs.
    pub choices: Vec<(String, String)>,
}

impl Select {
    /// Creates a new `Select` widget with the given choices.
    pub fn new(choices: Vec<(String, String)>) -> Self {
        Self { choices }
    }
}

impl Widget for Select {
    fn widget_type(&self) -> WidgetType {
        WidgetType::Select
    }

    fn render(&self, name: &str, value: &str, attrs: &Attrs) -> String {
        let empty_selected = if value.is_empty() { " selected" } else { "" };
        let mut options =
            format!(r#"<option value=""{empty_selected}>{EMPTY_OPTION_LABEL}</option>"#);
        for (val, label) in &self.choices {
            let selected = if !value.is_empty() && val == value {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                escape_html(val),
                escape_html(label)
            ));
        }
        format!(
            r#"<select name="{}"{}>{options}</select>"#,
            escape_html(name),
            render_attrs(attrs)
        )
    }
}

/// A set of `<input type="radio">` elements sharing one name.
///
/// Each option's element id is `{id}-{value}`.
#[derive(Debug, Clone)]
pub struct RadioSelect {
    /// The available choices as `(value, display_label)` pairs.
    pub choices: Vec<(String, String)>,
}

impl RadioSelect {
    /// Creates a new `RadioSelect` widget with the given choices.
    pub fn new(choices: Vec<(String, String)>) -> Self {
        Self { choices }
    }
}

impl Widget for RadioSelect {
    fn widget_type(&self) -> WidgetType {
        WidgetType::RadioSelect
    }

    fn render(&self, name: &str, value: &str, attrs: &Attrs) -> String {
        let id_base = attrs.get("id").map_or(name, String::as_str);
        let mut html = String::from(r#"<div class="space-y-1">"#);
        for (val, label) in &self.choices {
            let checked = if !value.is_empty() && val == value {
                " checked"
            } else {
                ""
            };
            let option_id = escape_html(&format!("{id_base}-{val}"));
            html.push_str(&format!(
                r#"<div class="flex items-center space-x-2"><input type="radio" name="{}" value="{}" id="{option_id}" class="mr-2"{checked} />"#,
                escape_html(name),
                escape_html(val)
            ));
            html.push_str(&format!(
                r#"<label for="{option_id}">{}</label></div>"#,
                escape_html(label)
            ));
        }
        html.push_str("</div>");
        html
    }

    fn id_for_label(&self, id: &str) -> String {
        self.choices
            .first()
            .map_or_else(|| id.to_string(), |(val, _)| format!("{id}-{val}"))
    }

    fn is_themed(&self) -> bool {
        false
    }
}

/// Returns the widget type for a field kind, or `None` for unknown kinds.
pub const fn widget_type_for_kind(kind: &FieldKind) -> Option<WidgetType> {
    match kind {
        FieldKind::Text => Some(WidgetType::TextInput),
        FieldKind::Email => Some(WidgetType::EmailInput),
        FieldKind::Textarea => Some(WidgetType::Textarea),
        FieldKind::Select => Some(WidgetType::Select),
        FieldKind::Radio => Some(WidgetType::RadioSelect),
        FieldKind::Unknown(_) => None,
    }
}

/// Creates the widget for a field descriptor.
///
/// Choice widgets are populated from the field's options. Returns `None` for
/// unknown kinds, which render nothing.
pub fn create_widget(field: &Field) -> Option<Box<dyn Widget>> {
    let choices = || -> Vec<(String, String)> {
        field
            .choices()
            .iter()
            .map(|o| (o.value.clone(), o.label.clone()))
            .collect()
    };
    let widget: Box<dyn Widget> = match widget_type_for_kind(&field.kind)? {
        WidgetType::TextInput => Box::new(TextInput),
        WidgetType::EmailInput => Box::new(EmailInput),
        WidgetType::Textarea => Box::new(Textarea),
        WidgetType::Select => Box::new(Select::new(choices())),
        WidgetType::RadioSelect => Box::new(RadioSelect::new(choices())),
    };
    Some(widget)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_attrs() -> Attrs {
        Attrs::new()
    }

    fn plans() -> Vec<(String, String)> {
        vec![
            ("free".into(), "Free".into()),
            ("pro".into(), "Pro".into()),
        ]
    }

    #[test]
    fn test_text_input_render() {
        let html = TextInput.render("name", "Ada", &empty_attrs());
        assert_eq!(html, r#"<input type="text" name="name" value="Ada" />"#);
    }

    #[test]
    fn test_text_input_render_escapes_value() {
        let html = TextInput.render("name", r#"<b>"x"</b>"#, &empty_attrs());
        assert!(html.contains(r#"value="&lt;b&gt;&quot;x&quot;&lt;/b&gt;""#));
    }

    #[test]
    fn test_email_input_render_with_attrs() {
        let mut attrs = empty_attrs();
        attrs.insert("placeholder".into(), "you@example.com".into());
        attrs.insert("id".into(), "email".into());
        let html = EmailInput.render("email", "", &attrs);
        assert_eq!(
            html,
            r#"<input type="email" name="email" value="" id="email" placeholder="you@example.com" />"#
        );
    }

    #[test]
    fn test_textarea_render() {
        let html = Textarea.render("bio", "Hello & welcome", &empty_attrs());
        assert_eq!(html, r#"<textarea name="bio">Hello &amp; welcome</textarea>"#);
    }

    #[test]
    fn test_select_render_empty_option_first() {
        let html = Select::new(plans()).render("plan", "", &empty_attrs());
        assert!(html.starts_with(r#"<select name="plan"><option value="" selected>Select an option</option>"#));
        assert!(html.contains(r#"<option value="free">Free</option>"#));
        assert!(html.contains(r#"<option value="pro">Pro</option>"#));
    }

    #[test]
    fn test_select_render_marks_current() {
        let html = Select::new(plans()).render("plan", "pro", &empty_attrs());
        assert!(html.contains(r#"<option value="">Select an option</option>"#));
        assert!(html.contains(r#"<option value="pro" selected>Pro</option>"#));
        assert!(!html.contains(r#"<option value="free" selected>"#));
    }

    #[test]
    fn test_radio_render() {
        let html = RadioSelect::new(plans()).render("plan", "free", &empty_attrs());
        assert!(html.contains(
            r#"<input type="radio" name="plan" value="free" id="plan-free" class="mr-2" checked />"#
        ));
        assert!(html.contains(r#"<label for="plan-free">Free</label>"#));
        assert!(html.contains(
            r#"<input type="radio" name="plan" value="pro" id="plan-pro" class="mr-2" />"#
        ));
    }

    #[test]
    fn test_radio_render_nothing_checked() {
        let html = RadioSelect::new(plans()).render("plan", "", &empty_attrs());
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_id_for_label() {
        assert_eq!(TextInput.id_for_label("name"), "name");
        assert_eq!(RadioSelect::new(plans()).id_for_label("plan"), "plan-free");
        assert_eq!(RadioSelect::new(vec![]).id_for_label("plan"), "plan");
    }

    #[test]
    fn test_value_from_data() {
        let data = FormData::parse("name=Ada");
        assert_eq!(TextInput.value_from_data(&data, "name"), Some("Ada".into()));
        assert_eq!(TextInput.value_from_data(&data, "missing"), None);
    }

    #[test]
    fn test_create_widget_dispatch() {
        let cases = [
            (FieldKind::Text, WidgetType::TextInput),
            (FieldKind::Email, WidgetType::EmailInput),
            (FieldKind::Textarea, WidgetType::Textarea),
            (FieldKind::Select, WidgetType::Select),
            (FieldKind::Radio, WidgetType::RadioSelect),
        ];
        for (kind, expected) in cases {
            let field = Field::new("f", "F", kind);
            let widget = create_widget(&field).expect("known kind has a widget");
            assert_eq!(widget.widget_type(), expected);
        }
    }

    #[test]
    fn test_create_widget_unknown_kind() {
        let field = Field::new("f", "F", FieldKind::Unknown("color".into()));
        assert!(create_widget(&field).is_none());
    }

    #[test]
    fn test_create_widget_with_choices() {
        let field = Field::new("plan", "Plan", FieldKind::Select).options([("a", "Alpha")]);
        let widget = create_widget(&field).unwrap();
        let html = widget.render("plan", "", &empty_attrs());
        assert!(html.contains("Alpha"));
    }

    #[test]
    fn test_widget_type_display() {
        assert_eq!(WidgetType::TextInput.to_string(), "TextInput");
        assert_eq!(WidgetType::RadioSelect.to_string(), "RadioSelect");
    }
}
