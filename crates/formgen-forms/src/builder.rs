//! The form component.
//!
//! [`FormBuilder`] ties a [`FormSchema`] to its binder, theme, and export
//! seams. It renders the whole form, forwards input events to the binder,
//! runs the submit sequence and copies the schema to the clipboard.
//!
//! Submit sequence, after a validation pass with zero errors:
//! 1. acknowledge the submission to the user
//! 2. serialize the collected document as pretty JSON
//! 3. offer it as a download
//! 4. reset the form
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use formgen_core::Settings;
//! use formgen_forms::builder::{FormBuilder, SubmitOutcome};
//! use formgen_forms::export::MemoryExporter;
//! use formgen_forms::notifier::RecordingNotifier;
//! use formgen_forms::schema::{Field, FieldKind, FormSchema};
//!
//! let schema = FormSchema::new(
//!     "Guest book",
//!     "Sign in",
//!     vec![Field::new("name", "Name", FieldKind::Text).required(true)],
//! );
//! let exporter = Arc::new(MemoryExporter::new());
//! let mut form = FormBuilder::new(schema, &Settings::default())
//!     .unwrap()
//!     .with_exporter(exporter.clone())
//!     .with_notifier(Arc::new(RecordingNotifier::new()));
//!
//! form.set_value("name", "Ada");
//! assert!(matches!(form.submit().unwrap(), SubmitOutcome::Submitted(_)));
//! assert_eq!(exporter.last().unwrap().body, "{\n  \"name\": \"Ada\"\n}");
//! assert_eq!(form.binder().value("name"), Some(""));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, info};

use formgen_core::logging::form_span;
use formgen_core::utils::text::escape_html;
use formgen_core::{FormGenResult, Settings};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::export::{DirectoryExporter, Download, ExportError, Exporter};
use crate::form::FormBinder;
use crate::notifier::{Notifier, TracingNotifier, SCHEMA_COPIED_MESSAGE, SUBMITTED_MESSAGE};
use crate::schema::FormSchema;
use crate::submission::SubmissionDocument;
use crate::theme::Theme;
use crate::validation;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field was valid; the document was exported and the form reset.
    Submitted(SubmissionDocument),
    /// At least one field failed; errors are keyed by field id.
    Invalid(HashMap<String, Vec<String>>),
}

/// Result of a schema copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The schema is on the clipboard and the user was told so.
    Copied,
    /// The clipboard refused the write; the failure was logged.
    Failed,
}

/// A rendered, interactive form built from a schema.
pub struct FormBuilder {
    schema: FormSchema,
    binder: FormBinder,
    theme: Theme,
    submission_file_name: String,
    exporter: Arc<dyn Exporter>,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
    span: tracing::Span,
}

impl FormBuilder {
    /// Creates a form for `schema`.
    ///
    /// Downloads go to `settings.download_dir`, the schema copy goes to the
    /// system clipboard, and acknowledgments are logged. Each seam can be
    /// replaced with the `with_*` methods.
    pub fn new(schema: FormSchema, settings: &Settings) -> FormGenResult<Self> {
        let binder = FormBinder::new(&schema)?;
        let span = form_span(&schema.form_title);
        Ok(Self {
            schema,
            binder,
            theme: Theme::default(),
            submission_file_name: settings.submission_file_name.clone(),
            exporter: Arc::new(DirectoryExporter::new(settings.download_dir.clone())),
            clipboard: Arc::new(SystemClipboard),
            notifier: Arc::new(TracingNotifier),
            span,
        })
    }

    /// Replaces the download exporter.
    #[must_use]
    pub fn with_exporter(mut self, exporter: Arc<dyn Exporter>) -> Self {
        self.exporter = exporter;
        self
    }

    /// Replaces the clipboard.
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Replaces the acknowledgment channel.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// The input schema.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// The form-state binder.
    pub fn binder(&self) -> &FormBinder {
        &self.binder
    }

    /// The form-state binder, for direct event handling.
    pub fn binder_mut(&mut self) -> &mut FormBinder {
        &mut self.binder
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips between the light and dark theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle();
        debug!(parent: &self.span, theme = %self.theme, "theme toggled");
        self.theme
    }

    /// Handles an edit of one control.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        self.binder.set_value(id, value);
    }

    /// Binds a submitted urlencoded body.
    pub fn bind_query(&mut self, body: &str) {
        self.binder.bind_query(body);
    }

    /// Renders the complete form as an HTML fragment.
    pub fn render(&self) -> String {
        let mut html = format!(r#"<div class="{}">"#, self.theme.container_class());
        html.push_str(&format!(
            r#"<div class="flex justify-between items-center mb-6"><h2 class="text-2xl font-semibold">{}</h2><button type="button" class="px-4 py-2 bg-gray-500 text-white rounded-md">{}</button></div>"#,
            escape_html(&self.schema.form_title),
            self.theme.toggle_label()
        ));
        html.push_str(&format!(
            r#"<p class="mb-6">{}</p>"#,
            escape_html(&self.schema.form_description)
        ));
        html.push_str(
            r#"<button type="button" class="mb-4 px-4 py-2 bg-blue-500 text-white rounded-md">Copy Schema JSON</button>"#,
        );
        html.push_str(r#"<form method="post" class="space-y-6">"#);
        for bound_field in self.binder.bound_fields(self.theme) {
            html.push_str(&bound_field.as_row());
        }
        html.push_str(
            r#"<button type="submit" class="px-4 py-2 bg-green-500 text-white rounded-md">Submit</button>"#,
        );
        html.push_str("</form></div>");
        html
    }

    /// Validates and, when every field passes, runs the submit sequence.
    ///
    /// Validation failures are returned as [`SubmitOutcome::Invalid`] and
    /// leave the values in place. An export failure is returned as `Err`
    /// and the form is not reset.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ExportError> {
        let _guard = self.span.enter();

        let document = match validation::full_clean(&mut self.binder) {
            Ok(document) => document,
            Err(errors) => {
                debug!(failing = errors.len(), "submit blocked by validation");
                return Ok(SubmitOutcome::Invalid(errors.into_iter().collect()));
            }
        };
        debug!(?document, "form submitted");
        self.notifier.acknowledge(SUBMITTED_MESSAGE);

        let body = document.to_pretty_json()?;
        self.exporter
            .export(&Download::json(self.submission_file_name.clone(), body))?;
        info!(file = %self.submission_file_name, fields = document.len(), "submission exported");

        self.binder.reset();
        Ok(SubmitOutcome::Submitted(document))
    }

    /// Copies the pretty-printed input schema to the clipboard.
    ///
    /// Never fails: a refused write is logged and reported as
    /// [`CopyOutcome::Failed`], and the form state is left untouched.
    pub async fn copy_schema_to_clipboard(&self) -> CopyOutcome {
        let text = match self.schema.to_pretty_json() {
            Ok(text) => text,
            Err(e) => {
                error!(parent: &self.span, error = %e, "Failed to copy schema");
                return CopyOutcome::Failed;
            }
        };

        match self.clipboard.write_text(text).await {
            Ok(()) => {
                self.notifier.acknowledge(SCHEMA_COPIED_MESSAGE);
                CopyOutcome::Copied
            }
            Err(e) => {
                error!(parent: &self.span, error = %e, "Failed to copy schema");
                CopyOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::export::MemoryExporter;
    use crate::notifier::RecordingNotifier;
    use crate::schema::{Field, FieldKind};

    struct Harness {
        form: FormBuilder,
        exporter: Arc<MemoryExporter>,
        clipboard: Arc<MemoryClipboard>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness(schema: FormSchema, clipboard: MemoryClipboard) -> Harness {
        let exporter = Arc::new(MemoryExporter::new());
        let clipboard = Arc::new(clipboard);
        let notifier = Arc::new(RecordingNotifier::new());
        let form = FormBuilder::new(schema, &Settings::default())
            .unwrap()
            .with_exporter(exporter.clone())
            .with_clipboard(clipboard.clone())
            .with_notifier(notifier.clone());
        Harness {
            form,
            exporter,
            clipboard,
            notifier,
        }
    }

    fn name_schema() -> FormSchema {
        FormSchema::new(
            "Guest book",
            "Leave your name",
            vec![Field::new("name", "Name", FieldKind::Text).required(true)],
        )
    }

    #[test]
    fn test_submit_valid_exports_and_resets() {
        let mut h = harness(name_schema(), MemoryClipboard::new());
        h.form.set_value("name", "Ada");

        let outcome = h.form.submit().unwrap();
        let SubmitOutcome::Submitted(doc) = outcome else {
            panic!("expected a submission");
        };
        assert_eq!(doc.get("name"), Some("Ada"));

        let download = h.exporter.last().unwrap();
        assert_eq!(download.file_name, "form_submission.json");
        assert_eq!(download.content_type, "application/json");
        assert_eq!(download.body, "{\n  \"name\": \"Ada\"\n}");

        assert_eq!(h.notifier.messages(), vec![SUBMITTED_MESSAGE.to_string()]);
        assert_eq!(h.form.binder().value("name"), Some(""));
        assert!(h.form.binder().errors().is_empty());
    }

    #[test]
    fn test_submit_invalid_does_nothing_else() {
        let mut h = harness(name_schema(), MemoryClipboard::new());

        let outcome = h.form.submit().unwrap();
        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected validation errors");
        };
        assert_eq!(errors["name"], vec!["This field is required".to_string()]);
        assert!(h.exporter.downloads().is_empty());
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn test_submit_uses_configured_file_name() {
        let settings = Settings {
            submission_file_name: "answers.json".to_string(),
            ..Settings::default()
        };
        let exporter = Arc::new(MemoryExporter::new());
        let mut form = FormBuilder::new(name_schema(), &settings)
            .unwrap()
            .with_exporter(exporter.clone())
            .with_notifier(Arc::new(RecordingNotifier::new()));
        form.set_value("name", "Grace");
        form.submit().unwrap();
        assert_eq!(exporter.last().unwrap().file_name, "answers.json");
    }

    #[test]
    fn test_submit_export_failure_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let mut form = FormBuilder::new(name_schema(), &Settings::default())
            .unwrap()
            .with_exporter(Arc::new(DirectoryExporter::new(&blocker)))
            .with_notifier(Arc::new(RecordingNotifier::new()));
        form.set_value("name", "Ada");

        assert!(form.submit().is_err());
        assert_eq!(form.binder().value("name"), Some("Ada"));
    }

    #[test]
    fn test_toggle_theme() {
        let mut h = harness(name_schema(), MemoryClipboard::new());
        assert_eq!(h.form.theme(), Theme::Light);
        assert_eq!(h.form.toggle_theme(), Theme::Dark);
        assert_eq!(h.form.toggle_theme(), Theme::Light);
    }

    #[test]
    fn test_render_structure() {
        let h = harness(name_schema(), MemoryClipboard::new());
        let html = h.form.render();
        assert!(html.starts_with(r#"<div class="w-full p-6 rounded-md shadow-md bg-gray-50 text-black">"#));
        assert!(html.contains(r#"<h2 class="text-2xl font-semibold">Guest book</h2>"#));
        assert!(html.contains(">Dark Theme</button>"));
        assert!(html.contains(r#"<p class="mb-6">Leave your name</p>"#));
        assert!(html.contains("Copy Schema JSON"));
        assert!(html.contains(r#"<input type="text" name="name""#));
        assert!(html.ends_with("Submit</button></form></div>"));
    }

    #[test]
    fn test_render_escapes_schema_text() {
        let schema = FormSchema::new("<script>", "a & b", vec![]);
        let h = harness(schema, MemoryClipboard::new());
        let html = h.form.render();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[tokio::test]
    async fn test_copy_schema() {
        let h = harness(name_schema(), MemoryClipboard::new());
        assert_eq!(h.form.copy_schema_to_clipboard().await, CopyOutcome::Copied);
        let expected = r#"{
  "formTitle": "Guest book",
  "formDescription": "Leave your name",
  "fields": [
    {
      "id": "name",
      "label": "Name",
      "type": "text",
      "required": true
    }
  ]
}"#;
        assert_eq!(h.clipboard.contents().as_deref(), Some(expected));
        assert_eq!(h.notifier.messages(), vec![SCHEMA_COPIED_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_copy_parsed_schema_keeps_input() {
        let input = r#"{
  "fields": [
    {
      "type": "email",
      "id": "email",
      "label": "Email",
      "hint": "work address"
    }
  ],
  "formTitle": "Newsletter",
  "formDescription": "Stay in touch"
}"#;
        let h = harness(FormSchema::from_json(input).unwrap(), MemoryClipboard::new());
        assert_eq!(h.form.copy_schema_to_clipboard().await, CopyOutcome::Copied);
        assert_eq!(h.clipboard.contents().as_deref(), Some(input));
    }

    #[tokio::test]
    async fn test_copy_schema_denied() {
        let mut h = harness(name_schema(), MemoryClipboard::denied());
        h.form.set_value("name", "Ada");
        assert_eq!(h.form.copy_schema_to_clipboard().await, CopyOutcome::Failed);
        assert!(h.notifier.messages().is_empty());
        assert_eq!(h.form.binder().value("name"), Some("Ada"));
    }
}
