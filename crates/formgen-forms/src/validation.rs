//! Validation pipeline for form processing.
//!
//! Every field is cleaned in schema order and errors accumulate rather than
//! short-circuiting, so all problems are reported at once. A form is
//! submittable only when no field failed.

use std::collections::HashMap;

use crate::fields::{clean_field_value, FormFieldDef};
use crate::form::FormBinder;
use crate::submission::SubmissionDocument;

/// Performs field-level validation for all fields.
///
/// For each field definition:
/// 1. Looks up the current value (missing counts as empty)
/// 2. Runs [`clean_field_value`] against the field's rules
/// 3. Populates `cleaned` on success or `errors` on failure
pub fn clean_fields(
    field_defs: &[FormFieldDef],
    values: &HashMap<String, String>,
    cleaned: &mut SubmissionDocument,
    errors: &mut HashMap<String, Vec<String>>,
) {
    for def in field_defs {
        let raw = values.get(def.name()).map_or("", String::as_str);

        match clean_field_value(&def.rules, raw) {
            Ok(value) => {
                cleaned.insert(def.name(), value);
            }
            Err(field_errors) => {
                errors.insert(def.name().to_string(), field_errors);
            }
        }
    }
}

/// Validates a form and collects its submission document.
///
/// Returns the cleaned document when every field is valid, or the per-field
/// errors in schema order. The binder's error state is replaced either way.
pub fn full_clean(
    form: &mut FormBinder,
) -> Result<SubmissionDocument, Vec<(String, Vec<String>)>> {
    let mut cleaned = SubmissionDocument::new();
    let mut errors = HashMap::new();
    clean_fields(form.field_defs(), &form.state().values, &mut cleaned, &mut errors);

    let ordered: Vec<(String, Vec<String>)> = form
        .field_defs()
        .iter()
        .filter_map(|def| {
            errors
                .get(def.name())
                .map(|e| (def.name().to_string(), e.clone()))
        })
        .collect();
    form.set_errors(errors);

    if ordered.is_empty() {
        Ok(cleaned)
    } else {
        Err(ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, FieldKind, FormSchema};

    fn defs(fields: Vec<Field>) -> Vec<FormFieldDef> {
        fields
            .iter()
            .filter_map(|f| FormFieldDef::from_schema(f).unwrap())
            .collect()
    }

    #[test]
    fn test_clean_fields_valid() {
        let defs = defs(vec![
            Field::new("name", "Name", FieldKind::Text).required(true),
            Field::new("zip", "Zip", FieldKind::Text).pattern(r"\d{5}"),
        ]);
        let values = HashMap::from([
            ("name".to_string(), "Ada".to_string()),
            ("zip".to_string(), "02139".to_string()),
        ]);

        let mut cleaned = SubmissionDocument::new();
        let mut errors = HashMap::new();
        clean_fields(&defs, &values, &mut cleaned, &mut errors);

        assert!(errors.is_empty());
        assert_eq!(cleaned.get("name"), Some("Ada"));
        assert_eq!(cleaned.get("zip"), Some("02139"));
    }

    #[test]
    fn test_clean_fields_errors_accumulate() {
        let defs = defs(vec![
            Field::new("name", "Name", FieldKind::Text).required(true),
            Field::new("email", "Email", FieldKind::Email).required(true),
        ]);
        let values = HashMap::new();

        let mut cleaned = SubmissionDocument::new();
        let mut errors = HashMap::new();
        clean_fields(&defs, &values, &mut cleaned, &mut errors);

        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_clean_fields_partial_valid() {
        let defs = defs(vec![
            Field::new("name", "Name", FieldKind::Text).required(true),
            Field::new("zip", "Zip", FieldKind::Text).pattern(r"\d{5}"),
        ]);
        let values = HashMap::from([
            ("name".to_string(), "Ada".to_string()),
            ("zip".to_string(), "abc".to_string()),
        ]);

        let mut cleaned = SubmissionDocument::new();
        let mut errors = HashMap::new();
        clean_fields(&defs, &values, &mut cleaned, &mut errors);

        assert_eq!(cleaned.get("name"), Some("Ada"));
        assert!(errors.contains_key("zip"));
        assert!(!errors.contains_key("name"));
    }

    #[test]
    fn test_full_clean_valid() {
        let schema = FormSchema::new(
            "t",
            "d",
            vec![Field::new("name", "Name", FieldKind::Text).required(true)],
        );
        let mut form = FormBinder::new(&schema).unwrap();
        form.set_value("name", "Ada");

        let doc = full_clean(&mut form).unwrap();
        assert_eq!(doc.get("name"), Some("Ada"));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_full_clean_document_in_schema_order() {
        let schema = FormSchema::new(
            "t",
            "d",
            vec![
                Field::new("username", "Username", FieldKind::Text),
                Field::new("email", "Email", FieldKind::Email),
                Field::new("skip", "Skip", FieldKind::Unknown("file".into())),
                Field::new("bio", "Bio", FieldKind::Textarea),
            ],
        );
        let mut form = FormBinder::new(&schema).unwrap();
        form.set_value("email", "a@b.c");
        form.set_value("username", "alice");

        let doc = full_clean(&mut form).unwrap();
        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, vec!["username", "email", "bio"]);
        assert_eq!(doc.get("bio"), Some(""));
    }

    #[test]
    fn test_full_clean_invalid_in_schema_order() {
        let schema = FormSchema::new(
            "t",
            "d",
            vec![
                Field::new("b", "B", FieldKind::Text).required(true),
                Field::new("a", "A", FieldKind::Text).required(true),
            ],
        );
        let mut form = FormBinder::new(&schema).unwrap();

        let errors = full_clean(&mut form).unwrap_err();
        let ids: Vec<&str> = errors.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(form.errors().len(), 2);
    }
}
