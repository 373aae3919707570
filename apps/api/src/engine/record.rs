//! Expansion data model — the typed field tree a template is resolved against.
//!
//! A `Record` is one expansion scope: the top-level resume data at the
//! outermost scope, or a single array element's fields once expansion has
//! descended into a section. Field kind (scalar vs primitive-array vs
//! record-array) is classified once, when the record is built from JSON,
//! rather than re-inspected on every token hit.
#![allow(dead_code)]

use std::collections::BTreeMap;

use serde_json::Value;

/// One named field inside an expansion scope.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// A single string value, substituted in place of a scalar token.
    Scalar(String),
    /// An ordered list of scalars (e.g. a flat skills list). Inside a
    /// section bound to this field, only the current-item token resolves.
    Items(Vec<String>),
    /// An ordered list of sub-records (e.g. work-experience entries).
    Records(Vec<Record>),
}

/// A tree of named fields forming one expansion scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a field. Mostly used by the render-layer
    /// assembler and by tests; production records come from `from_value`.
    pub fn set(&mut self, name: impl Into<String>, field: Field) {
        self.fields.insert(name.into(), field);
    }

    /// Looks up a field by name, exact match first, then
    /// ASCII-case-insensitive. Template authors are sloppy about casing;
    /// an exact-cased field always wins when both exist.
    pub fn field(&self, name: &str) -> Option<&Field> {
        if let Some(field) = self.fields.get(name) {
            return Some(field);
        }
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Iterates fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a record from a JSON object.
    ///
    /// Classification rules:
    /// - strings, numbers, booleans → `Scalar` (coerced to string form)
    /// - arrays where every element is an object → `Records`
    /// - any other array → `Items`, with non-scalar elements skipped
    /// - `null` → field absent
    /// - bare nested objects → skipped (not a field kind of this model;
    ///   the caller flattens those before expansion)
    ///
    /// A non-object input yields an empty record.
    pub fn from_value(value: &Value) -> Record {
        let mut record = Record::new();
        let Value::Object(map) = value else {
            return record;
        };
        for (name, v) in map {
            if let Some(field) = classify(v) {
                record.set(name.clone(), field);
            }
        }
        record
    }
}

/// Maps one JSON value to a field, or `None` if it has no place in the
/// expansion model.
fn classify(value: &Value) -> Option<Field> {
    match value {
        Value::Array(items) => {
            if !items.is_empty() && items.iter().all(Value::is_object) {
                Some(Field::Records(items.iter().map(Record::from_value).collect()))
            } else {
                Some(Field::Items(
                    items.iter().filter_map(coerce_scalar).collect(),
                ))
            }
        }
        _ => coerce_scalar(value).map(Field::Scalar),
    }
}

/// String-coerces a primitive JSON value. Numbers and booleans render in
/// their canonical string form; null, objects, and arrays do not coerce.
fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_classify_as_scalars() {
        let record = Record::from_value(&json!({"name": "Ada Lovelace"}));
        assert_eq!(
            record.field("name"),
            Some(&Field::Scalar("Ada Lovelace".to_string()))
        );
    }

    #[test]
    fn test_numbers_and_bools_coerce_to_strings() {
        let record = Record::from_value(&json!({"years": 12, "remote": true}));
        assert_eq!(record.field("years"), Some(&Field::Scalar("12".to_string())));
        assert_eq!(
            record.field("remote"),
            Some(&Field::Scalar("true".to_string()))
        );
    }

    #[test]
    fn test_null_fields_are_absent() {
        let record = Record::from_value(&json!({"summary": null}));
        assert_eq!(record.field("summary"), None);
    }

    #[test]
    fn test_array_of_objects_is_record_array() {
        let record = Record::from_value(&json!({
            "experience": [{"title": "Eng"}, {"title": "Sr Eng"}]
        }));
        match record.field("experience") {
            Some(Field::Records(entries)) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(
                    entries[1].field("title"),
                    Some(&Field::Scalar("Sr Eng".to_string()))
                );
            }
            other => panic!("expected record-array, got {other:?}"),
        }
    }

    #[test]
    fn test_array_of_strings_is_primitive_array() {
        let record = Record::from_value(&json!({"skills": ["Rust", "SQL"]}));
        assert_eq!(
            record.field("skills"),
            Some(&Field::Items(vec!["Rust".to_string(), "SQL".to_string()]))
        );
    }

    #[test]
    fn test_mixed_array_keeps_only_scalar_elements() {
        let record = Record::from_value(&json!({"skills": ["Rust", 7, null, {"x": 1}]}));
        assert_eq!(
            record.field("skills"),
            Some(&Field::Items(vec!["Rust".to_string(), "7".to_string()]))
        );
    }

    #[test]
    fn test_empty_array_is_empty_primitive_array() {
        let record = Record::from_value(&json!({"skills": []}));
        assert_eq!(record.field("skills"), Some(&Field::Items(vec![])));
    }

    #[test]
    fn test_bare_nested_object_is_skipped() {
        let record = Record::from_value(&json!({"contact": {"email": "a@b.c"}}));
        assert_eq!(record.field("contact"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive_with_exact_preference() {
        let mut record = Record::new();
        record.set("Name", Field::Scalar("upper".to_string()));
        record.set("name", Field::Scalar("lower".to_string()));
        assert_eq!(
            record.field("name"),
            Some(&Field::Scalar("lower".to_string()))
        );
        assert_eq!(
            record.field("NAME"),
            Some(&Field::Scalar("upper".to_string()))
        );
    }

    #[test]
    fn test_non_object_root_yields_empty_record() {
        assert!(Record::from_value(&json!(["a", "b"])).is_empty());
        assert!(Record::from_value(&json!("plain")).is_empty());
    }
}
