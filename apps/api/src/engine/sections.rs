//! Section Expander — repeats section blocks once per array element.
//!
//! Pairing is non-greedy: an open token captures everything up to the
//! *next* close token with the same name, so sibling sections sharing a
//! name expand independently, each against its own nearest close. Scoping
//! is lexical: tokens inside a captured block resolve only against the
//! element the block is copied for, never against the enclosing scope.

use tracing::warn;

use crate::engine::record::{Field, Record};
use crate::engine::scalars::substitute_scalars;
use crate::engine::scanner::{scan, TokenKind};

/// Expands every section pair in `template` against `record`.
///
/// A section whose name resolves to a record-array re-instantiates its
/// block per sub-record (scalars first, then nested sections, both in the
/// sub-record's scope). A primitive-array binds each element to the
/// current-item token. An absent, empty, or non-array field renders the
/// whole open-to-close span as nothing.
pub fn expand_sections(template: &str, record: &Record) -> String {
    let tokens = scan(template);
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let TokenKind::SectionOpen(name) = &token.kind else {
            i += 1;
            continue;
        };

        let close = tokens[i + 1..].iter().find(|t| {
            matches!(&t.kind, TokenKind::SectionClose(n) if n.eq_ignore_ascii_case(name))
        });
        let (body_end, span_end) = match close {
            Some(c) => (c.start, c.end),
            None => {
                // Author-controlled content: degrade instead of failing
                // the render. The body runs to the end of the template.
                warn!(section = %name, "section open has no matching close token");
                (template.len(), template.len())
            }
        };

        out.push_str(&template[cursor..token.start]);
        out.push_str(&expand_block(&template[token.end..body_end], record.field(name)));
        cursor = span_end;

        // Everything inside the consumed span belongs to the inner scope.
        while i < tokens.len() && tokens[i].start < span_end {
            i += 1;
        }
    }

    out.push_str(&template[cursor..]);
    out
}

/// Renders one captured block against the field its section named.
fn expand_block(body: &str, field: Option<&Field>) -> String {
    match field {
        Some(Field::Records(entries)) => entries
            .iter()
            .map(|entry| {
                let scalars_done = substitute_scalars(body, entry);
                expand_sections(&scalars_done, entry)
            })
            .collect(),
        Some(Field::Items(items)) => {
            let empty_scope = Record::new();
            items
                .iter()
                .map(|item| {
                    let bound = bind_current_item(body, item);
                    // A primitive element's scope has no array fields, so
                    // any nested section inside it renders empty.
                    expand_sections(&bound, &empty_scope)
                })
                .collect()
        }
        // Absent or scalar-valued name: zero iterations, nothing rendered.
        _ => String::new(),
    }
}

/// Replaces every current-item token in `body` with `value`.
fn bind_current_item(body: &str, value: &str) -> String {
    let mut out = String::with_capacity(body.len() + value.len());
    let mut cursor = 0;
    for token in scan(body) {
        if token.kind == TokenKind::CurrentItem {
            out.push_str(&body[cursor..token.start]);
            out.push_str(value);
            cursor = token.end;
        }
    }
    out.push_str(&body[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: serde_json::Value) -> Record {
        Record::from_value(&v)
    }

    #[test]
    fn test_primitive_array_binds_current_item_in_order() {
        let r = record(json!({"skills": ["C", "Math"]}));
        let out = expand_sections("{{#skills}}{{.}}, {{/skills}}", &r);
        assert_eq!(out, "C, Math, ");
    }

    #[test]
    fn test_record_array_expands_per_element_in_order() {
        let r = record(json!({"experience": [
            {"title": "Eng"},
            {"title": "Sr Eng"},
            {"title": "Staff Eng"}
        ]}));
        let out = expand_sections("{{#experience}}[{{title}}]{{/experience}}", &r);
        assert_eq!(out, "[Eng][Sr Eng][Staff Eng]");
    }

    #[test]
    fn test_nested_sections_resolve_in_element_scope() {
        let r = record(json!({"experience": [
            {"title": "Eng", "achievements": ["Shipped X", "Fixed Y"]},
            {"title": "Intern", "achievements": []}
        ]}));
        let out = expand_sections(
            "{{#experience}}{{title}}:{{#achievements}} * {{.}}{{/achievements}};{{/experience}}",
            &r,
        );
        assert_eq!(out, "Eng: * Shipped X * Fixed Y;Intern:;");
    }

    #[test]
    fn test_absent_section_renders_empty_including_body() {
        let r = record(json!({"name": "Ada"}));
        let out = expand_sections("a{{#projects}}gone{{/projects}}b", &r);
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_empty_array_renders_empty() {
        let r = record(json!({"experience": []}));
        let out = expand_sections("a{{#experience}}{{title}}{{/experience}}b", &r);
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_scalar_valued_name_renders_empty() {
        let r = record(json!({"skills": "not an array"}));
        let out = expand_sections("a{{#skills}}{{.}}{{/skills}}b", &r);
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_sibling_pairs_with_same_name_expand_independently() {
        let r = record(json!({"skills": ["Rust"]}));
        let out = expand_sections(
            "{{#skills}}<{{.}}>{{/skills}} and {{#skills}}[{{.}}]{{/skills}}",
            &r,
        );
        assert_eq!(out, "<Rust> and [Rust]");
    }

    #[test]
    fn test_open_without_close_captures_to_end_of_template() {
        let r = record(json!({"skills": ["A", "B"]}));
        let out = expand_sections("x {{#skills}}{{.}};", &r);
        assert_eq!(out, "x A;B;");
    }

    #[test]
    fn test_open_without_close_and_absent_field_renders_prefix_only() {
        let r = record(json!({}));
        let out = expand_sections("x {{#skills}}{{.}};", &r);
        assert_eq!(out, "x ");
    }

    #[test]
    fn test_pairing_is_nearest_close_not_last() {
        // First open pairs with the first close; the trailing pair is a
        // sibling, not an outer wrapper.
        let r = record(json!({"skills": ["a"]}));
        let out = expand_sections("{{#skills}}1{{/skills}}2{{#skills}}3{{/skills}}", &r);
        assert_eq!(out, "123");
    }

    #[test]
    fn test_inner_scope_does_not_see_outer_fields() {
        let r = record(json!({
            "company": "Acme",
            "experience": [{"title": "Eng"}]
        }));
        let out = expand_sections("{{#experience}}{{title}}@{{company}}{{/experience}}", &r);
        // `company` is not a field of the element; it stays for cleanup.
        assert_eq!(out, "Eng@{{company}}");
    }

    #[test]
    fn test_nested_section_inside_primitive_array_renders_empty() {
        let r = record(json!({"skills": ["Rust"]}));
        let out = expand_sections(
            "{{#skills}}{{.}}{{#extras}}never{{/extras}}{{/skills}}",
            &r,
        );
        assert_eq!(out, "Rust");
    }
}
