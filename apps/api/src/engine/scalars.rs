//! Scalar Substitutor — replaces scalar tokens with string field values.
//!
//! Runs against exactly one scope. Tokens sitting inside a section's
//! open-to-close span are left alone here: that span is copied into a
//! per-element scope by the Section Expander, and only the element's own
//! fields may resolve tokens there. Substituting them early would let an
//! outer field shadow a same-named per-element field.

use crate::engine::record::{Field, Record};
use crate::engine::scanner::{scan, TokenKind};

/// Replaces every scalar token outside any section span with the matching
/// scalar field's value. Tokens with no matching scalar field (absent, or
/// bound to an array) are left untouched for later passes.
pub fn substitute_scalars(template: &str, record: &Record) -> String {
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;
    // Name of the section whose span we are currently inside, if any.
    // Pairing is non-greedy: the next close with the same name ends it.
    let mut open_section: Option<String> = None;

    for token in scan(template) {
        match (&open_section, &token.kind) {
            (Some(name), TokenKind::SectionClose(close)) if close.eq_ignore_ascii_case(name) => {
                open_section = None;
            }
            (Some(_), _) => {}
            (None, TokenKind::SectionOpen(name)) => {
                open_section = Some(name.clone());
            }
            (None, TokenKind::Scalar(name)) => {
                if let Some(Field::Scalar(value)) = record.field(name) {
                    out.push_str(&template[cursor..token.start]);
                    out.push_str(value);
                    cursor = token.end;
                }
            }
            (None, _) => {}
        }
    }

    out.push_str(&template[cursor..]);
    out
}
