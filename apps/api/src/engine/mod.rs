//! Template placeholder-expansion engine.
//!
//! A pure function from (template, record) to an expanded document. The
//! template carries three token kinds — scalar `{{name}}`, section pairs
//! `{{#name}}...{{/name}}`, current-item `{{.}}` — and the record supplies
//! the values. The pipeline runs three fixed passes:
//!
//! 1. scalar substitution at the outermost scope,
//! 2. section expansion (recursive, lexically scoped),
//! 3. residual cleanup, guaranteeing no token syntax survives.
//!
//! Expansion is total: unknown fields and empty arrays render blank, a
//! template-author mistake never becomes a render error. The engine holds
//! no state between calls and is safe to invoke from any number of
//! concurrent renders.

pub mod cleanup;
pub mod record;
pub mod scalars;
pub mod scanner;
pub mod sections;

pub use cleanup::strip_residual_tokens;
pub use record::{Field, Record};
pub use scalars::substitute_scalars;
pub use sections::expand_sections;

/// Expands `template` against `record` and returns the finished document.
///
/// Pass order is a contract, not an accident: scalars must resolve before
/// sections so that same-named fields at different scopes never shadow
/// each other, and cleanup must run last so the output carries no token
/// syntax regardless of what the record was missing.
pub fn render(template: &str, record: &Record) -> String {
    let substituted = substitute_scalars(template, record);
    let expanded = expand_sections(&substituted, record);
    strip_residual_tokens(&expanded)
}
