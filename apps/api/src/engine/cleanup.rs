//! Residual Cleanup — strips any token syntax the earlier passes left behind.
//!
//! This is the safety net for the public contract that no template syntax
//! ever reaches the output: tokens for fields the record never had, stray
//! closes, current-item tokens outside a primitive section. Single pass,
//! idempotent.

/// Deletes every complete `{{...}}` span from `input`.
///
/// An unterminated `{{` with no following `}}` is not token syntax and is
/// kept as literal text. Running this on an already-clean string returns
/// it unchanged.
pub fn strip_residual_tokens(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find("{{") {
        match rest[open + 2..].find("}}") {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + 2 + close + 2..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}
