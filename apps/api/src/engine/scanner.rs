//! Token Scanner — finds template tokens and their byte spans in one pass.
//!
//! No AST is built here. The scanner emits a flat list of tokens; the
//! substitution and expansion passes slice the literal runs between them
//! straight out of the template. Token syntax:
//!
//! - `{{name}}`   scalar token
//! - `{{#name}}`  section open
//! - `{{/name}}`  section close
//! - `{{.}}`      current-item token
//!
//! Whitespace inside the delimiters is tolerated (`{{ name }}`). An
//! unterminated `{{` is literal text, not a token.

/// The kind of one scanned token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Scalar(String),
    SectionOpen(String),
    SectionClose(String),
    CurrentItem,
}

/// One token occurrence: kind plus the byte span of the full `{{...}}`
/// text in the scanned template.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// Scans a template left to right and returns every token in order.
pub fn scan(template: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(open_rel) = template[cursor..].find("{{") {
        let start = cursor + open_rel;
        let inner_start = start + 2;
        let Some(close_rel) = template[inner_start..].find("}}") else {
            // Unterminated delimiter: the rest of the template is literal.
            break;
        };
        let end = inner_start + close_rel + 2;
        if let Some(kind) = classify(&template[inner_start..inner_start + close_rel]) {
            tokens.push(Token { kind, start, end });
        }
        cursor = end;
    }

    tokens
}

/// Classifies the text between one `{{ }}` pair, or `None` if it does not
/// form a valid token (empty, or containing stray delimiter characters).
fn classify(inner: &str) -> Option<TokenKind> {
    let inner = inner.trim();
    if inner.is_empty() || inner.contains(['{', '}']) {
        return None;
    }
    if inner == "." {
        return Some(TokenKind::CurrentItem);
    }
    if let Some(name) = inner.strip_prefix('#') {
        let name = name.trim();
        return (!name.is_empty()).then(|| TokenKind::SectionOpen(name.to_string()));
    }
    if let Some(name) = inner.strip_prefix('/') {
        let name = name.trim();
        return (!name.is_empty()).then(|| TokenKind::SectionClose(name.to_string()));
    }
    Some(TokenKind::Scalar(inner.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scans_all_three_token_kinds_plus_current_item() {
        let tokens = scan("{{name}} {{#skills}}{{.}}{{/skills}}");
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Scalar("name".to_string()),
                TokenKind::SectionOpen("skills".to_string()),
                TokenKind::CurrentItem,
                TokenKind::SectionClose("skills".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_inside_delimiters_is_tolerated() {
        let tokens = scan("{{ name }}{{ # skills }}{{ . }}{{ / skills }}");
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Scalar("name".to_string()),
                TokenKind::SectionOpen("skills".to_string()),
                TokenKind::CurrentItem,
                TokenKind::SectionClose("skills".to_string()),
            ]
        );
    }

    #[test]
    fn test_spans_cover_the_full_delimited_text() {
        let template = "ab{{ name }}cd";
        let tokens = scan(template);
        assert_eq!(tokens.len(), 1);
        assert_eq!(&template[tokens[0].start..tokens[0].end], "{{ name }}");
    }

    #[test]
    fn test_unterminated_open_is_not_a_token() {
        assert!(scan("hello {{name").is_empty());
    }

    #[test]
    fn test_empty_and_malformed_inners_are_skipped() {
        assert!(scan("{{}}").is_empty());
        assert!(scan("{{   }}").is_empty());
        assert!(scan("{{#}}").is_empty());
        assert!(scan("{{/ }}").is_empty());
        assert!(scan("{{a{b}}").is_empty());
    }

    #[test]
    fn test_plain_text_yields_no_tokens() {
        assert!(scan("just a resume, no markup").is_empty());
    }

    #[test]
    fn test_adjacent_tokens_scan_in_order() {
        let tokens = scan("{{a}}{{b}}{{a}}");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].end <= tokens[1].start);
        assert!(tokens[1].end <= tokens[2].start);
    }
}
