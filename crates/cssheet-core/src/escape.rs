//! Embedding arbitrary text inside a JavaScript template literal
//!
//! Backslash is handled in the same pass as the other characters, so the
//! backslashes introduced for backtick and dollar are never escaped twice.

/// Replacement for a character that cannot appear raw inside a template literal
fn substitution(c: char) -> Option<&'static str> {
    match c {
        '\\' => Some("\\\\"),
        '`' => Some("\\`"),
        '$' => Some("\\$"),
        // Raw CR would be normalised to LF when the literal is evaluated.
        '\r' => Some("\\r"),
        _ => None,
    }
}

/// Escape `text` so it evaluates back to itself inside backticks
pub fn escape_template_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match substitution(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Escape `text` and wrap it in backticks
pub fn to_template_literal(text: &str) -> String {
    format!("`{}`", escape_template_text(text))
}
