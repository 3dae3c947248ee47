//! Detection of `type: "css"` import assertions
//!
//! Recognises both the current `with { type: "css" }` form and the legacy
//! `assert { type: "css" }` form, with either quote style and any amount of
//! whitespace or line breaks between the specifier, keyword and block.

use regex::Regex;

use crate::errors::Result;

/// Drop everything from the first `?` onward (`/src/app.ts?v=3` -> `/src/app.ts`)
pub fn strip_query(importer: &str) -> &str {
    importer
        .split_once('?')
        .map(|(path, _)| path)
        .unwrap_or(importer)
}

/// Build the pattern matching `import ... from '<source>' with { type: 'css' }`
///
/// `source` is escaped, so specifiers containing `.`, `+`, `(` and the like
/// only ever match themselves.
pub fn assertion_pattern(source: &str) -> Result<Regex> {
    let specifier = regex::escape(source);
    let pattern = format!(
        r#"\bimport\b[^;]*?\bfrom\s*(?:'{specifier}'|"{specifier}")\s*(?:with|assert)\s*\{{\s*type\s*:\s*(?:'css'|"css")\s*,?\s*\}}"#
    );
    Ok(Regex::new(&pattern)?)
}

/// Whether `importer_text` imports `source` with a css-type assertion
pub fn has_css_assertion(importer_text: &str, source: &str) -> Result<bool> {
    Ok(assertion_pattern(source)?.is_match(importer_text))
}
