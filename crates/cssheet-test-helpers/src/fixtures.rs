//! Importer sources and stylesheets used across tests

use indoc::indoc;

pub fn simple_stylesheet() -> &'static str {
    "body{color:red}"
}

/// Stylesheet exercising every character that needs escaping
pub fn tricky_stylesheet() -> &'static str {
    r#"a::before { content: "\201C `quoted` ${not-a-template}"; }"#
}

pub fn importer_with_assertion() -> &'static str {
    "import styles from './a.css' with { type: 'css' };"
}

pub fn importer_with_legacy_assertion() -> &'static str {
    indoc! {r#"
        import { html } from './html.js';
        import styles from "./a.css"
            assert {
                type: "css"
            };

        document.adoptedStyleSheets = [styles];
    "#}
}

pub fn importer_without_assertion() -> &'static str {
    "import styles from './a.css';"
}

pub fn importer_with_json_assertion() -> &'static str {
    "import data from './a.css' with { type: 'json' };"
}

/// Two separate asserted imports of the same stylesheet
pub fn importer_with_duplicate_imports() -> &'static str {
    indoc! {"
        import first from './a.css' with { type: 'css' };
        import second from './a.css' with { type: 'css' };
    "}
}
