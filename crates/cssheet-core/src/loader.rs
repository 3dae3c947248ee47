//! Replacement module source for asserted stylesheets

use std::path::Path;
use tracing::{debug, warn};

use crate::diagnostics::DiagnosticHandler;
use crate::escape::to_template_literal;
use crate::fs::FileSystem;
use crate::host::PluginContext;

/// Message logged by the emitted module when `CSSStyleSheet` is unavailable
pub const UNSUPPORTED_MESSAGE: &str =
    "Constructable Stylesheets are not supported in your environment.";

/// Module source whose default export is a `CSSStyleSheet` filled from `css`
///
/// On runtimes without constructable stylesheets the export is `undefined`
/// and the failure is reported through `console.error`.
pub fn render_stylesheet_module(css: &str) -> String {
    let literal = to_template_literal(css);
    format!(
        r#"let sheet;
try {{
    sheet = new CSSStyleSheet();
    sheet.replaceSync({literal});
}} catch (err) {{
    console.error('{UNSUPPORTED_MESSAGE}');
}}

export default sheet;
"#
    )
}

/// Read the stylesheet at `real_path` and render its replacement module
///
/// A failed read is reported as an error diagnostic and yields `None`, so the
/// failure stays confined to this one module.
pub fn load_stylesheet(
    real_path: &Path,
    fs: &dyn FileSystem,
    ctx: &dyn PluginContext,
    diagnostics: &dyn DiagnosticHandler,
    watch: bool,
) -> Option<String> {
    let css = match fs.read_file(real_path) {
        Ok(css) => css,
        Err(e) => {
            warn!("Failed to read {}: {}", real_path.display(), e);
            diagnostics.error(
                Some(real_path),
                &format!("Unable to load asserted css file: {}", real_path.display()),
            );
            return None;
        }
    };

    if watch {
        ctx.add_watch_file(real_path);
    }

    debug!("Loaded {} ({} bytes)", real_path.display(), css.len());
    Some(render_stylesheet_module(&css))
}
