use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::assertion::{has_css_assertion, strip_query};
use crate::config::PluginConfig;
use crate::diagnostics::DiagnosticHandler;
use crate::errors::{PluginError, Result};
use crate::fs::FileSystem;
use crate::host::{Enforce, Plugin, PluginContext};
use crate::loader::load_stylesheet;
use crate::registry::{is_virtual, VirtualModuleRegistry};

pub const PLUGIN_NAME: &str = "vite-import-css-sheet";

/// Turns `import sheet from './x.css' with { type: 'css' }` into a module
/// exporting a constructable `CSSStyleSheet`
///
/// Each instance owns its registry, so parallel build configurations never
/// see each other's synthetic modules.
pub struct CssSheetPlugin {
    config: Arc<PluginConfig>,
    file_system: Arc<dyn FileSystem>,
    diagnostics: Arc<dyn DiagnosticHandler>,
    registry: VirtualModuleRegistry,
}

impl CssSheetPlugin {
    pub fn new(
        config: Arc<PluginConfig>,
        file_system: Arc<dyn FileSystem>,
        diagnostics: Arc<dyn DiagnosticHandler>,
    ) -> Self {
        Self {
            config,
            file_system,
            diagnostics,
            registry: VirtualModuleRegistry::new(),
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn registry(&self) -> &VirtualModuleRegistry {
        &self.registry
    }

    /// Real stylesheet path behind a synthetic id, if this instance minted it
    pub fn real_path(&self, id: &str) -> Option<PathBuf> {
        self.registry.get(id)
    }

    fn read_importer(&self, importer: &str) -> Result<String> {
        let path = Path::new(importer);
        self.file_system
            .read_file(path)
            .map_err(|source| PluginError::ReadImporter {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl Plugin for CssSheetPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn enforce(&self) -> Enforce {
        Enforce::Pre
    }

    fn resolve_id(
        &self,
        ctx: &dyn PluginContext,
        source: &str,
        importer: Option<&str>,
    ) -> Result<Option<String>> {
        if !source.ends_with(self.config.css_suffix.as_str()) {
            return Ok(None);
        }
        let Some(raw_importer) = importer else {
            return Ok(None);
        };

        let resolved = match ctx.resolve(source, raw_importer) {
            Ok(path) => path,
            Err(reason) => {
                debug!("Declining {}: {}", source, reason);
                self.diagnostics.info(
                    Some(Path::new(strip_query(raw_importer))),
                    &format!("Passing {} through to default handling: {}", source, reason),
                );
                return Ok(None);
            }
        };

        let importer = strip_query(raw_importer);
        if !self.config.is_script_importer(importer) {
            return Ok(None);
        }

        let importer_text = self.read_importer(importer)?;
        if !has_css_assertion(&importer_text, source)? {
            debug!("{} imports {} without a css assertion", importer, source);
            return Ok(None);
        }

        let id = self.registry.register(&self.config.virtual_prefix, &resolved);
        debug!(
            "Intercepted {} from {} -> {}",
            source,
            importer,
            resolved.display()
        );
        Ok(Some(id.into_string()))
    }

    fn load(&self, ctx: &dyn PluginContext, id: &str) -> Result<Option<String>> {
        if !is_virtual(id, &self.config.virtual_prefix) {
            return Ok(None);
        }
        let Some(real_path) = self.registry.get(id) else {
            return Ok(None);
        };

        Ok(load_stylesheet(
            &real_path,
            self.file_system.as_ref(),
            ctx,
            self.diagnostics.as_ref(),
            self.config.watch,
        ))
    }
}
