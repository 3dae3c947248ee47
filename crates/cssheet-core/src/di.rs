use crate::config::PluginConfig;
use crate::diagnostics::{ConsoleDiagnosticHandler, DiagnosticHandler};
use crate::fs::{FileSystem, RealFileSystem};
use crate::plugin::CssSheetPlugin;
use std::sync::Arc;

/// Dependency injection container
/// Holds the shared collaborators and builds plugin instances wired to them
pub struct Container {
    config: Arc<PluginConfig>,
    diagnostic_handler: Arc<dyn DiagnosticHandler>,
    file_system: Arc<dyn FileSystem>,
}

impl Container {
    /// Create a new container with production dependencies
    pub fn new(config: PluginConfig) -> Self {
        let config = Arc::new(config);

        let diagnostic_handler = Arc::new(ConsoleDiagnosticHandler::new(config.pretty));

        let file_system = Arc::new(RealFileSystem::new());

        Container {
            config,
            diagnostic_handler,
            file_system,
        }
    }

    /// Create a container with custom dependencies (for testing)
    pub fn with_dependencies(
        config: PluginConfig,
        diagnostic_handler: Arc<dyn DiagnosticHandler>,
        file_system: Arc<dyn FileSystem>,
    ) -> Self {
        Container {
            config: Arc::new(config),
            diagnostic_handler,
            file_system,
        }
    }

    /// Build a plugin instance with its own, empty registry
    pub fn plugin(&self) -> CssSheetPlugin {
        CssSheetPlugin::new(
            self.config.clone(),
            self.file_system.clone(),
            self.diagnostic_handler.clone(),
        )
    }

    pub fn config(&self) -> &Arc<PluginConfig> {
        &self.config
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostic_handler.has_errors()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostic_handler.error_count()
    }
}
