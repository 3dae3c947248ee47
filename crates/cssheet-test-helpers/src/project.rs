//! In-memory project harness
//!
//! Wires a [`CssSheetPlugin`] to a [`MockFileSystem`] and a collecting
//! diagnostic handler so tests can drive resolve/load end to end.

use std::sync::Arc;

use cssheet_core::diagnostics::{CollectingDiagnosticHandler, Diagnostic, DiagnosticHandler};
use cssheet_core::fs::MockFileSystem;
use cssheet_core::{Container, CssSheetPlugin, MockPluginContext, Plugin, PluginConfig, PluginError};

#[derive(Default)]
pub struct TestProject {
    fs: MockFileSystem,
    config: PluginConfig,
}

impl TestProject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.fs.add_file(path, content);
        self
    }

    pub fn config(mut self, config: PluginConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestSession {
        let diagnostics = Arc::new(CollectingDiagnosticHandler::new());
        let container =
            Container::with_dependencies(self.config, diagnostics.clone(), Arc::new(self.fs));
        TestSession {
            plugin: container.plugin(),
            ctx: MockPluginContext::new(),
            diagnostics,
        }
    }
}

/// A built plugin plus the host-side collaborators it reports to
pub struct TestSession {
    pub plugin: CssSheetPlugin,
    pub ctx: MockPluginContext,
    pub diagnostics: Arc<CollectingDiagnosticHandler>,
}

impl TestSession {
    pub fn resolve(&self, source: &str, importer: &str) -> Result<Option<String>, PluginError> {
        self.plugin.resolve_id(&self.ctx, source, Some(importer))
    }

    pub fn load(&self, id: &str) -> Result<Option<String>, PluginError> {
        self.plugin.load(&self.ctx, id)
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.get_diagnostics()
    }
}
