pub mod assertion;
pub mod config;
pub mod di;
pub mod diagnostics;
pub mod errors;
pub mod escape;
pub mod fs;
pub mod host;
pub mod loader;
pub mod plugin;
pub mod registry;

pub use config::PluginConfig;
pub use di::Container;
pub use diagnostics::{Diagnostic, DiagnosticHandler, DiagnosticLevel};
pub use errors::PluginError;
pub use host::{Enforce, FsPluginContext, MockPluginContext, Plugin, PluginContext};
pub use plugin::CssSheetPlugin;
pub use registry::{VirtualModuleId, VirtualModuleRegistry};
