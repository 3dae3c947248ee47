use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{PluginError, Result};

/// Options controlling which imports are intercepted and how the
/// replacement modules are produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Namespace marker prepended to every synthetic module id (default: "\0virtual:")
    #[serde(default = "default_virtual_prefix")]
    pub virtual_prefix: String,

    /// Specifier suffix that triggers interception (default: ".css")
    #[serde(default = "default_css_suffix")]
    pub css_suffix: String,

    /// Importer suffixes whose imports are inspected for assertions
    #[serde(default = "default_importer_extensions")]
    pub importer_extensions: Vec<String>,

    /// Register loaded stylesheets with the host's file watcher (default: true)
    #[serde(default = "default_true")]
    pub watch: bool,

    /// Pretty-print diagnostics (default: true)
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_virtual_prefix() -> String {
    "\0virtual:".to_string()
}

fn default_css_suffix() -> String {
    ".css".to_string()
}

fn default_importer_extensions() -> Vec<String> {
    [".ts", ".mts", ".js", ".mjs"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            virtual_prefix: default_virtual_prefix(),
            css_suffix: default_css_suffix(),
            importer_extensions: default_importer_extensions(),
            watch: true,
            pretty: true,
        }
    }
}

impl PluginConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PluginConfig =
            serde_json::from_str(&content).map_err(|e| PluginError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration and write it to a file
    pub fn init_file(path: &Path) -> Result<()> {
        let config = PluginConfig::default();
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| PluginError::Config(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject settings that would make every import (or none) match
    pub fn validate(&self) -> Result<()> {
        if self.virtual_prefix.is_empty() {
            return Err(PluginError::Config(
                "virtualPrefix must not be empty".to_string(),
            ));
        }
        if self.css_suffix.is_empty() {
            return Err(PluginError::Config("cssSuffix must not be empty".to_string()));
        }
        if self.importer_extensions.is_empty() {
            return Err(PluginError::Config(
                "importerExtensions must list at least one suffix".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `path` names a script that may carry a css assertion
    pub fn is_script_importer(&self, path: &str) -> bool {
        self.importer_extensions
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = PluginConfig::default();
        assert_eq!(config.virtual_prefix, "\0virtual:");
        assert_eq!(config.css_suffix, ".css");
        assert_eq!(config.importer_extensions, vec![".ts", ".mts", ".js", ".mjs"]);
        assert!(config.watch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialize_config() {
        let config = PluginConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("virtualPrefix"));
        assert!(json.contains("importerExtensions"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{
            "importerExtensions": [".ts", ".tsx"],
            "watch": false
        }"#;
        let config: PluginConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.importer_extensions, vec![".ts", ".tsx"]);
        assert!(!config.watch);
        assert_eq!(config.css_suffix, ".css");
    }

    #[test]
    fn test_script_importer_suffixes() {
        let config = PluginConfig::default();
        assert!(config.is_script_importer("/src/app.ts"));
        assert!(config.is_script_importer("/src/app.mjs"));
        assert!(!config.is_script_importer("/src/app.tsx"));
        assert!(!config.is_script_importer("/src/theme.css"));
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let mut config = PluginConfig::default();
        config.virtual_prefix.clear();
        assert!(matches!(config.validate(), Err(PluginError::Config(_))));

        let mut config = PluginConfig::default();
        config.importer_extensions.clear();
        assert!(matches!(config.validate(), Err(PluginError::Config(_))));
    }

    #[test]
    fn test_init_then_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cssheet.json");

        PluginConfig::init_file(&path).unwrap();
        let loaded = PluginConfig::from_file(&path).unwrap();

        assert_eq!(loaded, PluginConfig::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cssheet.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = PluginConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, PluginError::Config(_)));
    }
}
