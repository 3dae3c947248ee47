use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read importer {path}: {source}")]
    ReadImporter {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid assertion pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PluginError>;
