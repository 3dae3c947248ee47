//! Contract between the plugin and the build tool that drives it
//!
//! The host calls [`Plugin::resolve_id`] while building its module graph and
//! [`Plugin::load`] once it needs a module's source. In return the plugin
//! may call back into the host through a [`PluginContext`].

use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::assertion::strip_query;
use crate::errors::Result;

/// When the host runs a plugin relative to its built-in stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforce {
    Pre,
    Normal,
    Post,
}

/// Host collaborators available to a running hook
pub trait PluginContext: Send + Sync {
    /// Resolve `source` as imported from `importer` with the host's own resolver
    ///
    /// # Returns
    /// The absolute path of the target, or a message explaining the failure
    fn resolve(&self, source: &str, importer: &str) -> std::result::Result<PathBuf, String>;

    /// Rebuild whatever depends on the current module when `path` changes
    fn add_watch_file(&self, path: &Path);
}

/// Resolution and load hooks a build tool invokes per module request
///
/// `Ok(None)` from either hook means the plugin declines and the host
/// carries on with its default behaviour.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn enforce(&self) -> Enforce {
        Enforce::Normal
    }

    fn resolve_id(
        &self,
        ctx: &dyn PluginContext,
        source: &str,
        importer: Option<&str>,
    ) -> Result<Option<String>>;

    fn load(&self, ctx: &dyn PluginContext, id: &str) -> Result<Option<String>>;
}

/// Collapse `.` and `..` components without touching the file system
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Join a relative or absolute specifier onto the importer's directory
fn join_specifier(source: &str, importer: &str) -> std::result::Result<PathBuf, String> {
    if source.starts_with("./") || source.starts_with("../") {
        let importer = Path::new(strip_query(importer));
        let base = importer.parent().unwrap_or_else(|| Path::new(""));
        Ok(base.join(source))
    } else if Path::new(source).is_absolute() {
        Ok(PathBuf::from(source))
    } else {
        Err(format!("cannot resolve bare specifier '{}'", source))
    }
}

fn lock_paths(paths: &Mutex<Vec<PathBuf>>) -> std::sync::MutexGuard<'_, Vec<PathBuf>> {
    paths.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Context backed by the real file system
///
/// Relative and absolute specifiers resolve to canonical paths of existing
/// files; bare package specifiers are not supported.
#[derive(Debug, Default)]
pub struct FsPluginContext {
    watched: Mutex<Vec<PathBuf>>,
}

impl FsPluginContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths registered through [`PluginContext::add_watch_file`], in call order
    pub fn watched_files(&self) -> Vec<PathBuf> {
        lock_paths(&self.watched).clone()
    }
}

impl PluginContext for FsPluginContext {
    fn resolve(&self, source: &str, importer: &str) -> std::result::Result<PathBuf, String> {
        let candidate = join_specifier(source, importer)?;
        candidate
            .canonicalize()
            .map_err(|e| format!("cannot resolve '{}': {}", candidate.display(), e))
    }

    fn add_watch_file(&self, path: &Path) {
        lock_paths(&self.watched).push(path.to_path_buf());
    }
}

/// Context that resolves purely lexically, for tests
#[derive(Debug, Default)]
pub struct MockPluginContext {
    fail_resolution: bool,
    resolve_calls: Mutex<Vec<(String, String)>>,
    watched: Mutex<Vec<PathBuf>>,
}

impl MockPluginContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose resolver rejects every specifier
    pub fn failing() -> Self {
        Self {
            fail_resolution: true,
            ..Self::default()
        }
    }

    /// `(source, importer)` pairs passed to [`PluginContext::resolve`]
    pub fn resolve_calls(&self) -> Vec<(String, String)> {
        self.resolve_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn watched_files(&self) -> Vec<PathBuf> {
        lock_paths(&self.watched).clone()
    }
}

impl PluginContext for MockPluginContext {
    fn resolve(&self, source: &str, importer: &str) -> std::result::Result<PathBuf, String> {
        self.resolve_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((source.to_string(), importer.to_string()));

        if self.fail_resolution {
            return Err(format!("cannot resolve '{}'", source));
        }
        join_specifier(source, importer).map(|path| normalize_lexically(&path))
    }

    fn add_watch_file(&self, path: &Path) {
        lock_paths(&self.watched).push(path.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("/src/pages/../styles/./a.css")),
            PathBuf::from("/src/styles/a.css")
        );
    }

    #[test]
    fn test_mock_resolves_relative_to_importer() {
        let ctx = MockPluginContext::new();

        assert_eq!(
            ctx.resolve("./a.css", "/src/app.ts").unwrap(),
            PathBuf::from("/src/a.css")
        );
        assert_eq!(
            ctx.resolve("../theme/b.css", "/src/pages/home.ts?v=1").unwrap(),
            PathBuf::from("/src/theme/b.css")
        );
        assert_eq!(
            ctx.resolve("/abs/c.css", "/src/app.ts").unwrap(),
            PathBuf::from("/abs/c.css")
        );
    }

    #[test]
    fn test_mock_records_raw_importer() {
        let ctx = MockPluginContext::new();
        let _ = ctx.resolve("./a.css", "/src/app.ts?import");

        assert_eq!(
            ctx.resolve_calls(),
            vec![("./a.css".to_string(), "/src/app.ts?import".to_string())]
        );
    }

    #[test]
    fn test_bare_specifier_fails() {
        let ctx = MockPluginContext::new();
        assert!(ctx.resolve("some-package/theme.css", "/src/app.ts").is_err());
    }

    #[test]
    fn test_failing_mock() {
        let ctx = MockPluginContext::failing();
        assert!(ctx.resolve("./a.css", "/src/app.ts").is_err());
        assert_eq!(ctx.resolve_calls().len(), 1);
    }

    #[test]
    fn test_fs_context_requires_existing_target() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.css"), "p{}").unwrap();
        let importer = dir.path().join("app.ts");
        let importer = importer.to_str().unwrap();

        let ctx = FsPluginContext::new();
        let resolved = ctx.resolve("./a.css", importer).unwrap();

        assert_eq!(resolved, dir.path().join("a.css").canonicalize().unwrap());
        assert!(ctx.resolve("./missing.css", importer).is_err());
    }

    #[test]
    fn test_fs_context_records_watch_files() {
        let ctx = FsPluginContext::new();
        ctx.add_watch_file(Path::new("/a.css"));
        ctx.add_watch_file(Path::new("/b.css"));

        assert_eq!(
            ctx.watched_files(),
            vec![PathBuf::from("/a.css"), PathBuf::from("/b.css")]
        );
    }
}
