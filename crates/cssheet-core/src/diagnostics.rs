//! Build-time messages the plugin hands to the host's reporting surface
//!
//! Errors mark a module the plugin gave up on (its stylesheet could not be
//! read). Info entries explain why an import was passed through untouched.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Info,
}

/// A diagnostic message, optionally tied to the file it concerns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub path: Option<PathBuf>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(path: Option<&Path>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            path: path.map(Path::to_path_buf),
            message: message.into(),
        }
    }

    pub fn info(path: Option<&Path>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            path: path.map(Path::to_path_buf),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            DiagnosticLevel::Error => "error",
            DiagnosticLevel::Info => "info",
        };
        write!(f, "{}: {}", level, self.message)?;
        if let Some(path) = &self.path {
            write!(f, " [{}]", path.display())?;
        }
        Ok(())
    }
}

/// Trait for handling diagnostics
/// This is the reporting surface the host provides to the plugin
pub trait DiagnosticHandler: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);

    fn error(&self, path: Option<&Path>, message: &str) {
        self.report(Diagnostic::error(path, message));
    }

    fn info(&self, path: Option<&Path>, message: &str) {
        self.report(Diagnostic::info(path, message));
    }

    fn error_count(&self) -> usize;

    fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn get_diagnostics(&self) -> Vec<Diagnostic>;
}

/// Shared storage behind both handlers
#[derive(Debug, Default)]
struct DiagnosticLog(Mutex<Vec<Diagnostic>>);

impl DiagnosticLog {
    fn entries(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, diagnostic: Diagnostic) {
        self.entries().push(diagnostic);
    }

    fn error_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Error)
            .count()
    }

    fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries().clone()
    }
}

/// Console-based diagnostic handler that prints to stderr
pub struct ConsoleDiagnosticHandler {
    log: DiagnosticLog,
    pretty: bool,
}

impl ConsoleDiagnosticHandler {
    pub fn new(pretty: bool) -> Self {
        Self {
            log: DiagnosticLog::default(),
            pretty,
        }
    }
}

impl DiagnosticHandler for ConsoleDiagnosticHandler {
    fn report(&self, diagnostic: Diagnostic) {
        if self.pretty && diagnostic.level == DiagnosticLevel::Error {
            eprintln!("\x1b[1;31m{}\x1b[0m", diagnostic);
        } else {
            eprintln!("{}", diagnostic);
        }
        self.log.push(diagnostic);
    }

    fn error_count(&self) -> usize {
        self.log.error_count()
    }

    fn get_diagnostics(&self) -> Vec<Diagnostic> {
        self.log.snapshot()
    }
}

/// Collects diagnostics without printing; used by tests
#[derive(Default)]
pub struct CollectingDiagnosticHandler {
    log: DiagnosticLog,
}

impl CollectingDiagnosticHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticHandler for CollectingDiagnosticHandler {
    fn report(&self, diagnostic: Diagnostic) {
        self.log.push(diagnostic);
    }

    fn error_count(&self) -> usize {
        self.log.error_count()
    }

    fn get_diagnostics(&self) -> Vec<Diagnostic> {
        self.log.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let diag = Diagnostic::error(Some(Path::new("/src/a.css")), "Unable to load");
        assert_eq!(diag.to_string(), "error: Unable to load [/src/a.css]");

        let diag = Diagnostic::info(None, "Passing through");
        assert_eq!(diag.to_string(), "info: Passing through");
    }

    #[test]
    fn test_collecting_handler_counts_errors_only() {
        let handler = CollectingDiagnosticHandler::new();

        handler.error(None, "Error 1");
        handler.info(None, "Info 1");
        handler.error(Some(Path::new("/a.css")), "Error 2");

        assert_eq!(handler.error_count(), 2);
        assert!(handler.has_errors());
        assert_eq!(handler.get_diagnostics().len(), 3);
    }

    #[test]
    fn test_info_is_not_an_error() {
        let handler = CollectingDiagnosticHandler::new();
        handler.info(Some(Path::new("/src/app.ts")), "declined");

        assert!(!handler.has_errors());
        assert_eq!(handler.get_diagnostics()[0].level, DiagnosticLevel::Info);
    }

    #[test]
    fn test_console_handler_records() {
        let handler = ConsoleDiagnosticHandler::new(false);
        handler.error(Some(Path::new("/missing.css")), "Unable to load");

        assert!(handler.has_errors());
        assert_eq!(handler.get_diagnostics()[0].message, "Unable to load");
    }
}
