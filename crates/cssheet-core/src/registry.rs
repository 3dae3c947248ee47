use rustc_hash::FxHashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

/// Identifier of a synthetic stylesheet module
///
/// Always starts with the configured namespace marker, so other resolvers
/// never mistake it for a path on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualModuleId(String);

impl VirtualModuleId {
    /// Mint a fresh id: `prefix` followed by a v4 UUID without hyphens
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}{}", prefix, Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VirtualModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether `id` lives in the synthetic namespace
pub fn is_virtual(id: &str, prefix: &str) -> bool {
    id.starts_with(prefix)
}

/// Synthetic id -> real stylesheet path, owned by one plugin instance
///
/// Entries are inserted during resolution and read during load; nothing is
/// ever evicted.
#[derive(Debug, Default)]
pub struct VirtualModuleRegistry {
    modules: RwLock<FxHashMap<String, PathBuf>>,
}

impl VirtualModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unconditionally, replacing any previous path for `id`
    pub fn put(&self, id: &VirtualModuleId, real_path: PathBuf) {
        self.modules
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.as_str().to_string(), real_path);
    }

    pub fn has(&self, id: &str) -> bool {
        self.modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<PathBuf> {
        self.modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Mint a new id for `real_path` and record it
    pub fn register(&self, prefix: &str, real_path: &Path) -> VirtualModuleId {
        let id = VirtualModuleId::generate(prefix);
        self.put(&id, real_path.to_path_buf());
        id
    }

    pub fn len(&self) -> usize {
        self.modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
