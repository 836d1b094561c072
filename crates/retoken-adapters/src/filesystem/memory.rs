//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use retoken_core::{
    application::{ApplicationError, ports::Filesystem},
    error::RetokenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a service
/// and inspect the other. Paths can be marked read-only to simulate
/// permission failures.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    read_only: HashSet<PathBuf>,
    writes: Vec<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file (testing helper). Does not count as a write.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path.into(), content.into());
        self
    }

    /// Make writes to `path` fail.
    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        self.inner.write().unwrap().read_only.insert(path.into());
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Every path written through the port, in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.writes.clone()
    }

    /// Remove a file, as if it vanished between discovery and read.
    pub fn remove(&self, path: &Path) {
        let mut inner = self.inner.write().unwrap();
        inner.files.remove(path);
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(path: &Path) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "memory filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> RetokenResult<Option<String>> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        Ok(inner.files.get(path).cloned())
    }

    fn write_file(&self, path: &Path, content: &str) -> RetokenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if inner.read_only.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to write file: permission denied".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes.push(path.to_path_buf());
        Ok(())
    }
}
