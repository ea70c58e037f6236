use std::collections::HashMap;

use crate::errors::CoreError;

/// Slot under which the journal is persisted.
pub const STORAGE_KEY: &str = "trading-dashboard-trades";

/// Trait abstraction over the host platform's key-value store.
///
/// The core treats persistence as a single named slot holding an opaque
/// text payload. A browser host backs this with localStorage, a desktop
/// build with a plain file; tests use the in-memory implementation. If
/// the host storage changes, only the implementation is replaced — the
/// rest of the codebase is untouched.
pub trait KeyValueStore {
    /// Read the payload stored under `key`, or `None` if the slot is
    /// empty.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous payload
    /// wholesale.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// Volatile in-memory store. Used by tests and by WASM hosts that
/// marshal the payload to the browser themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store (native only): each key maps to `<dir>/<key>.json`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
