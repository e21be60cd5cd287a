//! Durable key-value storage for session state.
//!
//! The console persists exactly two entries -- the bearer token and the
//! active tenant id -- under fixed key names. [`FileStorage`] keeps them
//! in a small JSON file so they survive restarts; [`MemoryStorage`] is
//! the ephemeral variant for tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key for the active tenant id (stored as a stringified
/// integer).
pub const TENANT_KEY: &str = "tenant_id";

/// A durable string-to-string store.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// File-backed storage
// ---------------------------------------------------------------------------

/// JSON-file-backed storage. The whole map is rewritten on every
/// mutation; the file is tiny (two entries).
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open storage at `path`, loading existing entries if the file is
    /// present. A corrupt file is logged and treated as empty rather
    /// than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Corrupt session file, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Rewrite the backing file from the in-memory map.
    fn persist(&self, entries: &HashMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(entries)
            .expect("string map is always serialisable");
        fs::write(&self.path, raw)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("entries lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut entries = self.entries.lock().expect("entries lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let mut entries = self.entries.lock().expect("entries lock poisoned");
        entries.remove(key);
        self.persist(&entries)
    }
}

// ---------------------------------------------------------------------------
// In-memory storage
// ---------------------------------------------------------------------------

/// Ephemeral storage for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("entries lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .lock()
            .expect("entries lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.entries
            .lock()
            .expect("entries lock poisoned")
            .remove(key);
        Ok(())
    }
}
