//! The key-value persistence backend.
//!
//! The editing engine treats the store as an opaque string map. The shipped
//! backend is a single JSON object file under the user config directory;
//! tests use the in-memory variant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::error::Result;

/// Opaque get/set string store.
///
/// Writes are best-effort: a failing backend logs and drops the value rather
/// than surfacing an error to the editing flow.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// JSON-file-backed store, one object holding all keys.
pub struct FileStore {
    path: PathBuf,
    data: StoreFile,
}

impl FileStore {
    /// Open the store at the default config location.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Open the store file at `path`, starting empty if it is missing.
    /// A corrupt file is logged and treated as empty rather than fatal.
    pub fn open(path: PathBuf) -> Self {
        let data = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("Failed to parse store file: {}. Starting empty.", e);
                    StoreFile::default()
                }
            },
            Err(_) => StoreFile::default(),
        };
        Self { path, data }
    }

    /// Store file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("scratchpad");
        path.push("store.json");
        path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.data.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            eprintln!("Failed to write store file: {}", e);
        }
    }
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("scratchpad"), None);
        store.set("scratchpad", "hello");
        assert_eq!(store.get("scratchpad"), Some("hello".to_string()));
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.set("mode", "day");
        store.set("mode", "night");
        assert_eq!(store.get("mode"), Some("night".to_string()));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(path.clone());
        store.set("scratchpad", "line one\nline two");
        store.set("mode", "night");

        // Re-open from disk
        let reloaded = FileStore::open(path);
        assert_eq!(reloaded.get("scratchpad"), Some("line one\nline two".to_string()));
        assert_eq!(reloaded.get("mode"), Some("night".to_string()));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nope.json"));
        assert_eq!(store.get("scratchpad"), None);
    }

    #[test]
    fn test_file_store_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = FileStore::open(path.clone());
        assert_eq!(store.get("scratchpad"), None);

        // And a write recovers the file
        store.set("scratchpad", "fresh");
        let reloaded = FileStore::open(path);
        assert_eq!(reloaded.get("scratchpad"), Some("fresh".to_string()));
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("nested").join("store.json");
        let mut store = FileStore::open(path.clone());
        store.set("mode", "day");
        assert!(path.exists());
    }
}
