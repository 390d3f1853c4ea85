//! Durable session state: exactly two keys, `mode` and `lastCapture`,
//! simple string values, no schema versioning.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Durable key for the selected face mode
pub const MODE_KEY: &str = "mode";
/// Durable key for the most recent capture's data-URL encoding
pub const LAST_CAPTURE_KEY: &str = "lastCapture";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store for tests and one-shot CLI runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
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

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key under a directory. Writes go to a temporary sibling
/// first and are renamed into place, so a reader never observes a
/// partially written value.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let target = self.path_for(key);
        let tmp = self.dir.join(format!("{}.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(MODE_KEY), None);
        store.put(MODE_KEY, "32").unwrap();
        assert_eq!(store.get(MODE_KEY).as_deref(), Some("32"));
    }

    #[test]
    fn test_file_store_round_trip_and_replace() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path()).unwrap();

        store.put(LAST_CAPTURE_KEY, "first").unwrap();
        assert_eq!(store.get(LAST_CAPTURE_KEY).as_deref(), Some("first"));

        store.put(LAST_CAPTURE_KEY, "second").unwrap();
        assert_eq!(store.get(LAST_CAPTURE_KEY).as_deref(), Some("second"));

        // The temporary sibling must not linger after the rename
        assert!(!dir.path().join("lastCapture.tmp").exists());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::new(dir.path()).unwrap();
            store.put(MODE_KEY, "chakra").unwrap();
        }
        let store = FileStore::new(dir.path()).unwrap();
        assert_eq!(store.get(MODE_KEY).as_deref(), Some("chakra"));
    }
}
