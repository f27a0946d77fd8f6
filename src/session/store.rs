// file: src/session/store.rs
// description: key-value backends for the per-session result cache
// reference: Production-grade metadata persistence

use crate::error::{SearchError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Ephemeral string key-value storage scoped to one browsing session.
///
/// `read` returns a consistent snapshot of the requested keys and `write`
/// applies all entries or none, so a reader never sees half of a write.
pub trait SessionStore {
    fn read(&self, keys: &[&str]) -> Result<Vec<Option<String>>>;

    fn write(&self, entries: &[(&str, String)]) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, keys: &[&str]) -> Result<Vec<Option<String>>> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(keys.iter().map(|key| entries.get(*key).cloned()).collect())
    }

    fn write(&self, new_entries: &[(&str, String)]) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for (key, value) in new_entries {
            entries.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
        Ok(())
    }
}

/// Session store kept as a single JSON object on disk.
///
/// Writes go to a sibling temp file that is renamed over the target, so
/// the file always holds either the old or the new set of entries.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> Result<HashMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No session file at {:?}", self.path);
                return Ok(HashMap::new());
            }
            Err(e) => return Err(SearchError::Io(e)),
        };

        serde_json::from_str(&contents).map_err(|e| {
            SearchError::CacheCorruption(format!(
                "Failed to parse session file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self, keys: &[&str]) -> Result<Vec<Option<String>>> {
        let map = self.load_map()?;
        Ok(keys.iter().map(|key| map.get(*key).cloned()).collect())
    }

    fn write(&self, entries: &[(&str, String)]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // A corrupt file is overwritten rather than merged.
        let mut map = match self.load_map() {
            Ok(map) => map,
            Err(SearchError::CacheCorruption(reason)) => {
                warn!("Replacing corrupt session file: {}", reason);
                HashMap::new()
            }
            Err(e) => return Err(e),
        };
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }

        let contents = serde_json::to_string_pretty(&map)
            .map_err(|e| SearchError::Serialization(e.to_string()))?;

        let tmp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!("Saved {} session entries to {:?}", map.len(), self.path);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SearchError::Io(e)),
        }
    }
}
