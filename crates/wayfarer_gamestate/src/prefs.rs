//! Persisted integer settings

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefs persistence errors
#[derive(Debug, Error)]
pub enum SaveError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// Version mismatch
    #[error("Version mismatch: prefs version {0}, current version {1}")]
    VersionMismatch(u32, u32),
}

/// Prefs file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveFormat {
    /// JSON (human readable)
    #[default]
    Json,
    /// Binary (compact)
    Binary,
}

/// Integer key/value settings that outlive a session
pub trait PrefsStore: Send {
    /// Read `key`, or `default` when it has never been written
    fn get_int(&self, key: &str, default: i32) -> i32;

    /// Write `key`
    fn set_int(&mut self, key: &str, value: i32) -> Result<(), SaveError>;
}

/// Prefs held in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, i32>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value
    pub fn with_int(mut self, key: impl Into<String>, value: i32) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

impl PrefsStore for MemoryPrefs {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i32) -> Result<(), SaveError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

const PREFS_VERSION: u32 = 1;

/// On-disk layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PrefsFile {
    version: u32,
    ints: BTreeMap<String, i32>,
}

/// Prefs written through to a single file on every change
#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
    format: SaveFormat,
    data: PrefsFile,
}

impl FilePrefs {
    /// Open (or start) a prefs file. A missing file yields empty prefs.
    pub fn open(path: impl Into<PathBuf>, format: SaveFormat) -> Result<Self, SaveError> {
        let path = path.into();

        let data = if path.exists() {
            let bytes = fs::read(&path)?;
            let data: PrefsFile = match format {
                SaveFormat::Json => serde_json::from_slice(&bytes)
                    .map_err(|e| SaveError::Deserialization(e.to_string()))?,
                SaveFormat::Binary => bincode::deserialize(&bytes)
                    .map_err(|e| SaveError::Deserialization(e.to_string()))?,
            };
            if data.version > PREFS_VERSION {
                return Err(SaveError::VersionMismatch(data.version, PREFS_VERSION));
            }
            log::debug!("Loaded {} prefs from {}", data.ints.len(), path.display());
            data
        } else {
            PrefsFile {
                version: PREFS_VERSION,
                ints: BTreeMap::new(),
            }
        };

        Ok(Self { path, format, data })
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current values to disk
    pub fn flush(&self) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = match self.format {
            SaveFormat::Json => serde_json::to_vec_pretty(&self.data)
                .map_err(|e| SaveError::Serialization(e.to_string()))?,
            SaveFormat::Binary => bincode::serialize(&self.data)
                .map_err(|e| SaveError::Serialization(e.to_string()))?,
        };

        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl PrefsStore for FilePrefs {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.data.ints.get(key).copied().unwrap_or(default)
    }

    /// Writes through to disk. On a failed write the previous value is kept.
    fn set_int(&mut self, key: &str, value: i32) -> Result<(), SaveError> {
        let previous = self.data.ints.insert(key.to_string(), value);
        if let Err(e) = self.flush() {
            match previous {
                Some(old) => self.data.ints.insert(key.to_string(), old),
                None => self.data.ints.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_prefs_default() {
        let mut prefs = MemoryPrefs::new();
        assert_eq!(prefs.get_int("levels", 0), 0);
        prefs.set_int("levels", 3).unwrap();
        assert_eq!(prefs.get_int("levels", 0), 3);
    }

    #[test]
    fn test_file_prefs_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = FilePrefs::open(&path, SaveFormat::Json).unwrap();
        assert_eq!(prefs.get_int("levels", 0), 0);
        prefs.set_int("levels", 2).unwrap();
        assert!(path.exists());

        let reopened = FilePrefs::open(&path, SaveFormat::Json).unwrap();
        assert_eq!(reopened.get_int("levels", 0), 2);
    }

    #[test]
    fn test_file_prefs_binary_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.sav");

        let mut prefs = FilePrefs::open(&path, SaveFormat::Binary).unwrap();
        prefs.set_int("levels", 5).unwrap();

        let reopened = FilePrefs::open(&path, SaveFormat::Binary).unwrap();
        assert_eq!(reopened.get_int("levels", 0), 5);
    }

    #[test]
    fn test_failed_write_keeps_old_value() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"a file, not a directory").unwrap();
        let path = blocker.join("prefs.json");

        let mut prefs = FilePrefs::open(&path, SaveFormat::Json).unwrap();
        assert!(prefs.set_int("levels", 1).is_err());
        assert_eq!(prefs.get_int("levels", 0), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, b"not json").unwrap();

        let result = FilePrefs::open(&path, SaveFormat::Json);
        assert!(matches!(result, Err(SaveError::Deserialization(_))));
    }

    #[test]
    fn test_newer_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, br#"{"version": 9, "ints": {}}"#).unwrap();

        let result = FilePrefs::open(&path, SaveFormat::Json);
        assert!(matches!(result, Err(SaveError::VersionMismatch(9, 1))));
    }
}
