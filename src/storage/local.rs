//! Local filesystem storage implementation.
//!
//! Each key is kept in its own `{root}/{key}.json` file. Writes go to a
//! temporary file first and are renamed into place, so a crash mid-write
//! leaves the previous value intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::storage::KeyValueStore;

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Directory holding the stored files.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Get the full path for a key.
    fn path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(AppError::storage(key, "key is not a plain file name"));
        }
        Ok(self.root_dir.join(format!("{key}.json")))
    }

    /// Ensure parent directory exists.
    fn ensure_dir(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
        Self::ensure_dir(path)?;

        let tmp = path.with_extension("tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        Self::write_bytes(&path, value.as_bytes())?;
        log::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read() {
        let tmp = TempDir::new().unwrap();
        let mut storage = LocalStorage::new(tmp.path());

        storage.set("greeting", "hello").unwrap();
        assert_eq!(storage.get("greeting").unwrap().as_deref(), Some("hello"));
        assert!(tmp.path().join("greeting.json").exists());
        assert!(!tmp.path().join("greeting.tmp").exists());
    }

    #[test]
    fn test_read_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        assert!(storage.get("nope").unwrap().is_none());
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let tmp = TempDir::new().unwrap();
        let mut storage = LocalStorage::new(tmp.path());

        storage.set("k", r#"["a","b"]"#).unwrap();
        storage.set("k", r#"["a"]"#).unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn test_creates_missing_root() {
        let tmp = TempDir::new().unwrap();
        let mut storage = LocalStorage::new(tmp.path().join("nested").join("dir"));

        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let tmp = TempDir::new().unwrap();
        let mut storage = LocalStorage::new(tmp.path());

        assert!(storage.set("../escape", "v").is_err());
        assert!(storage.get("a/b").is_err());
        assert!(storage.set("", "v").is_err());
    }
}
