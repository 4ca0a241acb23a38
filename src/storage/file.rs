//! Directory-backed storage: one file per key.

use super::{KeyValueStore, Result, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores each key as a file under a root directory.
///
/// Keys are restricted to ASCII alphanumerics, `.`, `-` and `_`, and may
/// not start with a dot, so a key can never escape the root. Writes land
/// in a temporary sibling first and are renamed into place.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Use `root` as the storage directory. It is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default location: `<data_dir>/tally`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("tally"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }

    fn ensure_root(&self) -> Result<()> {
        if self.root.exists() && !self.root.is_dir() {
            return Err(StorageError::Unavailable(self.root.clone()));
        }
        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        let path = self.path_for(key)?;
        self.ensure_root()?;

        let tmp = self.root.join(format!(".{key}.tmp"));
        if let Err(e) = fs::write(&tmp, &value).and_then(|()| fs::rename(&tmp, &path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(key, bytes = value.len(), path = %path.display(), "stored entry");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_creates_root_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("data"));

        store.set("calc.history.v1", b"[]".to_vec()).unwrap();
        assert_eq!(store.get("calc.history.v1").unwrap(), Some(b"[]".to_vec()));
        assert!(store.root().join("calc.history.v1").is_file());
    }

    #[test]
    fn set_replaces_existing_value() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());

        store.set("k", b"one".to_vec()).unwrap();
        store.set("k", b"two".to_vec()).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"two".to_vec()));
        assert!(!dir.path().join(".k.tmp").exists());
    }

    #[test]
    fn missing_key_reads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.remove("k").unwrap();

        store.set("k", b"v".to_vec()).unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn rejects_keys_that_escape_root() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());

        for key in ["", "../evil", "a/b", ".hidden", "spa ce"] {
            assert!(matches!(
                store.set(key, Vec::new()),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let occupied = dir.path().join("k");
        fs::create_dir(&occupied).unwrap();
        fs::write(occupied.join("inside"), b"x").unwrap();

        let mut store = FileStore::new(dir.path());
        assert!(matches!(
            store.set("k", b"value".to_vec()),
            Err(StorageError::Io(_))
        ));
        assert!(!dir.path().join(".k.tmp").exists());
        assert!(occupied.join("inside").is_file());
    }

    #[test]
    fn root_that_is_a_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, b"x").unwrap();

        let mut store = FileStore::new(&file);
        assert!(matches!(
            store.set("k", Vec::new()),
            Err(StorageError::Unavailable(_))
        ));
    }
}
