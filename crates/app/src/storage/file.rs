//! File-backed storage.

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use tracing::debug;

use super::{CartStorage, StorageError};

/// Storage kept in a single JSON document mapping keys to string values.
///
/// Every write rewrites the document through a sibling temporary file and a
/// rename, so a crash mid-write leaves the previous document in place.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Open storage at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error.into()),
        }
    }

    fn write_document(&self, document: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, serde_json::to_vec_pretty(document)?)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), keys = document.len(), "wrote storage document");

        Ok(())
    }
}

impl CartStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(self.read_document()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut document = self.read_document()?;

        document.insert(key.to_string(), value.to_string());

        self.write_document(&document)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_file_reads_as_empty() -> TestResult {
        let dir = TempDir::new()?;
        let storage = FileStorage::new(dir.path().join("storage.json"));

        assert_eq!(storage.get_item("@RocketShoes:cart")?, None);

        Ok(())
    }

    #[test]
    fn values_survive_reopening() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("storage.json");

        FileStorage::new(&path).set_item("@RocketShoes:cart", r#"[{"id":1,"amount":2}]"#)?;

        let reopened = FileStorage::new(&path);

        assert_eq!(
            reopened.get_item("@RocketShoes:cart")?.as_deref(),
            Some(r#"[{"id":1,"amount":2}]"#)
        );
        assert!(!path.with_extension("tmp").exists(), "temporary file is renamed away");

        Ok(())
    }

    #[test]
    fn writes_keep_other_keys() -> TestResult {
        let dir = TempDir::new()?;
        let storage = FileStorage::new(dir.path().join("storage.json"));

        storage.set_item("@RocketShoes:theme", "dark")?;
        storage.set_item("@RocketShoes:cart", "[]")?;
        storage.set_item("@RocketShoes:cart", "[1]")?;

        assert_eq!(storage.get_item("@RocketShoes:theme")?.as_deref(), Some("dark"));
        assert_eq!(storage.get_item("@RocketShoes:cart")?.as_deref(), Some("[1]"));

        Ok(())
    }

    #[test]
    fn malformed_document_is_reported() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("storage.json");

        fs::write(&path, "not json")?;

        let result = FileStorage::new(&path).get_item("@RocketShoes:cart");

        assert!(
            matches!(result, Err(StorageError::Malformed(_))),
            "expected Malformed, got {result:?}"
        );

        Ok(())
    }
}
