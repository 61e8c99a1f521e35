use crate::domain::ports::SnapshotStorage;
use crate::utils::error::{CatalogueError, Result, StorageErrorKind};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Snapshot file on the local file system.
///
/// With atomic writes enabled the snapshot is written to a temporary file in
/// the same directory and renamed over the target, so a crash mid-write leaves
/// the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
    atomic_writes: bool,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic_writes: true,
        }
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_error(&self, e: impl ToString) -> CatalogueError {
        CatalogueError::storage(StorageErrorKind::Write, &self.path, e)
    }

    fn write_atomic(&self, data: &[u8]) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(self.parent_dir()).map_err(|e| self.write_error(e))?;
        tmp.write_all(data).map_err(|e| self.write_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.write_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_error(e.error))?;
        Ok(())
    }

    fn write_in_place(&self, data: &[u8]) -> Result<()> {
        let mut file = fs::File::create(&self.path).map_err(|e| self.write_error(e))?;
        file.write_all(data).map_err(|e| self.write_error(e))?;
        file.flush().map_err(|e| self.write_error(e))?;
        Ok(())
    }
}

impl SnapshotStorage for LocalStorage {
    fn read_snapshot(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CatalogueError::storage(StorageErrorKind::Read, &self.path, e)),
        }
    }

    fn write_snapshot(&self, data: &[u8]) -> Result<()> {
        fs::create_dir_all(self.parent_dir()).map_err(|e| self.write_error(e))?;

        tracing::debug!(
            "Writing {} bytes to {} (atomic: {})",
            data.len(),
            self.path.display(),
            self.atomic_writes
        );

        if self.atomic_writes {
            self.write_atomic(data)
        } else {
            self.write_in_place(data)
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().join("absent.json"));
        assert!(storage.read_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_atomic_write_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("articles.json");
        let storage = LocalStorage::new(&path);

        storage.write_snapshot(b"first snapshot").unwrap();
        storage.write_snapshot(b"second").unwrap();

        assert_eq!(storage.read_snapshot().unwrap().unwrap(), b"second");
        // no temporary files left behind
        let entries = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_in_place_write() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().join("articles.json")).with_atomic_writes(false);

        storage.write_snapshot(b"a much longer first snapshot").unwrap();
        storage.write_snapshot(b"short").unwrap();

        assert_eq!(fs::read(storage.path()).unwrap(), b"short");
    }

    #[test]
    fn test_reading_a_directory_fails() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let err = storage.read_snapshot().unwrap_err();
        assert!(matches!(
            err,
            CatalogueError::Storage { kind: StorageErrorKind::Read, .. }
        ));
    }
}
