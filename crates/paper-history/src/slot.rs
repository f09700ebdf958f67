//! Durable single-value slots backing the history store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::HistoryError;

/// A named location that holds one serialized value.
pub trait HistorySlot {
    /// Read the stored value, or `None` when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, HistoryError>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the value cannot be stored.
    fn write(&self, contents: &str) -> Result<(), HistoryError>;

    /// Delete the stored value. Removing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the value exists but cannot be removed.
    fn remove(&self) -> Result<(), HistoryError>;
}

/// A JSON file on disk, replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HistorySlot for FileSlot {
    fn read(&self) -> Result<Option<String>, HistoryError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn write(&self, contents: &str) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents).map_err(|e| self.io_error(e))?;
        match fs::rename(&tmp_path, &self.path) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                if self.path.exists() {
                    fs::remove_file(&self.path).map_err(|e| self.io_error(e))?;
                    fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;
                    Ok(())
                } else {
                    Err(self.io_error(rename_err))
                }
            }
        }
    }

    fn remove(&self) -> Result<(), HistoryError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

/// In-memory slot with switchable write failures. Intended for tests.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: Mutex<Option<String>>,
    fail_writes: AtomicBool,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-populated with `contents`.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent writes and removals fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current raw contents.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn check_writable(&self) -> Result<(), HistoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(HistoryError::Unavailable("quota exceeded".to_string()));
        }
        Ok(())
    }

    fn store(&self, value: Option<String>) -> Result<(), HistoryError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| HistoryError::Unavailable("slot lock poisoned".to_string()))?;
        *guard = value;
        Ok(())
    }
}

impl HistorySlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, HistoryError> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> Result<(), HistoryError> {
        self.check_writable()?;
        self.store(Some(contents.to_string()))
    }

    fn remove(&self) -> Result<(), HistoryError> {
        self.check_writable()?;
        self.store(None)
    }
}

impl<T: HistorySlot + ?Sized> HistorySlot for std::sync::Arc<T> {
    fn read(&self) -> Result<Option<String>, HistoryError> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> Result<(), HistoryError> {
        (**self).write(contents)
    }

    fn remove(&self) -> Result<(), HistoryError> {
        (**self).remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_roundtrip() {
        let slot = MemorySlot::new();
        assert!(slot.read().unwrap().is_none());
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
        slot.remove().unwrap();
        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn memory_slot_injected_failure() {
        let slot = MemorySlot::with_contents("[1]");
        slot.set_fail_writes(true);
        assert!(matches!(
            slot.write("[]"),
            Err(HistoryError::Unavailable(_))
        ));
        assert!(slot.remove().is_err());
        assert_eq!(slot.contents().as_deref(), Some("[1]"));
    }

    #[test]
    fn file_slot_missing_file_reads_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("history.json"));
        assert!(slot.read().unwrap().is_none());
        slot.remove().unwrap();
    }

    #[test]
    fn file_slot_creates_parent_dirs_and_replaces() {
        let dir = tempfile::TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("nested").join("history.json"));
        slot.write("[1]").unwrap();
        slot.write("[2]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[2]"));
        assert!(!dir.path().join("nested").join("history.json.tmp").exists());
    }
}
