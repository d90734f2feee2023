use crate::domain::errors::StorageError;
use crate::ports::outbound::SlotStorage;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File-backed slot storage.
///
/// All slots are kept in memory and written out as a single JSON object on
/// every change (temp file + rename, so a crash mid-write leaves the previous
/// file intact). A missing or unreadable file starts empty.
pub struct FileBackedSlotStorage {
    data: BTreeMap<String, String>,
    path: PathBuf,
}

impl FileBackedSlotStorage {
    /// Open (or start) the storage file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let data = match Self::load_from_file(&path) {
            Ok(Some(data)) => {
                tracing::info!(path = %path.display(), slots = data.len(), "Loaded slot storage");
                data
            }
            Ok(None) => {
                tracing::info!(path = %path.display(), "No existing slot storage file");
                BTreeMap::new()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Slot storage file unreadable, starting empty");
                BTreeMap::new()
            }
        };

        Self { data, path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_file(path: &Path) -> Result<Option<BTreeMap<String, String>>, StorageError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| StorageError::Io {
                message: format!("malformed storage file: {e}"),
            })
    }

    fn save_to_file(&self) -> Result<(), StorageError> {
        use std::io::Write;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(&self.data).map_err(|e| StorageError::Io {
            message: e.to_string(),
        })?;

        let temp_path = self.temp_path();
        let mut file = std::fs::File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    /// Sibling of the target named `<file name>.tmp`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SlotStorage for FileBackedSlotStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.get(key).cloned())
    }

    /// Write the file with the new value, restoring the previous value in
    /// memory if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.data.insert(key.to_string(), value.to_string());

        if let Err(e) = self.save_to_file() {
            match previous {
                Some(old) => self.data.insert(key.to_string(), old),
                None => self.data.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
