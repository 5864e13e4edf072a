//! JSON-file credential store.
//!
//! The file holds a flat JSON object of string fields. Every `set` rewrites
//! the whole file, so each field is durable once `set` returns, but a bundle
//! spanning several fields is not written atomically.
//!
//! On Unix the file is created with mode 0600.

use crate::{CredentialStore, StoreError, StoreErrorResult};

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

type Fields = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    // Serialises read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file reads as empty.
    fn read_fields(&self) -> StoreErrorResult<Fields> {
        if !self.path.exists() {
            return Ok(Fields::new());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;

        if content.trim().is_empty() {
            return Ok(Fields::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::corrupt(&self.path, e))
    }

    fn write_fields(&self, fields: &Fields) -> StoreErrorResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }

        let content = serde_json::to_string_pretty(fields).map_err(StoreError::serialize)?;

        let mut file = Self::open_for_write(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| StoreError::io(&self.path, e))?;

        Ok(())
    }

    #[cfg(unix)]
    fn open_for_write(path: &Path) -> std::io::Result<std::fs::File> {
        use std::os::unix::fs::OpenOptionsExt;

        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
    }

    #[cfg(not(unix))]
    fn open_for_write(path: &Path) -> std::io::Result<std::fs::File> {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_fields()?.remove(key))
    }

    fn set(&self, key: &str, value: Option<&str>) -> StoreErrorResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut fields = self.read_fields()?;

        match value {
            Some(value) => {
                fields.insert(key.to_string(), value.to_string());
            }
            None => {
                if fields.remove(key).is_none() {
                    return Ok(());
                }
            }
        }

        self.write_fields(&fields)
    }

    fn clear(&self) -> StoreErrorResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
            log::debug!("Removed credential file {}", self.path.display());
        }

        Ok(())
    }
}
