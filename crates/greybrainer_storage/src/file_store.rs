//! Directory-backed config store.

use derive_getters::Getters;
use greybrainer_error::{GreybrainerResult, StorageError, StorageErrorKind};
use greybrainer_interface::ConfigStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores each key as `<key>.json` inside one directory.
#[derive(Debug, Clone, Getters)]
pub struct FileConfigStore {
    /// Directory holding the value files
    state_dir: PathBuf,
}

impl FileConfigStore {
    /// Open a store rooted at `state_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(state_dir: impl AsRef<Path>) -> GreybrainerResult<Self> {
        let state_dir = state_dir.as_ref().to_path_buf();

        if !state_dir.exists() {
            std::fs::create_dir_all(&state_dir).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    state_dir.display(),
                    e
                )))
            })?;
        }

        debug!(path = %state_dir.display(), "Initialized config store");
        Ok(Self { state_dir })
    }

    fn key_path(&self, key: &str) -> GreybrainerResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(StorageError::new(StorageErrorKind::InvalidKey(key.to_string())).into());
        }
        Ok(self.state_dir.join(format!("{key}.json")))
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: &str) -> GreybrainerResult<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            debug!(key, "No stored value");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
        })?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> GreybrainerResult<()> {
        let path = self.key_path(key)?;
        // Write beside the target and rename so readers never see a partial file
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .and_then(|()| std::fs::rename(&tmp, &path))
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;

        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> GreybrainerResult<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            debug!(key, "Removed value");
        }
        Ok(())
    }
}
