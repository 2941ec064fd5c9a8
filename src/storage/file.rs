//! File-based storage backend.
//!
//! Each key is stored as one JSON file with file locking around reads and
//! writes. Suitable for single-node deployments.
//!
//! Directory structure:
//! ```text
//! data/
//! ├── history.json
//! └── settings.json
//! ```

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tokio::sync::Mutex;

use crate::config::FileStorageConfig;
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::KeyValueStorage;

/// File-based storage implementation.
pub struct FileStorage {
    /// Base data directory.
    base_dir: PathBuf,
    /// Mutex for coordinating file operations within this process.
    lock: Mutex<()>,
}

impl FileStorage {
    /// Create a new file storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: &FileStorageConfig) -> StorageResult<Self> {
        let base_dir = config.data_dir.clone();

        std::fs::create_dir_all(&base_dir).map_err(|e| {
            StorageError::FileIO(format!(
                "Failed to create directory {}: {e}",
                base_dir.display()
            ))
        })?;

        Ok(Self {
            base_dir,
            lock: Mutex::new(()),
        })
    }

    /// Get the file path for a key.
    fn value_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", sanitize_name(key)))
    }

    /// Read a file under a shared lock.
    fn read_locked(path: &Path) -> StorageResult<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }

        let mut file = std::fs::File::open(path)?;
        file.lock_shared()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        let mut contents = String::new();
        let read = file.read_to_string(&mut contents);
        file.unlock()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;
        read?;

        Ok(Some(contents))
    }

    /// Replace a file's contents under an exclusive lock.
    fn write_locked(path: &Path, value: &str) -> StorageResult<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        file.lock_exclusive()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        // Truncate only once the lock is held so readers never see a partial file.
        let written = replace_contents(&mut file, value);
        file.unlock()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;
        written?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Self::read_locked(&self.value_path(key))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        Self::write_locked(&self.value_path(key), value)
    }

    async fn health_check(&self) -> StorageResult<()> {
        if !self.base_dir.exists() {
            return Err(StorageError::Unavailable);
        }

        // Try to create a test file
        let test_file = self.base_dir.join(".health_check");
        tokio::fs::write(&test_file, b"ok")
            .await
            .map_err(|e| StorageError::FileIO(format!("Health check failed: {e}")))?;
        tokio::fs::remove_file(&test_file)
            .await
            .map_err(|e| StorageError::FileIO(format!("Health check cleanup failed: {e}")))?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

fn replace_contents(file: &mut std::fs::File, value: &str) -> std::io::Result<()> {
    file.set_len(0)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

/// Sanitize a key for use as a filename.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = FileStorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
        };
        let storage = FileStorage::new(&config).unwrap();
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.health_check().await.is_ok());
        assert_eq!(storage.backend_name(), "file");
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.get("settings").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let (storage, temp) = create_test_storage();

        storage.set("settings", r#"{"a":"longer value"}"#).await.unwrap();
        storage.set("settings", "{}").await.unwrap();

        assert_eq!(storage.get("settings").await.unwrap().as_deref(), Some("{}"));
        assert!(temp.path().join("settings.json").exists());
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let config = FileStorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
        };

        FileStorage::new(&config)
            .unwrap()
            .set("history", "[]")
            .await
            .unwrap();

        let reopened = FileStorage::new(&config).unwrap();
        assert_eq!(reopened.get("history").await.unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("history"), "history");
        assert_eq!(sanitize_name("../etc/passwd"), "___etc_passwd");
    }
}
