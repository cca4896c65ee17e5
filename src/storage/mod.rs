// Key-value persistence for the handful of collections that survive a
// restart. Values are JSON documents; the store neither inspects nor
// validates them.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Key under which the pet collection is persisted.
pub const PETS_KEY: &str = "pets";

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn put(&self, key: &str, value: String) -> AppResult<()>;
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// File-backed store: one `<key>.json` document per key under the data
/// directory. Writes go through a temp file and rename, so a crash
/// mid-write never leaves a half-written document behind.
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir.into();

        fs::create_dir_all(&data_dir).map_err(|e| {
            AppError::Storage(format!("Failed to create data directory: {}", e))
        })?;

        info!("File store initialized at: {}", data_dir.display());
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!("No stored document for key '{}'", key);
            return Ok(None);
        }

        let value = fs::read_to_string(&path)
            .map_err(|e| AppError::Storage(format!("Failed to read '{}': {}", key, e)))?;
        Ok(Some(value))
    }

    async fn put(&self, key: &str, value: String) -> AppResult<()> {
        let path = self.path_for(key);
        let tmp_path = self.data_dir.join(format!("{}.json.tmp", key));

        fs::write(&tmp_path, value)
            .map_err(|e| AppError::Storage(format!("Failed to write '{}': {}", key, e)))?;
        fs::rename(&tmp_path, &path)
            .map_err(|e| AppError::Storage(format!("Failed to commit '{}': {}", key, e)))?;

        debug!("Persisted document for key '{}'", key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| AppError::Storage(format!("Failed to remove '{}': {}", key, e)))?;
        }
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> AppResult<()> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
