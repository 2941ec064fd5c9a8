//! Storage trait definitions.
//!
//! These traits define the interface for storage backends, enabling swapping
//! between different implementations without changing business logic.

use async_trait::async_trait;

use crate::error::StorageResult;

/// Key under which the history log is persisted.
pub const HISTORY_KEY: &str = "history";

/// Key under which the settings snapshot is persisted.
pub const SETTINGS_KEY: &str = "settings";

/// String key-value persistence.
///
/// Values are opaque strings; callers own their encoding.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Check if the storage backend is healthy and reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Get the storage backend name.
    fn backend_name(&self) -> &'static str;
}
