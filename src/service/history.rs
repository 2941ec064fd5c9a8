//! Password history service.
//!
//! Keeps the history log in memory for the session and writes the whole log
//! back to storage after every change.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::{HistoryLog, record};
use crate::error::{AppError, Result, StorageError};
use crate::storage::{HISTORY_KEY, KeyValueStorage, Persisted};

/// Bounded, deduplicated, most-recent-first password history.
pub struct HistoryStore {
    /// Storage backend.
    storage: Arc<dyn KeyValueStorage>,
    /// In-memory log; the lock also serializes load-modify-persist.
    log: Mutex<HistoryLog>,
    /// Maximum number of entries.
    capacity: usize,
}

impl HistoryStore {
    /// Open the store, loading whatever was persisted.
    pub async fn open(storage: Arc<dyn KeyValueStorage>, capacity: usize) -> Self {
        let store = Self {
            storage,
            log: Mutex::new(HistoryLog::new()),
            capacity,
        };
        store.load().await;
        store
    }

    /// Reload the log from storage.
    ///
    /// Missing, unreadable or malformed state yields an empty log; this never
    /// fails.
    pub async fn load(&self) -> HistoryLog {
        let mut guard = self.log.lock().await;
        let mut loaded = self.read_persisted().await;
        loaded.truncate(self.capacity);
        (*guard).clone_from(&loaded);
        loaded
    }

    /// Current in-memory log.
    pub async fn snapshot(&self) -> HistoryLog {
        self.log.lock().await.clone()
    }

    /// Record `password` as the most recent entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NothingToCopy`] for an empty password. Storage
    /// failures are reported through [`Persisted::persist_error`].
    pub async fn record(&self, password: &str) -> Result<Persisted<HistoryLog>> {
        if password.is_empty() {
            return Err(AppError::NothingToCopy);
        }

        let mut guard = self.log.lock().await;
        guard.push(password, Utc::now(), self.capacity);
        let write = self.persist(&guard).await;

        metrics::counter!("passforge_history_records_total").increment(1);
        tracing::debug!(entries = guard.len(), "History updated");

        Ok(Persisted::new(guard.clone(), write))
    }

    /// Remove every entry.
    pub async fn clear(&self) -> Persisted<HistoryLog> {
        let mut guard = self.log.lock().await;
        *guard = HistoryLog::new();
        let write = self.persist(&guard).await;
        Persisted::new(guard.clone(), write)
    }

    async fn read_persisted(&self) -> HistoryLog {
        let raw = match self.storage.get(HISTORY_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return HistoryLog::new(),
            Err(e) => {
                tracing::warn!(error = %e, "History unreadable, starting empty");
                return HistoryLog::new();
            }
        };

        match record::decode::<HistoryLog>(&raw) {
            Ok(log) if log.has_duplicates() => {
                tracing::warn!("Discarding persisted history with repeated passwords");
                HistoryLog::new()
            }
            Ok(log) => log,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding persisted history");
                HistoryLog::new()
            }
        }
    }

    async fn persist(&self, log: &HistoryLog) -> std::result::Result<(), StorageError> {
        let write = match record::encode(log) {
            Ok(raw) => self.storage.set(HISTORY_KEY, &raw).await,
            Err(e) => Err(StorageError::from(e)),
        };

        if let Err(e) = &write {
            metrics::counter!("passforge_persist_failures_total", "key" => HISTORY_KEY)
                .increment(1);
            tracing::warn!(error = %e, "History not persisted");
        }
        write
    }
}
