//! Settings persistence service.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::GeneratorConfig;
use crate::domain::{Settings, record};
use crate::error::{AppError, Result, StorageError};
use crate::storage::{KeyValueStorage, Persisted, SETTINGS_KEY};

/// Saved generator preferences.
pub struct SettingsStore {
    /// Storage backend.
    storage: Arc<dyn KeyValueStorage>,
    /// Last saved snapshot, if any.
    saved: Mutex<Option<Settings>>,
    /// Used when nothing has been saved.
    defaults: Settings,
    /// Accepted length range.
    min_length: usize,
    max_length: usize,
}

impl SettingsStore {
    /// Open the store, loading any saved snapshot.
    pub async fn open(storage: Arc<dyn KeyValueStorage>, config: &GeneratorConfig) -> Self {
        let store = Self {
            storage,
            saved: Mutex::new(None),
            defaults: Settings::defaults(config.default_length),
            min_length: config.min_length,
            max_length: config.max_length,
        };
        let loaded = store.load().await;
        *store.saved.lock().await = loaded;
        store
    }

    /// Read the saved snapshot from storage.
    ///
    /// Returns `None` if nothing is saved, or if what is saved is unreadable,
    /// malformed or has a length outside the configured bounds.
    pub async fn load(&self) -> Option<Settings> {
        let raw = match self.storage.get(SETTINGS_KEY).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Settings unreadable, using defaults");
                return None;
            }
        };

        let settings: Settings = match record::decode(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding persisted settings");
                return None;
            }
        };

        if let Err(e) = self.validate(&settings) {
            tracing::warn!(error = %e, "Discarding persisted settings");
            return None;
        }

        Some(settings)
    }

    /// Saved snapshot, or the built-in defaults.
    pub async fn current(&self) -> Settings {
        self.saved.lock().await.unwrap_or(self.defaults)
    }

    /// Whether a snapshot has been saved.
    pub async fn is_saved(&self) -> bool {
        self.saved.lock().await.is_some()
    }

    /// Replace the saved snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLength`] if the length is out of bounds.
    /// Storage failures are reported through [`Persisted::persist_error`].
    pub async fn save(&self, settings: Settings) -> Result<Persisted<Settings>> {
        self.validate(&settings)?;

        let mut guard = self.saved.lock().await;
        *guard = Some(settings);

        let write = match record::encode(&settings) {
            Ok(raw) => self.storage.set(SETTINGS_KEY, &raw).await,
            Err(e) => Err(StorageError::from(e)),
        };
        if let Err(e) = &write {
            metrics::counter!("passforge_persist_failures_total", "key" => SETTINGS_KEY)
                .increment(1);
            tracing::warn!(error = %e, "Settings not persisted");
        } else {
            tracing::info!(length = settings.length, "Settings saved");
        }

        Ok(Persisted::new(settings, write))
    }

    const fn validate(&self, settings: &Settings) -> Result<()> {
        if settings.length < self.min_length || settings.length > self.max_length {
            return Err(AppError::InvalidLength {
                length: settings.length,
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}
