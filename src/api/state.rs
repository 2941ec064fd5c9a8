//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::{HistoryStore, PasswordService, SettingsStore};
use crate::storage::KeyValueStorage;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend.
    pub storage: Arc<dyn KeyValueStorage>,
    /// Password generation service.
    pub passwords: Arc<PasswordService>,
    /// Password history.
    pub history: Arc<HistoryStore>,
    /// Saved settings.
    pub settings: Arc<SettingsStore>,
    /// Prometheus handle, when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state, loading history and settings.
    pub async fn new(
        config: &AppConfig,
        storage: Arc<dyn KeyValueStorage>,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        let passwords = Arc::new(PasswordService::new(&config.generator));

        let history = Arc::new(
            HistoryStore::open(Arc::clone(&storage), config.generator.history_capacity).await,
        );

        let settings = Arc::new(SettingsStore::open(Arc::clone(&storage), &config.generator).await);

        Self {
            storage,
            passwords,
            history,
            settings,
            metrics,
        }
    }
}
