//! Integration tests for the Passforge API.
//!
//! These tests spin up a real server instance and make HTTP requests to verify
//! the complete request/response cycle.

use std::net::SocketAddr;
use std::path::Path;

use metrics_exporter_prometheus::PrometheusBuilder;
use regex::Regex;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;

use passforge::api::{AppState, create_router};
use passforge::config::{
    AppConfig, FileStorageConfig, GeneratorConfig, ObservabilityConfig, ServerConfig,
    StorageBackend, StorageConfig,
};
use passforge::storage::create_storage;

// ============================================================================
// Test Harness
// ============================================================================

/// Test server instance.
struct TestServer {
    addr: SocketAddr,
    client: Client,
    _temp_dir: Option<TempDir>,
}

fn test_config(data_dir: &Path, generator: GeneratorConfig) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
        },
        storage: StorageConfig {
            backend: StorageBackend::File,
            file: FileStorageConfig {
                data_dir: data_dir.to_path_buf(),
            },
        },
        generator,
        observability: ObservabilityConfig {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            metrics_enabled: true,
        },
    }
}

impl TestServer {
    async fn new() -> Self {
        Self::with_generator(GeneratorConfig::default()).await
    }

    async fn with_generator(generator: GeneratorConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut server = Self::start(test_config(temp_dir.path(), generator)).await;
        server._temp_dir = Some(temp_dir);
        server
    }

    /// Start against an existing data directory, which the caller owns.
    async fn in_dir(data_dir: &Path) -> Self {
        Self::start(test_config(data_dir, GeneratorConfig::default())).await
    }

    async fn start(config: AppConfig) -> Self {
        let storage = create_storage(&config.storage)
            .await
            .expect("Failed to create storage");

        // Not installed globally so tests can run in parallel.
        let metrics = PrometheusBuilder::new().build_recorder().handle();

        let state = AppState::new(&config, storage, Some(metrics)).await;
        let app = create_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            addr,
            client: Client::new(),
            _temp_dir: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed")
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    async fn put<T: Serialize>(&self, path: &str, body: &T) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("Request failed")
    }

    async fn record(&self, password: &str) -> ApiResponse<HistoryData> {
        let response = self
            .post("/v1/history", &json!({ "password": password }))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.unwrap()
    }
}

/// API response structure.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    code: i32,
    message: String,
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    fn is_success(&self) -> bool {
        self.code == 0
    }
}

#[derive(Debug, Deserialize)]
struct StrengthData {
    level: u8,
    label: String,
    color: String,
}

#[derive(Debug, Deserialize)]
struct PasswordData {
    password: String,
    strength: StrengthData,
    classes: Vec<String>,
    defaulted: bool,
    alphabet_size: usize,
}

#[derive(Debug, Deserialize)]
struct EntryData {
    password: String,
    captured_at: String,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct HistoryData {
    entries: Vec<EntryData>,
    warning: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SettingsData {
    settings: Value,
    saved: bool,
}

// ============================================================================
// Health Endpoint Tests
// ============================================================================

#[derive(Debug, Deserialize)]
struct HealthData {
    status: String,
}

#[derive(Debug, Deserialize)]
struct ReadyData {
    ready: bool,
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::new().await;
    let response = server.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<HealthData> = response.json().await.unwrap();
    assert!(body.is_success());
    assert_eq!(body.data.unwrap().status, "healthy");
}

#[tokio::test]
async fn test_ready_endpoint() {
    let server = TestServer::new().await;
    let response = server.get("/ready").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<ReadyData> = response.json().await.unwrap();
    assert!(body.is_success());
    assert!(body.data.unwrap().ready);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let server = TestServer::new().await;
    let response = server.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Password Tests
// ============================================================================

#[tokio::test]
async fn test_generate_alphanumeric() {
    let server = TestServer::new().await;

    let response = server
        .post(
            "/v1/password",
            &json!({
                "length": 12,
                "uppercase": true,
                "lowercase": true,
                "digits": true,
                "symbols": false,
                "exclude_ambiguous": false
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<PasswordData> = response.json().await.unwrap();
    assert!(body.is_success());
    let data = body.data.unwrap();

    let pattern = Regex::new("^[A-Za-z0-9]{12}$").unwrap();
    assert!(pattern.is_match(&data.password), "{}", data.password);
    assert_eq!(data.alphabet_size, 62);
    assert!(!data.defaulted);
    assert_eq!(data.classes, vec!["uppercase", "lowercase", "digit"]);
    assert!(data.strength.level <= 4);
}

#[tokio::test]
async fn test_generate_without_body_uses_defaults() {
    let server = TestServer::new().await;

    let response = server.client.post(server.url("/v1/password")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<PasswordData> = response.json().await.unwrap();
    let data = body.data.unwrap();
    assert_eq!(data.password.chars().count(), 16);
    assert_eq!(data.classes.len(), 4);
}

#[tokio::test]
async fn test_generate_empty_selection_defaults() {
    let server = TestServer::new().await;

    let response = server
        .post(
            "/v1/password",
            &json!({
                "uppercase": false,
                "lowercase": false,
                "digits": false,
                "symbols": false
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = response.json::<ApiResponse<PasswordData>>().await.unwrap().data.unwrap();
    assert!(data.defaulted);
    assert_eq!(data.alphabet_size, 62);
}

#[tokio::test]
async fn test_generate_excludes_ambiguous() {
    let server = TestServer::new().await;

    let response = server
        .post("/v1/password", &json!({ "length": 128, "exclude_ambiguous": true }))
        .await;
    let data = response.json::<ApiResponse<PasswordData>>().await.unwrap().data.unwrap();
    assert!(!data.password.contains(['i', 'l', '1', 'L', 'o', '0', 'O']));
}

#[tokio::test]
async fn test_generate_invalid_length() {
    let server = TestServer::new().await;

    let response = server.post("/v1/password", &json!({ "length": 500 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ApiResponse<Value> = response.json().await.unwrap();
    assert_eq!(body.code, 3002);
    assert!(body.message.contains("between 4 and 128"));
    assert!(body.data.is_none());
}

#[tokio::test]
async fn test_generate_empty_alphabet() {
    let server = TestServer::with_generator(GeneratorConfig {
        symbols: "0O".to_string(),
        ..Default::default()
    })
    .await;

    let response = server
        .post(
            "/v1/password",
            &json!({
                "uppercase": false,
                "lowercase": false,
                "digits": false,
                "symbols": true,
                "exclude_ambiguous": true
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: ApiResponse<Value> = response.json().await.unwrap();
    assert_eq!(body.code, 1001);
}

#[tokio::test]
async fn test_strength_endpoint() {
    let server = TestServer::new().await;

    let response = server
        .post("/v1/strength", &json!({ "password": "K7dpLQ93vxTz" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = response.json::<ApiResponse<StrengthData>>().await.unwrap().data.unwrap();
    assert_eq!(data.level, 4);
    assert_eq!(data.label, "Very Strong");
    assert_eq!(data.color, "#27ae60");

    let response = server.post("/v1/strength", &json!({ "password": "" })).await;
    let data = response.json::<ApiResponse<StrengthData>>().await.unwrap().data.unwrap();
    assert_eq!(data.level, 0);
    assert_eq!(data.label, "-");
}

// ============================================================================
// History Tests
// ============================================================================

#[tokio::test]
async fn test_history_starts_empty() {
    let server = TestServer::new().await;

    let response = server.get("/v1/history").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = response.json::<ApiResponse<HistoryData>>().await.unwrap().data.unwrap();
    assert!(data.entries.is_empty());
}

#[tokio::test]
async fn test_history_deduplicates() {
    let server = TestServer::new().await;

    server.record("Abc123!").await;
    server.record("Other99?").await;
    let data = server.record("Abc123!").await.data.unwrap();

    assert_eq!(data.entries.len(), 2);
    assert_eq!(data.entries[0].password, "Abc123!");
    assert_eq!(data.entries[1].password, "Other99?");
    let newest = chrono::DateTime::parse_from_rfc3339(&data.entries[0].captured_at).unwrap();
    let older = chrono::DateTime::parse_from_rfc3339(&data.entries[1].captured_at).unwrap();
    assert!(newest >= older);
    assert!(!data.entries[0].timestamp.is_empty());
    assert!(data.warning.is_none());
}

#[tokio::test]
async fn test_history_capped_at_ten() {
    let server = TestServer::new().await;

    for i in 0..15 {
        server.record(&format!("password-{i}")).await;
    }

    let response = server.get("/v1/history").await;
    let data = response.json::<ApiResponse<HistoryData>>().await.unwrap().data.unwrap();
    let passwords: Vec<_> = data.entries.iter().map(|e| e.password.as_str()).collect();
    let expected: Vec<_> = (5..15).rev().map(|i| format!("password-{i}")).collect();
    assert_eq!(passwords, expected);
}

#[tokio::test]
async fn test_history_rejects_empty_password() {
    let server = TestServer::new().await;

    let response = server.post("/v1/history", &json!({ "password": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ApiResponse<Value> = response.json().await.unwrap();
    assert_eq!(body.code, 3003);
}

#[tokio::test]
async fn test_history_clear() {
    let server = TestServer::new().await;
    server.record("Abc123!").await;

    let response = server.delete("/v1/history").await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = response.json::<ApiResponse<HistoryData>>().await.unwrap().data.unwrap();
    assert!(data.entries.is_empty());

    let response = server.get("/v1/history").await;
    let data = response.json::<ApiResponse<HistoryData>>().await.unwrap().data.unwrap();
    assert!(data.entries.is_empty());
}

// ============================================================================
// Settings Tests
// ============================================================================

#[tokio::test]
async fn test_settings_default() {
    let server = TestServer::new().await;

    let response = server.get("/v1/settings").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = response.json::<ApiResponse<SettingsData>>().await.unwrap().data.unwrap();
    assert!(!data.saved);
    assert_eq!(data.settings["length"], 16);
    assert_eq!(data.settings["symbols"], true);
    assert_eq!(data.settings["exclude_ambiguous"], false);
}

#[tokio::test]
async fn test_settings_save_drives_generation() {
    let server = TestServer::new().await;

    let settings = json!({
        "length": 20,
        "uppercase": false,
        "lowercase": false,
        "digits": true,
        "symbols": false,
        "exclude_ambiguous": false
    });
    let response = server.put("/v1/settings", &settings).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = response.json::<ApiResponse<SettingsData>>().await.unwrap().data.unwrap();
    assert!(data.saved);
    assert_eq!(data.settings, settings);

    let response = server.post("/v1/password", &json!({})).await;
    let data = response.json::<ApiResponse<PasswordData>>().await.unwrap().data.unwrap();
    let pattern = Regex::new("^[0-9]{20}$").unwrap();
    assert!(pattern.is_match(&data.password), "{}", data.password);
}

#[tokio::test]
async fn test_settings_invalid_length() {
    let server = TestServer::new().await;

    let response = server
        .put(
            "/v1/settings",
            &json!({
                "length": 2,
                "uppercase": true,
                "lowercase": true,
                "digits": true,
                "symbols": true,
                "exclude_ambiguous": false
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = server.get("/v1/settings").await;
    let data = response.json::<ApiResponse<SettingsData>>().await.unwrap().data.unwrap();
    assert!(!data.saved);
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_state_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let server = TestServer::in_dir(temp_dir.path()).await;
        server.record("Abc123!").await;
        server
            .put(
                "/v1/settings",
                &json!({
                    "length": 24,
                    "uppercase": true,
                    "lowercase": true,
                    "digits": true,
                    "symbols": false,
                    "exclude_ambiguous": true
                }),
            )
            .await;
    }

    let server = TestServer::in_dir(temp_dir.path()).await;

    let response = server.get("/v1/history").await;
    let data = response.json::<ApiResponse<HistoryData>>().await.unwrap().data.unwrap();
    assert_eq!(data.entries.len(), 1);
    assert_eq!(data.entries[0].password, "Abc123!");

    let response = server.get("/v1/settings").await;
    let data = response.json::<ApiResponse<SettingsData>>().await.unwrap().data.unwrap();
    assert!(data.saved);
    assert_eq!(data.settings["length"], 24);
    assert_eq!(data.settings["exclude_ambiguous"], true);
}

#[tokio::test]
async fn test_malformed_state_degrades_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("history.json"), "not json").unwrap();
    std::fs::write(
        temp_dir.path().join("settings.json"),
        r#"{"version":99,"data":{}}"#,
    )
    .unwrap();

    let server = TestServer::in_dir(temp_dir.path()).await;

    let response = server.get("/v1/history").await;
    let data = response.json::<ApiResponse<HistoryData>>().await.unwrap().data.unwrap();
    assert!(data.entries.is_empty());

    let response = server.get("/v1/settings").await;
    let data = response.json::<ApiResponse<SettingsData>>().await.unwrap().data.unwrap();
    assert!(!data.saved);
}
