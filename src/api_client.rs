use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Envelope the backend wraps list payloads in. A sibling `status` field is
/// present on the wire but callers only care about `data`.
#[derive(Debug, Deserialize)]
struct RecordsResponse {
    data: Vec<Value>,
}

/// Client for the local backend API.
///
/// Every public method is infallible: transport errors, non-success statuses
/// and undecodable bodies are logged and converted to a fallback value, so
/// callers only ever inspect the returned value. Log records and command
/// results are passed through as opaque JSON; their shape is owned by the
/// backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all log records, in the order the backend supplies them.
    ///
    /// On any failure this returns an empty vector, which a caller cannot
    /// tell apart from a backend that has no logs yet. The failure itself
    /// goes to the tracing channel.
    pub async fn get_logs(&self) -> Vec<Value> {
        match self.fetch_records("/api/logs").await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch logs");
                Vec::new()
            }
        }
    }

    /// Fetch recon scan results; same wrapper and fallback contract as logs.
    pub async fn get_scan_results(&self) -> Vec<Value> {
        match self.fetch_records("/api/scan_results").await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch scan results");
                Vec::new()
            }
        }
    }

    /// Submit a command string for execution and return the backend's JSON
    /// result unmodified. The command is forwarded verbatim; no validation
    /// happens on this side.
    ///
    /// On failure the result is synthesized locally as
    /// `{"status": "error", "message": ...}`, so the caller can always
    /// branch on `status`.
    pub async fn execute_command(&self, command: &str) -> Value {
        match self.post_command(command).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(command = %command, error = %e, "Failed to execute command");
                json!({ "status": "error", "message": e.to_string() })
            }
        }
    }

    /// Fetch the backend's system status snapshot. Failures synthesize the
    /// same `{"status": "error", ...}` object as command execution.
    pub async fn get_system_status(&self) -> Value {
        match self.fetch_json("/api/system/status").await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch system status");
                json!({ "status": "error", "message": e.to_string() })
            }
        }
    }

    async fn fetch_records(&self, path: &str) -> Result<Vec<Value>, ClientError> {
        let body = self.fetch_body(path).await?;
        let parsed: RecordsResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(parsed.data)
    }

    async fn fetch_json(&self, path: &str) -> Result<Value, ClientError> {
        let body = self.fetch_body(path).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn fetch_body(&self, path: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.text().await?)
    }

    async fn post_command(&self, command: &str) -> Result<Value, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/execute_command", self.base_url))
            .json(&json!({ "command": command }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
