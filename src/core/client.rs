use crate::config::ClientConfig;
use crate::core::{ClassDirectory, ClassId, ClassRecord};
use crate::utils::error::{DirectoryError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

const CLASSES_PATH: &str = "/admin/Admins/classes";

/// HTTP client for the admin class directory.
///
/// Every call is a single GET with no shared mutable state, so one instance
/// can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct ClassDirectoryClient {
    base_url: String,
    client: Client,
}

impl ClassDirectoryClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Use a preconfigured transport, e.g. one with timeouts set.
    pub fn with_http_client(config: ClientConfig, client: Client) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_for_all(&self) -> String {
        format!("{}{}", self.base_url, CLASSES_PATH)
    }

    pub fn endpoint_for(&self, id: &ClassId) -> String {
        format!("{}{}/{}", self.base_url, CLASSES_PATH, id)
    }

    pub async fn fetch_all(&self) -> Result<ClassRecord> {
        let operation = "fetch_all";
        let result = self.get_json(operation, &self.endpoint_for_all()).await;
        if let Err(e) = &result {
            log_failure(operation, e);
        }
        result
    }

    pub async fn fetch_by_id(&self, id: &ClassId) -> Result<ClassRecord> {
        let operation = "fetch_by_id";
        let result = self.get_json(operation, &self.endpoint_for(id)).await;
        if let Err(e) = &result {
            log_failure(operation, e);
        }
        result
    }

    async fn get_json(&self, operation: &'static str, url: &str) -> Result<ClassRecord> {
        tracing::debug!("📡 {}: GET {}", operation, url);

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| DirectoryError::Transport { operation, source })?;

        let status = response.status();
        tracing::debug!("📡 {}: API response status: {}", operation, status);

        if !status.is_success() {
            return Err(DirectoryError::HttpStatus {
                operation,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| DirectoryError::Transport { operation, source })?;

        serde_json::from_slice(&body).map_err(|source| DirectoryError::Decode { operation, source })
    }
}

/// Emits the single error event for a failed call.
fn log_failure(operation: &str, error: &DirectoryError) {
    tracing::error!(
        operation,
        category = ?error.category(),
        status = error.status(),
        "❌ {}: {}",
        operation,
        error
    );
}

#[async_trait::async_trait]
impl ClassDirectory for ClassDirectoryClient {
    async fn fetch_all(&self) -> Result<ClassRecord> {
        ClassDirectoryClient::fetch_all(self).await
    }

    async fn fetch_by_id(&self, id: &ClassId) -> Result<ClassRecord> {
        ClassDirectoryClient::fetch_by_id(self, id).await
    }
}
