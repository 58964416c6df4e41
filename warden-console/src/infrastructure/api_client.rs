use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::infrastructure::repository::RepositoryError;

/// JSON-over-HTTP client for the user backend
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client. `timeout` bounds each request end to end.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("[ApiClient] Creating new API client with base URL: {}", base_url);

        Ok(Self { client, base_url })
    }

    /// Build an absolute URL from a route path
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    /// URL of one record under `collection`. The id is percent-encoded as a
    /// single path segment, so reserved characters stay part of the id.
    pub fn item_url(&self, collection: &str, id: &str) -> Result<String> {
        let mut url = Url::parse(&self.build_url(collection))
            .with_context(|| format!("Invalid collection URL for {collection}"))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Base URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .push(id);
        Ok(url.into())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!("[ApiClient] GET {}", url);
        self.execute_request(self.client.get(url)).await
    }

    /// POST a JSON body. `None` when the backend answers without a body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path);
        debug!("[ApiClient] POST {}", url);
        self.execute_optional(self.client.post(url).json(body)).await
    }

    /// PUT a JSON body. `None` when the backend answers without a body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path);
        debug!("[ApiClient] PUT {}", url);
        self.execute_optional(self.client.put(url).json(body)).await
    }

    /// DELETE a resource. Whatever body the backend sends back is ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        debug!("[ApiClient] DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Execute a request and decode a JSON body from any 2xx response
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await?;
        let response = Self::check_status(response).await?;
        let data = response
            .json::<T>()
            .await
            .context("Failed to decode response body")?;
        Ok(data)
    }

    /// Like [`Self::execute_request`], but a 204 or an empty body is `None`
    async fn execute_optional<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>> {
        let response = request.send().await?;
        let response = Self::check_status(response).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let bytes = response
            .bytes()
            .await
            .context("Failed to read response body")?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let data = serde_json::from_slice(&bytes)
            .context("Failed to decode response body")?;
        Ok(Some(data))
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(RepositoryError::RequestFailed {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}
