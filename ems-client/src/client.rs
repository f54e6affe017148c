//! HTTP client wrapper
//!
//! An explicitly constructed client holding the base address, resolved once
//! at startup and injected into each resource service. Verb helpers build
//! `{base_url}{path}` URLs and surface non-2xx responses as
//! [`ClientError::Status`] with the status code and raw body.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the backend REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base address (trailing slash trimmed)
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The resolved base address
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(ClientError::Network)?;
        Self::handle_response(resp).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ClientError::Network)?;
        Self::handle_response(resp).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .http
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ClientError::Network)?;
        Self::handle_response(resp).await
    }

    /// DELETE; the backend answers with an empty body, so only the status
    /// is inspected
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let resp = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, path, "delete request failed");
            return Err(ClientError::Status { status, body });
        }
        Ok(())
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, "request failed");
            return Err(ClientError::Status { status, body });
        }

        resp.json().await.map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/employees"), "http://localhost:8080/api/employees");
    }
}
