use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, HealthResponse},
    config,
};

/// Characters left untouched when an id is placed in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn send_raw(&self, builder: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());

        #[cfg(all(test, not(target_arch = "wasm32")))]
        {
            if let Some(responder) = mock::find_mock(request.url().as_str()) {
                let mocked = responder.respond(&request)?;
                return Ok(RawResponse {
                    status: mocked.status,
                    body: mocked.body,
                });
            }
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok(RawResponse { status, body })
    }

    pub(crate) async fn send_checked(
        &self,
        builder: RequestBuilder,
    ) -> Result<RawResponse, ApiError> {
        let raw = self.send_raw(builder).await?;
        if raw.is_success() {
            Ok(raw)
        } else {
            let error = ApiError::from_response(raw.status, &raw.body);
            log::warn!("API responded with {}: {}", raw.status, error);
            Err(error)
        }
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let raw = self.send_checked(builder).await?;
        serde_json::from_str(&raw.body)
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send_checked(builder).await.map(|_| ())
    }

    /// Probes `{origin}/health`, which lives beside the `/api` prefix.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let origin = base_url.strip_suffix("/api").unwrap_or(&base_url);
        self.send_json(self.http_client().get(format!("{}/health", origin)))
            .await
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock::{register_mock, MockResponse, TestResponder};
