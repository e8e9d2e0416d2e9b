//! HTTP transport for SharePoint REST communication.
//!
//! This module provides the [`HttpClient`] type that sends
//! [`SpRequest`](crate::clients::SpRequest) descriptors. It owns the
//! connection pool and the default headers; it performs no retries and no
//! caching, so every failed round-trip surfaces immediately to the caller.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, TransportFailure};
use crate::clients::http_request::{RequestBody, SpRequest, ODATA_VERBOSE};
use crate::clients::http_response::SpResponse;
use crate::config::SharePointConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for sending requests to the SharePoint REST API.
///
/// The client handles:
/// - Default headers (verbose `Accept`, User-Agent, optional
///   `Authorization: Bearer` and `Accept-Language`)
/// - Header merging (request headers win over defaults)
/// - JSON body parsing into [`SpResponse`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use sharepoint_api::clients::{HttpClient, HttpMethod, SpRequest};
///
/// let client = HttpClient::new(&config);
/// let request = SpRequest::new(HttpMethod::Get, url);
/// let response = client.send(&request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &SharePointConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}SharePoint REST Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), ODATA_VERBOSE.to_string());

        if let Some(language) = config.accept_language() {
            default_headers.insert("Accept-Language".to_string(), language.to_string());
        }

        if let Some(token) = config.access_token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the response regardless of status code.
    ///
    /// Callers that treat specific non-success statuses as signals (e.g. the
    /// attachment existence probe, where 404 means "does not exist") use this
    /// instead of [`send`](Self::send).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request never completes.
    pub async fn send_unchecked(&self, request: &SpRequest) -> Result<SpResponse, HttpError> {
        let mut builder = match request.method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(&request.url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(&request.url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(&request.url),
        };

        // Merge headers; request-specific values win over the defaults.
        let mut headers = self.default_headers.clone();
        for (key, value) in &request.headers {
            headers.insert(key.clone(), value.clone());
        }
        for (key, value) in &headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = &request.body {
            builder = match body {
                RequestBody::Json(value) => builder.body(value.to_string()),
                RequestBody::Bytes(content) => builder.body(content.clone()),
            };
        }

        tracing::debug!(method = %request.method, url = %request.url, "sending SharePoint request");

        let res = builder.send().await?;

        let status = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        Ok(SpResponse::new(status, res_headers, body))
    }

    /// Sends a request, treating any non-2xx status as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request never completes, or
    /// [`HttpError::Response`] carrying the status code and the server
    /// message extracted from the OData error envelope.
    pub async fn send(&self, request: &SpRequest) -> Result<SpResponse, HttpError> {
        let response = self.send_unchecked(request).await?;

        if response.is_success() {
            return Ok(response);
        }

        let message = response
            .error_message()
            .unwrap_or_else(|| response.body.to_string());

        tracing::warn!(
            status = response.status,
            url = %request.url,
            "SharePoint request failed: {message}"
        );

        Err(HttpError::Response(TransportFailure {
            status: response.status,
            message,
        }))
    }

    /// Flattens response headers into a lowercase-keyed map.
    fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
        let mut result = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.insert(key, value);
        }
        result
    }
}
