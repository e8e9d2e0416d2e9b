//! The high-level async client for SharePoint list operations.
//!
//! [`ListClient`] ties together the immutable configuration, the pure
//! request builders from [`crate::rest`], form-digest acquisition from
//! [`crate::auth`], and the transport from [`crate::clients`]. Every
//! operation is one awaited round-trip (attachment upload: up to three,
//! strictly sequential); nothing is retried and nothing is cached except
//! the default list's entity-type encoding.
//!
//! # List targeting
//!
//! Operations take an explicit `Option<&str>` list override resolved
//! against the configured default. The client itself is immutable; use
//! [`ListClient::with_list`] to derive a client bound to a different list.
//!
//! # Example
//!
//! ```rust,ignore
//! use sharepoint_api::{ItemQuery, ListClient, SharePointConfig, SiteUrl};
//! use serde_json::json;
//!
//! let config = SharePointConfig::builder()
//!     .site_url(SiteUrl::new("https://contoso.sharepoint.com/sites/dev")?)
//!     .default_list("Tasks")
//!     .build()?;
//! let client = ListClient::new(config);
//!
//! let items = client
//!     .get_items(&ItemQuery::new().select("Id,Title").top(10), None)
//!     .await?;
//!
//! let mut fields = serde_json::Map::new();
//! fields.insert("Title".to_string(), json!("New task"));
//! let created = client.add_item(fields, None).await?;
//! ```

mod attachments;
mod errors;

pub use attachments::AttachmentOutcome;
pub use errors::ListError;

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::auth::acquire_form_digest;
use crate::clients::{HttpClient, HttpMethod, SpRequest, SpResponse};
use crate::config::SharePointConfig;
use crate::rest::{ItemQuery, ListRequestBuilder};

/// Async client for SharePoint list operations.
///
/// # Thread Safety
///
/// `ListClient` holds no mutable state and is `Send + Sync`; a single
/// instance can be shared freely across tasks.
#[derive(Debug)]
pub struct ListClient {
    config: SharePointConfig,
    http: HttpClient,
    builder: ListRequestBuilder,
}

// Verify ListClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ListClient>();
};

impl ListClient {
    /// Creates a client from a configuration.
    ///
    /// The entity type for the configured default list is encoded once
    /// here and reused by every mutation targeting the default.
    #[must_use]
    pub fn new(config: SharePointConfig) -> Self {
        let http = HttpClient::new(&config);
        let builder = ListRequestBuilder::new(
            config.site_url().clone(),
            config.default_list().map(String::from),
        );
        Self {
            config,
            http,
            builder,
        }
    }

    /// Derives a new client bound to a different default list.
    ///
    /// Site, authentication, and header settings are shared; only the list
    /// binding (and its cached entity type) changes.
    #[must_use]
    pub fn with_list(&self, list: impl Into<String>) -> Self {
        Self {
            config: self.config.clone(),
            http: HttpClient::new(&self.config),
            builder: self.builder.with_list(list),
        }
    }

    /// Returns the underlying request builder.
    #[must_use]
    pub const fn request_builder(&self) -> &ListRequestBuilder {
        &self.builder
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &SharePointConfig {
        &self.config
    }

    /// Fetches a fresh form digest value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Auth`] if acquisition fails and no fallback
    /// digest is configured.
    pub async fn get_form_digest_value(&self) -> Result<String, ListError> {
        Ok(acquire_form_digest(&self.http, &self.config).await?)
    }

    /// Sends a mutating request, attaching a fresh digest when running
    /// without a bearer token. Digests are never reused across calls.
    pub(crate) async fn send_mutating(
        &self,
        mut request: SpRequest,
    ) -> Result<SpResponse, ListError> {
        if self.config.access_token().is_none() {
            let digest = acquire_form_digest(&self.http, &self.config).await?;
            request
                .headers
                .insert("X-RequestDigest".to_string(), digest);
        }
        Ok(self.http.send(&request).await?)
    }

    pub(crate) const fn http(&self) -> &HttpClient {
        &self.http
    }

    // ------------------------------------------------------------------
    // Item CRUD
    // ------------------------------------------------------------------

    /// Creates a list item and returns the created item's `d` payload.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves, digest acquisition
    /// fails, or the server rejects the request.
    pub async fn add_item(
        &self,
        fields: Map<String, Value>,
        list: Option<&str>,
    ) -> Result<Value, ListError> {
        let request = self.builder.create_item(list, fields)?;
        let response = self.send_mutating(request).await?;
        Ok(response.into_d().unwrap_or(Value::Null))
    }

    /// Updates a list item via an emulated MERGE.
    ///
    /// SharePoint answers a successful MERGE with an empty 204, so success
    /// carries no payload.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves, digest acquisition
    /// fails, or the server rejects the request (including nonexistent
    /// ids, which are not validated client-side).
    pub async fn update_item(
        &self,
        id: u32,
        fields: Map<String, Value>,
        list: Option<&str>,
    ) -> Result<(), ListError> {
        let request = self.builder.update_item(list, id, fields)?;
        self.send_mutating(request).await?;
        Ok(())
    }

    /// Deletes a list item via an emulated DELETE.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves, digest acquisition
    /// fails, or the server rejects the request.
    pub async fn delete_item(&self, id: u32, list: Option<&str>) -> Result<(), ListError> {
        let request = self.builder.delete_item(list, id)?;
        self.send_mutating(request).await?;
        Ok(())
    }

    /// Creates or updates depending on the record's `Id` field.
    ///
    /// A record carrying a usable `Id` becomes an update targeting that id
    /// (with `Id` stripped from the body); otherwise a create. Returns the
    /// created item's `d` payload, or `Value::Null` for the update path.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves, digest acquisition
    /// fails, or the server rejects the request.
    pub async fn upsert_item(
        &self,
        fields: Map<String, Value>,
        list: Option<&str>,
    ) -> Result<Value, ListError> {
        let request = self.builder.upsert_item(list, fields)?;
        let response = self.send_mutating(request).await?;
        Ok(response.into_d().unwrap_or(Value::Null))
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Fetches the items collection, returning the OData `d` envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves or the request fails.
    pub async fn get_items(
        &self,
        query: &ItemQuery,
        list: Option<&str>,
    ) -> Result<Value, ListError> {
        let request = self.builder.get_items(list, query)?;
        let response = self.http.send(&request).await?;
        Ok(response.into_d().unwrap_or(Value::Null))
    }

    /// Fetches a single item by id, returning its `d` payload.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves or the request fails.
    pub async fn get_item_by_id(&self, id: u32, list: Option<&str>) -> Result<Value, ListError> {
        let request = self.builder.get_item_by_id(list, id)?;
        let response = self.http.send(&request).await?;
        Ok(response.into_d().unwrap_or(Value::Null))
    }

    /// Fetches items matching an OData `$filter`, returning `d.results`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves or the request fails.
    pub async fn search_items(
        &self,
        filter: &str,
        list: Option<&str>,
    ) -> Result<Vec<Value>, ListError> {
        let request = self.builder.search_items(list, filter)?;
        let response = self.http.send(&request).await?;
        Ok(response.results().cloned().unwrap_or_default())
    }

    /// Fetches the list's field metadata, returning `d.results`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves or the request fails.
    pub async fn get_list_metadata(&self, list: Option<&str>) -> Result<Vec<Value>, ListError> {
        let request = self.builder.list_fields(list)?;
        let response = self.http.send(&request).await?;
        Ok(response.results().cloned().unwrap_or_default())
    }

    /// Fetches a single field's metadata by display name.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves or the request fails.
    pub async fn get_field_metadata_by_name(
        &self,
        field: &str,
        list: Option<&str>,
    ) -> Result<Value, ListError> {
        let request = self.builder.field_by_title(list, field)?;
        let response = self.http.send(&request).await?;
        Ok(response.into_d().unwrap_or(Value::Null))
    }

    /// Fetches the current user's information.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when the request fails.
    pub async fn get_user_info(&self) -> Result<Value, ListError> {
        let response = self.http.send(&self.builder.current_user()).await?;
        Ok(response.into_d().unwrap_or(Value::Null))
    }

    /// Fetches the site's web information.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when the request fails.
    pub async fn get_site_info(&self) -> Result<Value, ListError> {
        let response = self.http.send(&self.builder.site_info()).await?;
        Ok(response.into_d().unwrap_or(Value::Null))
    }

    /// Sends an arbitrary `_api/` request.
    ///
    /// Caller headers are merged over the client defaults; the full
    /// response body is returned unparsed beyond JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when the request fails.
    pub async fn any_request(
        &self,
        api: &str,
        method: HttpMethod,
        body: Option<Value>,
        headers: HashMap<String, String>,
    ) -> Result<Value, ListError> {
        let mut request = SpRequest::new(method, self.builder.api_url(api));
        if let Some(body) = body {
            request = request.json_body(body);
        }
        for (key, value) in headers {
            request = request.header(key, value);
        }
        let response = self.http.send(&request).await?;
        Ok(response.body)
    }
}
