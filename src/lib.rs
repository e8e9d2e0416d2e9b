//! # SharePoint REST API client
//!
//! A Rust client for the SharePoint REST API, shaped around SharePoint's
//! legacy OData verbose conventions: URL construction for list operations,
//! authentication headers (bearer token or form digest), JSON payload
//! serialization, and response envelope parsing.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SharePointConfig`] and [`SharePointConfigBuilder`]
//! - Validated newtypes for the site URL and bearer token
//! - Pure request construction via [`rest::ListRequestBuilder`] — every URL,
//!   header, and body shape is testable without a server
//! - An async [`ListClient`] for item CRUD, OData queries, metadata reads,
//!   and attachment handling
//! - Form digest acquisition with an injectable fallback for page-hosted
//!   deployments
//!
//! ## Quick Start
//!
//! ```rust
//! use sharepoint_api::{SharePointConfig, SiteUrl, AccessToken};
//!
//! let config = SharePointConfig::builder()
//!     .site_url(SiteUrl::new("https://contoso.sharepoint.com/sites/dev").unwrap())
//!     .default_list("Tasks")
//!     .access_token(AccessToken::new("your-bearer-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working with items
//!
//! ```rust,ignore
//! use sharepoint_api::{ItemQuery, ListClient};
//! use serde_json::json;
//!
//! let client = ListClient::new(config);
//!
//! // Read items with OData query options
//! let items = client
//!     .get_items(&ItemQuery::new().select("Id,Title").top(10), None)
//!     .await?;
//!
//! // Create an item (entity type and default Title are injected)
//! let mut fields = serde_json::Map::new();
//! fields.insert("Title".to_string(), json!("New task"));
//! let created = client.add_item(fields, None).await?;
//!
//! // Update, delete, or upsert by Id
//! client.update_item(7, fields, None).await?;
//! client.delete_item(7, None).await?;
//!
//! // Target another list without mutating the client
//! let other = client.with_list("Projects");
//! ```
//!
//! ## Attachments
//!
//! ```rust,ignore
//! use sharepoint_api::AttachmentOutcome;
//!
//! match client.add_attachment(7, "report.pdf", bytes, false, None).await? {
//!     AttachmentOutcome::Uploaded(d) => println!("uploaded: {d}"),
//!     AttachmentOutcome::SkippedExisting => println!("already there, left as-is"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No hidden mutable state**: the default list is immutable
//!   configuration; per-call overrides and [`ListClient::with_list`] replace
//!   the mutable "current list" pattern
//! - **Fail-fast validation**: newtypes validate on construction; list
//!   operations fail before any network call when no list is set
//! - **Thread-safe**: all types are `Send + Sync`
//! - **No internal retries**: a failed round-trip surfaces immediately
//!
//! ## Known limitations
//!
//! List, field, and file names are interpolated into single-quoted OData
//! literals without escaping; names containing a single-quote character are
//! not supported.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod lists;
pub mod rest;
pub mod utils;

// Re-export public types at crate root for convenience
pub use auth::AuthError;
pub use config::{AccessToken, SharePointConfig, SharePointConfigBuilder, SiteUrl};
pub use error::ConfigError;
pub use lists::{AttachmentOutcome, ListClient, ListError};
pub use rest::{encode_entity_type, ItemQuery, ListRequestBuilder, RestError};

// Re-export HTTP transport types
pub use clients::{
    HttpClient, HttpError, HttpMethod, RequestBody, SpRequest, SpResponse, TransportFailure,
};
