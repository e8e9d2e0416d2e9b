//! HTTP transport for the SharePoint REST client.
//!
//! This module provides the generic send capability consumed by the REST
//! builders in [`crate::rest`]:
//!
//! - [`SpRequest`]: a fully-formed request descriptor (URL, method, headers, body)
//! - [`SpResponse`]: a parsed response with OData verbose envelope accessors
//! - [`HttpClient`]: the reqwest-backed transport with default-header handling
//! - [`TransportFailure`] / [`HttpError`]: transport-level error types
//!
//! The transport performs no retries, no caching, and no connection-lifecycle
//! management beyond what reqwest's pool provides.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, TransportFailure};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, RequestBody, SpRequest, ODATA_VERBOSE};
pub use http_response::SpResponse;
