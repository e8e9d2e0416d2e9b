//! HTTP-specific error types.
//!
//! The client distinguishes two transport-level failure scenarios:
//!
//! - [`TransportFailure`]: the server answered with a non-success status;
//!   carries the status code and the message extracted from the OData error
//!   envelope when one is present
//! - [`HttpError::Network`]: the request never completed (DNS, TLS,
//!   connection reset)
//!
//! Neither is retried internally; both surface immediately to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.send(&request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("SharePoint error {}: {}", e.status, e.message);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The message is extracted from the OData verbose error envelope
/// (`error.message.value`) when the body carries one, and falls back to the
/// raw body text otherwise.
///
/// # Example
///
/// ```rust
/// use sharepoint_api::clients::TransportFailure;
///
/// let error = TransportFailure {
///     status: 404,
///     message: "List 'Missing' does not exist at site with URL ...".to_string(),
/// };
///
/// println!("{error}");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("SharePoint request failed with status {status}: {message}")]
pub struct TransportFailure {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Server error message, from the OData error envelope when present.
    pub message: String,
}

/// Unified error type for transport operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-success HTTP response.
    #[error(transparent)]
    Response(#[from] TransportFailure),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
