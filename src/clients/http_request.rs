//! The request descriptor produced by the REST builders.
//!
//! [`SpRequest`] is a fully-formed description of one SharePoint call:
//! absolute URL, method, headers, and an optional JSON or raw-byte body.
//! Descriptors are constructed fresh per call and handed to
//! [`HttpClient`](crate::clients::HttpClient) for sending; nothing is
//! persisted between calls.

use std::collections::HashMap;
use std::fmt;

/// The verbose OData media type SharePoint's legacy surface expects.
pub const ODATA_VERBOSE: &str = "application/json;odata=verbose";

/// HTTP methods used against the SharePoint REST surface.
///
/// MERGE and DELETE item mutations are emulated as [`Post`](Self::Post)
/// carrying an `X-HTTP-Method` header; [`Delete`](Self::Delete) is used
/// natively only where SharePoint accepts it (attachment removal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reads.
    Get,
    /// HTTP POST method, also the carrier for emulated MERGE/DELETE.
    Post,
    /// Native HTTP DELETE method.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request body: wire JSON or raw bytes (attachment content).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// A JSON payload, serialized verbatim at send time.
    Json(serde_json::Value),
    /// Raw byte content, sent as `application/octet-stream`.
    Bytes(Vec<u8>),
}

/// A fully-formed SharePoint request descriptor.
///
/// Header keys are matched case-insensitively by HTTP itself; insertion
/// order is irrelevant, so a plain map suffices.
///
/// # Example
///
/// ```rust
/// use sharepoint_api::clients::{HttpMethod, SpRequest, ODATA_VERBOSE};
///
/// let request = SpRequest::new(
///     HttpMethod::Get,
///     "https://contoso.sharepoint.com/sites/dev/_api/web/currentuser",
/// )
/// .header("Accept", ODATA_VERBOSE);
///
/// assert_eq!(request.method, HttpMethod::Get);
/// assert!(request.body.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct SpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute request URL.
    pub url: String,
    /// Headers specific to this request, merged over the client defaults.
    pub headers: HashMap<String, String>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

impl SpRequest {
    /// Creates a new request descriptor with no headers and no body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Adds a header to this request.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets a JSON body and the verbose OData `Content-Type` header.
    #[must_use]
    pub fn json_body(mut self, body: serde_json::Value) -> Self {
        self.headers
            .insert("Content-Type".to_string(), ODATA_VERBOSE.to_string());
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Sets a raw byte body and the `application/octet-stream` header.
    #[must_use]
    pub fn bytes_body(mut self, content: Vec<u8>) -> Self {
        self.headers.insert(
            "Content-Type".to_string(),
            "application/octet-stream".to_string(),
        );
        self.body = Some(RequestBody::Bytes(content));
        self
    }
}
