//! HTTP response types and OData verbose envelope access.
//!
//! SharePoint's legacy REST surface wraps every successful payload in a
//! top-level `d` object and every error in an `error.message.value` chain.
//! [`SpResponse`] keeps the parsed body as-is and offers accessors for both.

use std::collections::HashMap;

/// An HTTP response from the SharePoint REST API.
#[derive(Clone, Debug)]
pub struct SpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keys lowercased.
    pub headers: HashMap<String, String>,
    /// The parsed response body; `{}` when the body was empty or not JSON.
    pub body: serde_json::Value,
}

impl SpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, String>, body: serde_json::Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the OData `d` envelope, if present.
    #[must_use]
    pub fn d(&self) -> Option<&serde_json::Value> {
        self.body.get("d")
    }

    /// Returns the `d.results` collection, if present.
    #[must_use]
    pub fn results(&self) -> Option<&Vec<serde_json::Value>> {
        self.d()?.get("results")?.as_array()
    }

    /// Consumes the response and returns the `d` envelope.
    #[must_use]
    pub fn into_d(mut self) -> Option<serde_json::Value> {
        match self.body.get_mut("d") {
            Some(d) => Some(d.take()),
            None => None,
        }
    }

    /// Extracts the server error message from the OData error envelope.
    ///
    /// Checks the verbose shape (`error.message.value`), the nometadata
    /// shape (`odata.error.message.value`), and a plain string `error`
    /// field, in that order.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        for key in ["error", "odata.error"] {
            if let Some(error) = self.body.get(key) {
                if let Some(value) = error
                    .get("message")
                    .and_then(|m| m.get("value"))
                    .and_then(serde_json::Value::as_str)
                {
                    return Some(value.to_string());
                }
                if let Some(text) = error.as_str() {
                    return Some(text.to_string());
                }
            }
        }
        self.body
            .get("error_description")
            .and_then(serde_json::Value::as_str)
            .map(String::from)
    }
}
