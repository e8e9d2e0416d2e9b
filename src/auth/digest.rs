//! Form digest acquisition for mutating requests.
//!
//! SharePoint requires a short-lived anti-forgery token (the form digest) in
//! the `X-RequestDigest` header of every mutating request made without a
//! bearer token. The digest comes from the `/_api/contextinfo` endpoint and
//! is time-limited server-side, so it is fetched fresh for every mutating
//! call and never cached here.
//!
//! A page-hosted deployment can inject the digest value already present in
//! its hosting page as [`SharePointConfig::fallback_digest`]; it is used only
//! when the contextinfo call fails.
//!
//! [`SharePointConfig::fallback_digest`]: crate::config::SharePointConfigBuilder::fallback_digest

use thiserror::Error;

use crate::clients::{HttpClient, HttpError, HttpMethod, SpRequest, ODATA_VERBOSE};
use crate::config::SharePointConfig;

/// Errors raised while acquiring a form digest.
///
/// These are kept distinct from [`HttpError`] so callers can recognize an
/// authentication problem and re-authenticate instead of treating it as an
/// ordinary failed operation.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The contextinfo request itself failed and no fallback digest was configured.
    #[error("Form digest acquisition failed: {0}")]
    Request(#[from] HttpError),

    /// The contextinfo response was missing the digest value.
    #[error("Context info response did not contain a form digest value")]
    MissingDigestValue,
}

/// Acquires a form digest for one mutating request.
///
/// Posts to `{site}/_api/contextinfo` and extracts
/// `d.GetContextWebInformation.FormDigestValue`. When the call fails and a
/// fallback digest is configured, the fallback is returned with a warning;
/// otherwise the failure surfaces as [`AuthError`].
///
/// # Errors
///
/// Returns [`AuthError`] if the contextinfo call fails (with no fallback
/// configured) or the response lacks the digest field.
pub async fn acquire_form_digest(
    client: &HttpClient,
    config: &SharePointConfig,
) -> Result<String, AuthError> {
    match fetch_context_digest(client, config).await {
        Ok(digest) => Ok(digest),
        Err(error) => match config.fallback_digest() {
            Some(fallback) => {
                tracing::warn!("contextinfo request failed, using fallback digest: {error}");
                Ok(fallback.to_string())
            }
            None => Err(error),
        },
    }
}

async fn fetch_context_digest(
    client: &HttpClient,
    config: &SharePointConfig,
) -> Result<String, AuthError> {
    let url = format!("{}/_api/contextinfo", config.site_url());
    let request = SpRequest::new(HttpMethod::Post, url).header("Content-Type", ODATA_VERBOSE);

    let response = client.send(&request).await?;

    response
        .d()
        .and_then(|d| d.get("GetContextWebInformation"))
        .and_then(|info| info.get("FormDigestValue"))
        .and_then(serde_json::Value::as_str)
        .map(String::from)
        .ok_or(AuthError::MissingDigestValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::TransportFailure;

    #[test]
    fn test_auth_error_missing_digest_message() {
        let error = AuthError::MissingDigestValue;
        assert!(error.to_string().contains("form digest"));
    }

    #[test]
    fn test_auth_error_wraps_http_error() {
        let error = AuthError::from(HttpError::Response(TransportFailure {
            status: 401,
            message: "Unauthorized".to_string(),
        }));
        let message = error.to_string();
        assert!(message.contains("Form digest acquisition failed"));
        assert!(message.contains("401"));
    }

    #[test]
    fn test_auth_error_implements_std_error() {
        let error: &dyn std::error::Error = &AuthError::MissingDigestValue;
        let _ = error;
    }
}
