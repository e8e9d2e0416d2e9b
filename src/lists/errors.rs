//! Unified error type for list operations.

use thiserror::Error;

use crate::auth::AuthError;
use crate::clients::HttpError;
use crate::rest::RestError;

/// Errors returned by [`ListClient`](crate::lists::ListClient) operations.
///
/// The three sources stay distinguishable so callers can react differently:
/// a [`Rest`](Self::Rest) error means the call was malformed locally and
/// never hit the network, an [`Auth`](Self::Auth) error calls for
/// re-authentication, and an [`Http`](Self::Http) error is the server's
/// verdict on an otherwise well-formed request.
#[derive(Debug, Error)]
pub enum ListError {
    /// Request construction failed before any network call.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// The transport failed or the server returned a non-success status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Form digest acquisition failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::TransportFailure;

    #[test]
    fn test_rest_error_converts_transparently() {
        let error = ListError::from(RestError::ListNotSet);
        assert!(error.to_string().contains("No list is set"));
    }

    #[test]
    fn test_http_error_keeps_status() {
        let error = ListError::from(HttpError::Response(TransportFailure {
            status: 404,
            message: "List does not exist".to_string(),
        }));
        assert!(matches!(error, ListError::Http(_)));
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_auth_error_stays_distinguishable() {
        let error = ListError::from(AuthError::MissingDigestValue);
        assert!(matches!(error, ListError::Auth(_)));
    }
}
