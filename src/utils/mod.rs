//! Helpers for preparing attachment content.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Error decoding base64 attachment content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid base64 content: {0}")]
pub struct ContentDecodeError(#[from] base64::DecodeError);

/// Decodes base64 content into raw bytes for an attachment body.
///
/// Accepts both bare base64 and data URLs
/// (`data:image/jpeg;base64,...`) — anything before the first comma is
/// treated as the data-URL prefix and discarded.
///
/// # Errors
///
/// Returns [`ContentDecodeError`] if the payload is not valid base64.
///
/// # Example
///
/// ```rust
/// use sharepoint_api::utils::decode_base64_content;
///
/// let bytes = decode_base64_content("data:text/plain;base64,aGVsbG8=").unwrap();
/// assert_eq!(bytes, b"hello");
/// ```
pub fn decode_base64_content(data: &str) -> Result<Vec<u8>, ContentDecodeError> {
    let payload = data.split_once(',').map_or(data, |(_, payload)| payload);
    Ok(STANDARD.decode(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_bare_base64() {
        assert_eq!(decode_base64_content("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn test_decodes_data_url() {
        let bytes = decode_base64_content("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_rejects_invalid_base64() {
        assert!(decode_base64_content("not base64!!").is_err());
    }
}
