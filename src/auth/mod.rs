//! Authentication support for the SharePoint REST client.
//!
//! Two authentication modes are supported:
//!
//! - **Bearer token**: an [`AccessToken`](crate::config::AccessToken) on the
//!   configuration, attached by the transport as an `Authorization` header
//! - **Form digest**: per-request anti-forgery tokens fetched from
//!   `/_api/contextinfo`, see [`acquire_form_digest`]

mod digest;

pub use digest::{acquire_form_digest, AuthError};
