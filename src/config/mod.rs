//! Configuration types for the SharePoint REST client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SharePointConfig`]: The main configuration struct holding all client settings
//! - [`SharePointConfigBuilder`]: A builder for constructing [`SharePointConfig`] instances
//! - [`SiteUrl`]: A validated site URL newtype with trailing-slash normalization
//! - [`AccessToken`]: A validated bearer token newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use sharepoint_api::{SharePointConfig, SiteUrl};
//!
//! let config = SharePointConfig::builder()
//!     .site_url(SiteUrl::new("https://contoso.sharepoint.com/sites/dev").unwrap())
//!     .default_list("Tasks")
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, SiteUrl};

use crate::error::ConfigError;

/// Configuration for the SharePoint REST client.
///
/// This struct holds all configuration needed for client operations: the
/// site URL, an optional default list, and authentication settings. It is
/// immutable after construction; operations that target a different list
/// take an explicit override rather than mutating shared state.
///
/// # Authentication
///
/// Two modes are supported:
///
/// - **Bearer token**: set [`access_token`](SharePointConfigBuilder::access_token)
///   and every request carries an `Authorization: Bearer` header.
/// - **Form digest**: leave the token unset; each mutating request fetches a
///   fresh digest from `/_api/contextinfo`. An optional
///   [`fallback_digest`](SharePointConfigBuilder::fallback_digest) (e.g. one
///   scraped from the hosting page) is used only when the contextinfo call fails.
///
/// # Thread Safety
///
/// `SharePointConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct SharePointConfig {
    site_url: SiteUrl,
    default_list: Option<String>,
    access_token: Option<AccessToken>,
    fallback_digest: Option<String>,
    accept_language: Option<String>,
    user_agent_prefix: Option<String>,
}

impl SharePointConfig {
    /// Creates a new builder for constructing a `SharePointConfig`.
    #[must_use]
    pub fn builder() -> SharePointConfigBuilder {
        SharePointConfigBuilder::new()
    }

    /// Returns the site URL.
    #[must_use]
    pub const fn site_url(&self) -> &SiteUrl {
        &self.site_url
    }

    /// Returns the default list name, if configured.
    #[must_use]
    pub fn default_list(&self) -> Option<&str> {
        self.default_list.as_deref()
    }

    /// Returns the bearer access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the fallback form digest, if configured.
    #[must_use]
    pub fn fallback_digest(&self) -> Option<&str> {
        self.fallback_digest.as_deref()
    }

    /// Returns the Accept-Language header value, if configured.
    #[must_use]
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SharePointConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SharePointConfig>();
};

/// Builder for constructing [`SharePointConfig`] instances.
///
/// The only required field is `site_url`; everything else defaults to unset.
///
/// # Example
///
/// ```rust
/// use sharepoint_api::{SharePointConfig, SiteUrl, AccessToken};
///
/// let config = SharePointConfig::builder()
///     .site_url(SiteUrl::new("https://contoso.sharepoint.com/sites/dev").unwrap())
///     .default_list("Tasks")
///     .access_token(AccessToken::new("token").unwrap())
///     .accept_language("pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SharePointConfigBuilder {
    site_url: Option<SiteUrl>,
    default_list: Option<String>,
    access_token: Option<AccessToken>,
    fallback_digest: Option<String>,
    accept_language: Option<String>,
    user_agent_prefix: Option<String>,
}

impl SharePointConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the site URL (required).
    #[must_use]
    pub fn site_url(mut self, site_url: SiteUrl) -> Self {
        self.site_url = Some(site_url);
        self
    }

    /// Sets the default list for operations that do not supply one.
    #[must_use]
    pub fn default_list(mut self, list: impl Into<String>) -> Self {
        self.default_list = Some(list.into());
        self
    }

    /// Sets the bearer access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the fallback form digest used when the contextinfo call fails.
    #[must_use]
    pub fn fallback_digest(mut self, digest: impl Into<String>) -> Self {
        self.fallback_digest = Some(digest.into());
        self
    }

    /// Sets the `Accept-Language` header value sent with every request.
    #[must_use]
    pub fn accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = Some(language.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SharePointConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `site_url` is not set.
    pub fn build(self) -> Result<SharePointConfig, ConfigError> {
        let site_url = self
            .site_url
            .ok_or(ConfigError::MissingRequiredField { field: "site_url" })?;

        Ok(SharePointConfig {
            site_url,
            default_list: self.default_list,
            access_token: self.access_token,
            fallback_digest: self.fallback_digest,
            accept_language: self.accept_language,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
