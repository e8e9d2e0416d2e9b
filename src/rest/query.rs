//! OData query option building for item reads.
//!
//! [`ItemQuery`] collects OData query options (`filter`, `select`, `orderby`,
//! `top`, ...) in insertion order and renders them as a query string where
//! each key carries the `$` prefix and each value is percent-encoded. Keeping
//! insertion order makes the output deterministic and testable.

/// An ordered collection of OData query options.
///
/// # Example
///
/// ```rust
/// use sharepoint_api::rest::ItemQuery;
///
/// let query = ItemQuery::new()
///     .select("Id,Title")
///     .top(5);
///
/// assert_eq!(query.to_query_string(), "?$select=Id%2CTitle&$top=5");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemQuery {
    options: Vec<(String, String)>,
}

impl ItemQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `$filter` option.
    #[must_use]
    pub fn filter(self, expression: impl Into<String>) -> Self {
        self.option("filter", expression)
    }

    /// Adds a `$select` option.
    #[must_use]
    pub fn select(self, fields: impl Into<String>) -> Self {
        self.option("select", fields)
    }

    /// Adds an `$orderby` option.
    #[must_use]
    pub fn orderby(self, fields: impl Into<String>) -> Self {
        self.option("orderby", fields)
    }

    /// Adds a `$top` option.
    #[must_use]
    pub fn top(self, count: u32) -> Self {
        self.option("top", count.to_string())
    }

    /// Adds an `$expand` option.
    #[must_use]
    pub fn expand(self, fields: impl Into<String>) -> Self {
        self.option("expand", fields)
    }

    /// Adds an arbitrary query option; the `$` prefix is added at render time.
    #[must_use]
    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push((name.into(), value.into()));
        self
    }

    /// Returns `true` if no options have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Renders the options as a query string.
    ///
    /// Keys keep their insertion order, each prefixed with `$`; values are
    /// percent-encoded. The leading `?` appears only when at least one
    /// option is present.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        if self.options.is_empty() {
            return String::new();
        }

        let parts: Vec<String> = self
            .options
            .iter()
            .map(|(name, value)| format!("${name}={}", urlencoding::encode(value)))
            .collect();

        format!("?{}", parts.join("&"))
    }
}
