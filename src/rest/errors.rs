//! Error types for REST request construction.

use thiserror::Error;

/// Errors raised while building a request descriptor.
///
/// Request construction is pure and validates exactly one thing: a list
/// operation must have a list to target. Every other input is passed through
/// unvalidated — the server is the source of truth for list existence and
/// permissions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RestError {
    /// No list name was supplied and no default list is configured.
    #[error("No list is set. Configure a default list or supply one explicitly.")]
    ListNotSet,
}
