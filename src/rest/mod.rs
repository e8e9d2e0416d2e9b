//! Pure request construction for the SharePoint REST surface.
//!
//! This module maps list operations to [`SpRequest`](crate::clients::SpRequest)
//! descriptors without doing any I/O:
//!
//! - [`encode_entity_type`]: the OData entity-type encoding rule
//! - [`ItemQuery`]: insertion-ordered OData query options
//! - [`ListRequestBuilder`]: URL, header, and body construction for every
//!   list operation (reads, item mutations, attachments)
//! - [`RestError`]: the single eager validation (a list must be set)
//!
//! The async side lives in [`crate::lists`]; everything here is testable
//! without a server.

mod entity_type;
mod errors;
mod list;
mod query;

pub use entity_type::encode_entity_type;
pub use errors::RestError;
pub use list::ListRequestBuilder;
pub use query::ItemQuery;
