//! OData entity-type encoding for list item payloads.
//!
//! SharePoint requires create/update payloads to name their list item type
//! in `__metadata.type`, e.g. `SP.Data.TasksListItem`. List display names
//! containing spaces or underscores are encoded with SharePoint's hex
//! tokens before being wrapped.

/// Encodes a list display name into its OData entity-type string.
///
/// Spaces become `_x0020_` and underscores become `_x005f_` in a single
/// pass over the original name, so underscores introduced by the space
/// token are never re-encoded. An empty name yields `SP.Data.ListItem`.
///
/// # Example
///
/// ```rust
/// use sharepoint_api::rest::encode_entity_type;
///
/// assert_eq!(
///     encode_entity_type("My_Test List"),
///     "SP.Data.My_x005f_Test_x0020_ListItem"
/// );
/// ```
#[must_use]
pub fn encode_entity_type(list: &str) -> String {
    let mut encoded = String::with_capacity("SP.Data.".len() + list.len() + "ListItem".len());
    encoded.push_str("SP.Data.");
    for c in list.chars() {
        match c {
            ' ' => encoded.push_str("_x0020_"),
            '_' => encoded.push_str("_x005f_"),
            other => encoded.push(other),
        }
    }
    encoded.push_str("ListItem");
    encoded
}
