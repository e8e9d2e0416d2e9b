//! Pure request construction for SharePoint list operations.
//!
//! [`ListRequestBuilder`] maps (site, list, item id, query options) to
//! fully-formed [`SpRequest`] descriptors without performing any I/O. The
//! async [`ListClient`](crate::lists::ListClient) sends what this builder
//! produces; keeping construction pure makes every URL, header, and body
//! shape testable without a server.
//!
//! # List resolution
//!
//! The builder holds an immutable optional default list. Every list
//! operation takes an explicit `Option<&str>` override; `None` resolves to
//! the default, and an empty or absent resolution fails eagerly with
//! [`RestError::ListNotSet`] before any URL is formed.
//!
//! # Quoting
//!
//! List and file names are interpolated into single-quoted OData literals
//! with no escaping. Names containing a single-quote character are a
//! documented limitation, not a runtime check.

use serde_json::{Map, Value};

use crate::clients::{HttpMethod, SpRequest};
use crate::config::SiteUrl;
use crate::rest::entity_type::encode_entity_type;
use crate::rest::errors::RestError;
use crate::rest::query::ItemQuery;

/// The `$select` projection the original metadata reads ask for.
const FIELD_METADATA_SELECT: &str = "?$select=Id,EntityPropertyName,Choices,Title,TypeAsString";

/// Builds request descriptors for SharePoint list operations.
///
/// # Entity-type caching
///
/// The OData entity type for the default list is encoded once at
/// construction and reused by every mutation that targets the default.
/// Mutations against an explicitly supplied list always re-encode.
///
/// # Example
///
/// ```rust
/// use sharepoint_api::rest::ListRequestBuilder;
/// use sharepoint_api::SiteUrl;
///
/// let site = SiteUrl::new("https://contoso.sharepoint.com/sites/dev").unwrap();
/// let builder = ListRequestBuilder::new(site, Some("Tasks".to_string()));
///
/// let url = builder.list_url(None, "/items").unwrap();
/// assert_eq!(
///     url,
///     "https://contoso.sharepoint.com/sites/dev/_api/web/lists/getbytitle('Tasks')/items"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct ListRequestBuilder {
    site: SiteUrl,
    default_list: Option<String>,
    default_entity_type: Option<String>,
}

impl ListRequestBuilder {
    /// Creates a builder bound to a site and an optional default list.
    #[must_use]
    pub fn new(site: SiteUrl, default_list: Option<String>) -> Self {
        let default_entity_type = default_list.as_deref().map(encode_entity_type);
        Self {
            site,
            default_list,
            default_entity_type,
        }
    }

    /// Returns a new builder bound to a different default list.
    #[must_use]
    pub fn with_list(&self, list: impl Into<String>) -> Self {
        Self::new(self.site.clone(), Some(list.into()))
    }

    /// Returns the site URL this builder targets.
    #[must_use]
    pub const fn site(&self) -> &SiteUrl {
        &self.site
    }

    /// Returns the default list, if one is configured.
    #[must_use]
    pub fn default_list(&self) -> Option<&str> {
        self.default_list.as_deref()
    }

    /// Resolves an optional override against the default list.
    fn resolve_list<'a>(&'a self, list: Option<&'a str>) -> Result<&'a str, RestError> {
        match list.or(self.default_list.as_deref()) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(RestError::ListNotSet),
        }
    }

    /// Returns the OData entity type for the resolved list.
    ///
    /// Reuses the cached encoding when the resolution lands on the default
    /// list; explicit overrides always recompute.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn entity_type(&self, list: Option<&str>) -> Result<String, RestError> {
        let name = self.resolve_list(list)?;
        if let Some(cached) = &self.default_entity_type {
            if Some(name) == self.default_list.as_deref() {
                return Ok(cached.clone());
            }
        }
        Ok(encode_entity_type(name))
    }

    /// Builds `{site}/_api/web/lists/getbytitle('{list}'){endpoint}`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves — the one
    /// validation this builder performs.
    pub fn list_url(&self, list: Option<&str>, endpoint: &str) -> Result<String, RestError> {
        let name = self.resolve_list(list)?;
        Ok(format!(
            "{}/_api/web/lists/getbytitle('{name}'){endpoint}",
            self.site
        ))
    }

    /// Builds `{site}/_api/web/{endpoint}`.
    #[must_use]
    pub fn web_url(&self, endpoint: &str) -> String {
        format!("{}/_api/web/{endpoint}", self.site)
    }

    /// Builds `{site}/_api/{endpoint}` for arbitrary API calls.
    #[must_use]
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}/_api/{endpoint}", self.site)
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// GET the items collection, with optional query options.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn get_items(&self, list: Option<&str>, query: &ItemQuery) -> Result<SpRequest, RestError> {
        let url = format!("{}{}", self.list_url(list, "/items")?, query.to_query_string());
        Ok(SpRequest::new(HttpMethod::Get, url))
    }

    /// GET a single item by id.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn get_item_by_id(&self, list: Option<&str>, id: u32) -> Result<SpRequest, RestError> {
        let url = self.list_url(list, &format!("/items({id})"))?;
        Ok(SpRequest::new(HttpMethod::Get, url))
    }

    /// GET the items collection filtered by an OData `$filter` expression.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn search_items(&self, list: Option<&str>, filter: &str) -> Result<SpRequest, RestError> {
        self.get_items(list, &ItemQuery::new().filter(filter))
    }

    /// GET the list's field metadata with the standard projection.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn list_fields(&self, list: Option<&str>) -> Result<SpRequest, RestError> {
        let url = self.list_url(list, &format!("/fields{FIELD_METADATA_SELECT}"))?;
        Ok(SpRequest::new(HttpMethod::Get, url))
    }

    /// GET a single field's metadata by display name.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn field_by_title(&self, list: Option<&str>, field: &str) -> Result<SpRequest, RestError> {
        let url = self.list_url(
            list,
            &format!("/fields/getbytitle('{field}'){FIELD_METADATA_SELECT}"),
        )?;
        Ok(SpRequest::new(HttpMethod::Get, url))
    }

    /// GET the current user.
    #[must_use]
    pub fn current_user(&self) -> SpRequest {
        SpRequest::new(HttpMethod::Get, self.web_url("currentuser"))
    }

    /// GET the site's web information.
    #[must_use]
    pub fn site_info(&self) -> SpRequest {
        SpRequest::new(HttpMethod::Get, format!("{}/_api/web", self.site))
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// POST a new item.
    ///
    /// The body merges the caller's fields over an injected
    /// `__metadata.type` and a default empty `Title`; caller-supplied
    /// fields always win.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn create_item(
        &self,
        list: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<SpRequest, RestError> {
        let entity_type = self.entity_type(list)?;
        let url = self.list_url(list, "/items")?;

        let mut body = Map::new();
        body.insert(
            "__metadata".to_string(),
            serde_json::json!({ "type": entity_type }),
        );
        body.insert("Title".to_string(), Value::String(String::new()));
        for (key, value) in fields {
            body.insert(key, value);
        }

        Ok(SpRequest::new(HttpMethod::Post, url).json_body(Value::Object(body)))
    }

    /// POST a MERGE update to an existing item.
    ///
    /// Emulated over POST with `IF-MATCH: *` and `X-HTTP-Method: MERGE`.
    /// Any `Id` field in the caller's map is dropped so it cannot shadow
    /// the id in the path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn update_item(
        &self,
        list: Option<&str>,
        id: u32,
        mut fields: Map<String, Value>,
    ) -> Result<SpRequest, RestError> {
        let entity_type = self.entity_type(list)?;
        let url = self.list_url(list, &format!("/items({id})"))?;

        fields.remove("Id");

        let mut body = Map::new();
        body.insert(
            "__metadata".to_string(),
            serde_json::json!({ "type": entity_type }),
        );
        for (key, value) in fields {
            body.insert(key, value);
        }

        Ok(SpRequest::new(HttpMethod::Post, url)
            .header("IF-MATCH", "*")
            .header("X-HTTP-Method", "MERGE")
            .json_body(Value::Object(body)))
    }

    /// POST an emulated DELETE for an item.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn delete_item(&self, list: Option<&str>, id: u32) -> Result<SpRequest, RestError> {
        let url = self.list_url(list, &format!("/items({id})"))?;
        Ok(SpRequest::new(HttpMethod::Post, url)
            .header("IF-MATCH", "*")
            .header("X-HTTP-Method", "DELETE"))
    }

    /// Routes a record to update or create.
    ///
    /// A record carrying a usable `Id` (a positive number or numeric
    /// string) becomes an update targeting that id, with `Id` removed from
    /// the body; anything else becomes a create.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn upsert_item(
        &self,
        list: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<SpRequest, RestError> {
        match item_id(&fields) {
            Some(id) => self.update_item(list, id, fields),
            None => self.create_item(list, fields),
        }
    }

    // ------------------------------------------------------------------
    // Attachments
    // ------------------------------------------------------------------

    /// GET a single attachment by file name (the existence probe).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn get_attachment(
        &self,
        list: Option<&str>,
        id: u32,
        file_name: &str,
    ) -> Result<SpRequest, RestError> {
        let url = self.list_url(list, &format!("/items({id})/AttachmentFiles('{file_name}')"))?;
        Ok(SpRequest::new(HttpMethod::Get, url))
    }

    /// DELETE an attachment by file name.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn delete_attachment(
        &self,
        list: Option<&str>,
        id: u32,
        file_name: &str,
    ) -> Result<SpRequest, RestError> {
        let url = self.list_url(list, &format!("/items({id})/AttachmentFiles('{file_name}')"))?;
        Ok(SpRequest::new(HttpMethod::Delete, url).header("IF-MATCH", "*"))
    }

    /// POST new attachment content for an item.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ListNotSet`] if no list resolves.
    pub fn add_attachment(
        &self,
        list: Option<&str>,
        id: u32,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<SpRequest, RestError> {
        let url = self.list_url(
            list,
            &format!("/items({id})/AttachmentFiles/add(FileName='{file_name}')"),
        )?;
        Ok(SpRequest::new(HttpMethod::Post, url).bytes_body(content))
    }

    /// POST file content into a folder by server-relative URL, overwriting.
    #[must_use]
    pub fn add_file_to_folder(&self, folder: &str, file_name: &str, content: Vec<u8>) -> SpRequest {
        let url = self.web_url(&format!(
            "GetFolderByServerRelativeUrl('{folder}')/Files/add(url='{file_name}',overwrite=true)"
        ));
        SpRequest::new(HttpMethod::Post, url).bytes_body(content)
    }
}

/// Extracts a usable item id from a record's `Id` field.
///
/// Zero, null, non-numeric, and absent ids all read as "no id"; the
/// originals treat a falsy `Id` as a create.
fn item_id(fields: &Map<String, Value>) -> Option<u32> {
    let id = match fields.get("Id")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }?;
    if id == 0 {
        return None;
    }
    u32::try_from(id).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::RequestBody;
    use serde_json::json;

    fn builder(default_list: Option<&str>) -> ListRequestBuilder {
        ListRequestBuilder::new(
            SiteUrl::new("https://contoso.sharepoint.com/sites/dev").unwrap(),
            default_list.map(String::from),
        )
    }

    fn json_of(request: &SpRequest) -> &Value {
        match request.body.as_ref().unwrap() {
            RequestBody::Json(value) => value,
            RequestBody::Bytes(_) => panic!("expected a JSON body"),
        }
    }

    #[test]
    fn test_list_url_with_default_list() {
        let url = builder(Some("Tasks")).list_url(None, "/items").unwrap();
        assert_eq!(
            url,
            "https://contoso.sharepoint.com/sites/dev/_api/web/lists/getbytitle('Tasks')/items"
        );
    }

    #[test]
    fn test_list_url_with_override() {
        let url = builder(Some("Tasks")).list_url(Some("Other"), "").unwrap();
        assert_eq!(
            url,
            "https://contoso.sharepoint.com/sites/dev/_api/web/lists/getbytitle('Other')"
        );
    }

    #[test]
    fn test_list_url_fails_without_list() {
        assert_eq!(
            builder(None).list_url(None, "/items"),
            Err(RestError::ListNotSet)
        );
    }

    #[test]
    fn test_list_url_fails_for_empty_override() {
        assert_eq!(
            builder(Some("Tasks")).list_url(Some(""), "/items"),
            Err(RestError::ListNotSet)
        );
    }

    #[test]
    fn test_entity_type_uses_cache_for_default_list() {
        let b = builder(Some("My_Test List"));
        assert_eq!(
            b.entity_type(None).unwrap(),
            "SP.Data.My_x005f_Test_x0020_ListItem"
        );
        assert_eq!(
            b.entity_type(Some("My_Test List")).unwrap(),
            "SP.Data.My_x005f_Test_x0020_ListItem"
        );
    }

    #[test]
    fn test_entity_type_recomputes_for_override() {
        let b = builder(Some("Tasks"));
        assert_eq!(b.entity_type(Some("Other")).unwrap(), "SP.Data.OtherListItem");
    }

    #[test]
    fn test_with_list_rebinds_default() {
        let b = builder(Some("Tasks")).with_list("Projects");
        assert_eq!(b.default_list(), Some("Projects"));
        assert_eq!(b.entity_type(None).unwrap(), "SP.Data.ProjectsListItem");
    }

    #[test]
    fn test_get_items_appends_query_string() {
        let query = ItemQuery::new().select("Id,Title").top(5);
        let request = builder(Some("Tasks")).get_items(None, &query).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request
            .url
            .ends_with("getbytitle('Tasks')/items?$select=Id%2CTitle&$top=5"));
    }

    #[test]
    fn test_get_items_without_query_has_no_question_mark() {
        let request = builder(Some("Tasks"))
            .get_items(None, &ItemQuery::new())
            .unwrap();
        assert!(request.url.ends_with("/items"));
        assert!(!request.url.contains('?'));
    }

    #[test]
    fn test_create_item_injects_metadata_and_default_title() {
        let mut fields = Map::new();
        fields.insert("Status".to_string(), json!("Open"));

        let request = builder(Some("Tasks")).create_item(None, fields).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.url.ends_with("getbytitle('Tasks')/items"));

        let body = json_of(&request);
        assert_eq!(body["__metadata"]["type"], "SP.Data.TasksListItem");
        assert_eq!(body["Title"], "");
        assert_eq!(body["Status"], "Open");
    }

    #[test]
    fn test_create_item_caller_title_wins() {
        let mut fields = Map::new();
        fields.insert("Title".to_string(), json!("Named"));

        let request = builder(Some("Tasks")).create_item(None, fields).unwrap();
        assert_eq!(json_of(&request)["Title"], "Named");
    }

    #[test]
    fn test_update_item_headers_and_body() {
        let mut fields = Map::new();
        fields.insert("Title".to_string(), json!("Renamed"));
        fields.insert("Id".to_string(), json!(99));

        let request = builder(Some("Tasks")).update_item(None, 7, fields).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.url.ends_with("/items(7)"));
        assert_eq!(request.headers.get("IF-MATCH"), Some(&"*".to_string()));
        assert_eq!(
            request.headers.get("X-HTTP-Method"),
            Some(&"MERGE".to_string())
        );

        let body = json_of(&request);
        assert_eq!(body["Title"], "Renamed");
        assert_eq!(body["__metadata"]["type"], "SP.Data.TasksListItem");
        // The path id must not be shadowed by a body field
        assert!(body.get("Id").is_none());
    }

    #[test]
    fn test_delete_item_emulated_over_post() {
        let request = builder(Some("Tasks")).delete_item(None, 3).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.url.ends_with("/items(3)"));
        assert_eq!(request.headers.get("IF-MATCH"), Some(&"*".to_string()));
        assert_eq!(
            request.headers.get("X-HTTP-Method"),
            Some(&"DELETE".to_string())
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_upsert_with_id_routes_to_update() {
        let mut fields = Map::new();
        fields.insert("Id".to_string(), json!(7));
        fields.insert("Title".to_string(), json!("x"));

        let request = builder(Some("Tasks")).upsert_item(None, fields).unwrap();

        assert!(request.url.ends_with("/items(7)"));
        assert_eq!(
            request.headers.get("X-HTTP-Method"),
            Some(&"MERGE".to_string())
        );
        let body = json_of(&request);
        assert_eq!(body["Title"], "x");
        assert!(body.get("Id").is_none());
    }

    #[test]
    fn test_upsert_without_id_routes_to_create() {
        let mut fields = Map::new();
        fields.insert("Title".to_string(), json!("x"));

        let request = builder(Some("Tasks")).upsert_item(None, fields).unwrap();

        assert!(request.url.ends_with("/items"));
        assert!(request.headers.get("X-HTTP-Method").is_none());
        assert_eq!(json_of(&request)["Title"], "x");
    }

    #[test]
    fn test_upsert_treats_zero_and_null_id_as_create() {
        for id in [json!(0), json!(null)] {
            let mut fields = Map::new();
            fields.insert("Id".to_string(), id);
            fields.insert("Title".to_string(), json!("x"));

            let request = builder(Some("Tasks")).upsert_item(None, fields).unwrap();
            assert!(request.url.ends_with("/items"), "id should not route to update");
        }
    }

    #[test]
    fn test_upsert_accepts_numeric_string_id() {
        let mut fields = Map::new();
        fields.insert("Id".to_string(), json!("12"));

        let request = builder(Some("Tasks")).upsert_item(None, fields).unwrap();
        assert!(request.url.ends_with("/items(12)"));
    }

    #[test]
    fn test_attachment_urls() {
        let b = builder(Some("Tasks"));

        let check = b.get_attachment(None, 4, "report.pdf").unwrap();
        assert!(check
            .url
            .ends_with("/items(4)/AttachmentFiles('report.pdf')"));
        assert_eq!(check.method, HttpMethod::Get);

        let delete = b.delete_attachment(None, 4, "report.pdf").unwrap();
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.headers.get("IF-MATCH"), Some(&"*".to_string()));

        let add = b.add_attachment(None, 4, "report.pdf", vec![1, 2]).unwrap();
        assert!(add
            .url
            .ends_with("/items(4)/AttachmentFiles/add(FileName='report.pdf')"));
        assert_eq!(add.method, HttpMethod::Post);
        assert_eq!(
            add.headers.get("Content-Type"),
            Some(&"application/octet-stream".to_string())
        );
        assert_eq!(add.body, Some(RequestBody::Bytes(vec![1, 2])));
    }

    #[test]
    fn test_add_file_to_folder_url() {
        let request =
            builder(None).add_file_to_folder("/sites/dev/Shared Documents", "a.txt", vec![0]);
        assert!(request.url.contains(
            "GetFolderByServerRelativeUrl('/sites/dev/Shared Documents')/Files/add(url='a.txt',overwrite=true)"
        ));
    }

    #[test]
    fn test_api_and_web_urls() {
        let b = builder(None);
        assert_eq!(
            b.api_url("contextinfo"),
            "https://contoso.sharepoint.com/sites/dev/_api/contextinfo"
        );
        assert_eq!(
            b.web_url("currentuser"),
            "https://contoso.sharepoint.com/sites/dev/_api/web/currentuser"
        );
    }
}
