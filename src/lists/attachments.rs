//! Attachment operations for list items.
//!
//! Uploading is a short sequential protocol rather than a single request:
//! probe for an existing attachment with the same name, optionally delete
//! it, then add the new content. SharePoint rejects a duplicate-named
//! attachment, so the delete must be fully acknowledged before the add is
//! issued.

use serde_json::Value;

use crate::lists::{ListClient, ListError};

/// The result of an attachment upload.
///
/// "Already exists and overwrite was not requested" is an explicit
/// non-error outcome, distinct from any transport failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttachmentOutcome {
    /// The attachment was uploaded; carries the add response's `d` payload.
    Uploaded(Value),
    /// An attachment with the same name exists and `overwrite` was `false`;
    /// no mutating request was sent.
    SkippedExisting,
}

impl AttachmentOutcome {
    /// Returns `true` if content was actually uploaded.
    #[must_use]
    pub const fn was_uploaded(&self) -> bool {
        matches!(self, Self::Uploaded(_))
    }
}

impl ListClient {
    /// Uploads an attachment to a list item.
    ///
    /// Probes for an existing attachment with the same file name first.
    /// If one exists: without `overwrite` the call is a no-op returning
    /// [`AttachmentOutcome::SkippedExisting`]; with `overwrite` the existing
    /// attachment is deleted and the delete is awaited before the add is
    /// issued.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves, digest acquisition
    /// fails, or any of the probe/delete/add round-trips fails.
    pub async fn add_attachment(
        &self,
        id: u32,
        file_name: &str,
        content: Vec<u8>,
        overwrite: bool,
        list: Option<&str>,
    ) -> Result<AttachmentOutcome, ListError> {
        let probe = self
            .request_builder()
            .get_attachment(list, id, file_name)?;
        let probe_response = self.http().send_unchecked(&probe).await?;

        if probe_response.is_success() {
            if !overwrite {
                return Ok(AttachmentOutcome::SkippedExisting);
            }
            // Must complete before the add; SharePoint rejects duplicates.
            self.remove_attachment(id, file_name, list).await?;
        }

        let add = self
            .request_builder()
            .add_attachment(list, id, file_name, content)?;
        let response = self.send_mutating(add).await?;
        Ok(AttachmentOutcome::Uploaded(
            response.into_d().unwrap_or(Value::Null),
        ))
    }

    /// Removes an attachment from a list item.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when no list resolves, digest acquisition
    /// fails, or the server rejects the delete.
    pub async fn remove_attachment(
        &self,
        id: u32,
        file_name: &str,
        list: Option<&str>,
    ) -> Result<(), ListError> {
        let request = self
            .request_builder()
            .delete_attachment(list, id, file_name)?;
        self.send_mutating(request).await?;
        Ok(())
    }

    /// Uploads file content into a folder by server-relative URL,
    /// overwriting any existing file with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when digest acquisition fails or the server
    /// rejects the upload.
    pub async fn add_attachment_to_folder(
        &self,
        folder: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<Value, ListError> {
        let request = self
            .request_builder()
            .add_file_to_folder(folder, file_name, content);
        let response = self.send_mutating(request).await?;
        Ok(response.into_d().unwrap_or(Value::Null))
    }
}
