use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Request body for creating or updating a book.
/// All fields are optional at the transport level; `title` and `author` are
/// enforced by handler-side validation so a missing field produces a
/// field-level error message instead of a deserialization failure.
pub struct BookPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// `|`-delimited list of image identifiers to associate with the book.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Form payload for the upload-revert endpoint.
/// Carries the storage-relative path returned by a previous upload.
pub struct RevertPayload {
    pub image: String,
}
