use serde::{Deserialize, Serialize};

/// A book record as stored in the `books` table and returned by the listing
/// endpoint.
///
/// The `image` column holds the book's cover images as a single `|`-delimited
/// text field (`"a.jpg|b.jpg"`), or `NULL` when the book has none. The helper
/// methods below interpret that field; the backend's reconciler uses them to
/// decide which files to promote from staging and which to drop from the
/// public area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Book {
    /// The book's current image identifiers, in stored order.
    pub fn image_list(&self) -> Vec<String> {
        split_image_field(self.image.as_deref())
    }

    /// Whether `name` is already associated with this book.
    pub fn has_image(&self, name: &str) -> bool {
        self.image_list().iter().any(|img| img == name)
    }

    /// Identifiers currently associated with this book that are absent from
    /// `requested`. These are the files the reconciler removes from the
    /// public area.
    pub fn missing_images(&self, requested: &[String]) -> Vec<String> {
        self.image_list()
            .into_iter()
            .filter(|img| !requested.contains(img))
            .collect()
    }
}

/// Splits a raw `image` field into its identifiers.
///
/// An empty or absent field yields an empty list. Empty segments (leading,
/// trailing, or doubled delimiters) are dropped.
pub fn split_image_field(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(value) => value
            .split('|')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Joins identifiers back into the delimited stored form; `None` when the
/// list is empty, so the column is cleared rather than set to `""`.
pub fn join_image_list(list: &[String]) -> Option<String> {
    if list.is_empty() {
        None
    } else {
        Some(list.join("|"))
    }
}
