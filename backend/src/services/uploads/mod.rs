//! # Upload Service Module
//!
//! Endpoints for the two-step image upload flow: a file is first uploaded
//! into the staging area (`POST /upload`), and may be discarded again before
//! it was ever associated with a book (`POST /upload-revert`). Association
//! itself happens later, when a book create/update request references the
//! staged file and the book service's reconciler promotes it.

mod revert;
mod save;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// Configures and returns the Actix `Scope` for the upload endpoints.
///
/// # Registered Routes:
///
/// *   **`POST /upload`**: accepts a multipart request with a single file
///     field, streams it into the staging area under a generated name, and
///     responds with the storage-relative path as plain text (empty text when
///     no file part is present).
/// *   **`POST /upload-revert`**: accepts a form with an `image` field
///     holding a previously returned storage-relative path and deletes the
///     file if it still exists under the storage root. Always responds with
///     empty text.
pub fn configure_routes() -> Scope {
    scope("")
        .route("/upload", post().to(save::process))
        .route("/upload-revert", post().to(revert::process))
}
