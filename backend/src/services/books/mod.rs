//! # Book Resource Module
//!
//! This module aggregates all API endpoints for the `books` resource. It acts
//! as a router, directing incoming HTTP requests under the `/books` path to
//! the appropriate handler logic defined in its sub-modules.
//!
//! ## Sub-modules:
//! - `index`: Paginated JSON listing of book records.
//! - `create`: Validates and inserts a new book, then reconciles its images.
//! - `update`: Validates and updates an existing book, then reconciles its images.
//! - `destroy`: Deletes a book row.
//! - `reconcile`: The image reconciler shared by `create` and `update` — moves
//!   newly referenced images from the staging area into the public area,
//!   deletes de-referenced images, and persists the new image list.

mod create;
mod destroy;
mod index;
pub mod reconcile;
mod update;

use actix_web::http::header;
use actix_web::web::{delete, get, patch, post, put, scope};
use actix_web::{HttpResponse, Scope};
use common::requests::BookPayload;
use std::collections::HashMap;

/// The base path for all book-related endpoints.
const API_PATH: &str = "/books";

/// Configures and returns the Actix `Scope` for the book resource.
///
/// # Registered Routes:
///
/// *   **`GET /books`**: paginated listing, 20 records per page
///     (`?page=N`, defaulting to the first page).
/// *   **`POST /books`**: creates a book from a `BookPayload`, runs image
///     reconciliation, redirects back with a "Book created" message.
/// *   **`PUT /books/{id}`** / **`PATCH /books/{id}`**: updates a book's
///     `title` and `author`, runs image reconciliation, redirects back with a
///     "Book updated" message.
/// *   **`DELETE /books/{id}`**: removes the book row, redirects back with a
///     "Book deleted" message.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(index::process))
        .route("", post().to(create::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", patch().to(update::process))
        .route("/{id}", delete().to(destroy::process))
}

/// Checks the required fields of a create/update payload.
///
/// Returns the trimmed `title` and `author` on success, or a field-to-messages
/// map mirroring framework-style validation output. Runs before any
/// persistence or file operation.
pub(crate) fn validate(payload: &BookPayload) -> Result<(String, String), HashMap<&'static str, Vec<String>>> {
    let mut errors: HashMap<&'static str, Vec<String>> = HashMap::new();

    let title = payload.title.as_deref().unwrap_or("").trim();
    if title.is_empty() {
        errors.insert("title", vec!["The title field is required.".to_string()]);
    }

    let author = payload.author.as_deref().unwrap_or("").trim();
    if author.is_empty() {
        errors.insert("author", vec!["The author field is required.".to_string()]);
    }

    if errors.is_empty() {
        Ok((title.to_string(), author.to_string()))
    } else {
        Err(errors)
    }
}

/// Redirect-back response carrying a success message, the resource's
/// post-mutation answer for browser-driven clients.
pub(crate) fn see_other(message: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, API_PATH))
        .body(message.to_string())
}
