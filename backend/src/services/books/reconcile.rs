//! # Image Reconciler
//!
//! Aligns the public area's file set and a book's stored image list with a
//! newly submitted list of image identifiers. This is the only piece of the
//! resource with real bookkeeping:
//!
//! 1. **Promotions**: every requested identifier the book does not already
//!    recognize is looked up in the staging area; if a staged file exists it
//!    is copied into the public area and the staged copy is removed. A
//!    missing staged file is a silent no-op — the identifier may already be
//!    public, or refer to nothing.
//! 2. **Deletions**: every identifier in the book's *current* (pre-update)
//!    list that is absent from the requested list is removed from the public
//!    area, if present.
//! 3. **Persistence**: the requested list is written back to the book's
//!    `image` column unconditionally, clearing it when no images were
//!    requested.
//!
//! Promotions run to completion before deletions; the "missing" computation
//! is always taken against the pre-update list.
//!
//! Filesystem failures are best-effort and non-blocking: a failed copy or
//! unlink is logged and skipped, never surfaced to the HTTP caller, and never
//! prevents the persistence write. Callers hold the book's lock from
//! `locks::BookLocks` across this sequence.

use crate::config::ImageRoots;
use crate::store;
use common::model::book::{join_image_list, split_image_field, Book};
use log::{debug, warn};
use rusqlite::Connection;
use std::fs;

/// Reconciles `book`'s images against the raw `image` request field and
/// persists the new list.
pub fn reconcile(
    conn: &Connection,
    roots: &ImageRoots,
    book: &Book,
    requested_field: Option<&str>,
) -> Result<(), String> {
    let requested = split_image_field(requested_field);

    for name in &requested {
        if book.has_image(name) {
            continue;
        }
        let staged = roots.staging.join(name);
        if !staged.exists() {
            debug!("no staged file for '{}', leaving it as-is", name);
            continue;
        }
        let public = roots.public.join(name);
        match fs::copy(&staged, &public) {
            Ok(_) => {
                if let Err(e) = fs::remove_file(&staged) {
                    warn!("promoted '{}' but could not remove staged copy: {}", name, e);
                }
            }
            Err(e) => warn!("could not promote '{}' to the public area: {}", name, e),
        }
    }

    for name in book.missing_images(&requested) {
        let public = roots.public.join(&name);
        if public.exists() {
            if let Err(e) = fs::remove_file(&public) {
                warn!("could not remove de-referenced image '{}': {}", name, e);
            }
        }
    }

    store::update_image(conn, book.id, join_image_list(&requested).as_deref())
}
