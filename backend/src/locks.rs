//! Per-book serialization of image reconciliation.
//!
//! The staging and public directories are shared mutable resources: two
//! concurrent requests touching the same book could both try to move the same
//! staged file, or one could delete a file the other just promoted. To keep
//! the reconcile-and-persist sequence coherent, each book id maps to its own
//! async mutex and handlers hold that mutex for the whole sequence.
//!
//! `BookLocks` is created in `main.rs` and shared across the application as
//! `web::Data`, the same way other request-spanning state is. Entries are
//! retained for the lifetime of the process.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

/// A clonable registry handing out one lock per book id.
#[derive(Clone, Default)]
pub struct BookLocks {
    locks: Arc<Mutex<HashMap<i64, Arc<Mutex<()>>>>>,
}

impl BookLocks {
    /// Returns the lock for `book_id`, creating it on first use.
    ///
    /// Callers hold the returned mutex across the reconcile-and-persist
    /// sequence; the registry's own lock is only held long enough to fetch
    /// or insert the entry.
    pub async fn for_book(&self, book_id: i64) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(book_id).or_default().clone()
    }
}
