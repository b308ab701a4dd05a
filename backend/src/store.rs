//! SQLite persistence helpers shared by the book services.
//!
//! Connections are opened per operation against the configured database path;
//! the schema is created once at startup by `init_schema`. Timestamps are
//! maintained in SQL (`datetime('now')`), so callers never pass them.

use common::model::book::Book;
use rusqlite::{params, Connection};
use std::path::Path;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    image TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
";

pub fn open(db_path: &Path) -> Result<Connection, String> {
    Connection::open(db_path).map_err(|e| e.to_string())
}

/// Creates the `books` table if the database file is new.
pub fn init_schema(db_path: &Path) -> Result<(), String> {
    let conn = open(db_path)?;
    create_tables(&conn)
}

pub fn create_tables(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(SCHEMA).map_err(|e| e.to_string())
}

pub fn row_to_book(row: &rusqlite::Row) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        image: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

pub fn find_book(conn: &Connection, id: i64) -> Result<Option<Book>, String> {
    let result = conn.query_row(
        "SELECT id, title, author, image, created_at, updated_at FROM books WHERE id = ?1",
        params![id],
        row_to_book,
    );
    match result {
        Ok(book) => Ok(Some(book)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

/// Writes the book's `image` column; `None` clears it.
pub fn update_image(conn: &Connection, id: i64, image: Option<&str>) -> Result<(), String> {
    conn.execute(
        "UPDATE books SET image = ?1, updated_at = datetime('now') WHERE id = ?2",
        params![image, id],
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}
