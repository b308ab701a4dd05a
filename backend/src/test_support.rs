//! Shared fixtures for handler tests: a throwaway config rooted in a temp
//! directory, plus small helpers for seeding rows and files.

use crate::config::Config;
use crate::store;
use common::model::book::Book;
use rusqlite::params;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub(crate) struct TestEnv {
    pub cfg: Config,
    _root: TempDir,
}

pub(crate) fn test_env() -> TestEnv {
    let root = tempfile::tempdir().unwrap();
    let cfg = Config {
        storage_root: root.path().join("storage"),
        public_root: root.path().join("public"),
        db_path: root.path().join("books.sqlite"),
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    fs::create_dir_all(cfg.staging_dir()).unwrap();
    fs::create_dir_all(&cfg.public_root).unwrap();
    store::init_schema(&cfg.db_path).unwrap();
    TestEnv { cfg, _root: root }
}

pub(crate) fn seed_book(cfg: &Config, title: &str, author: &str, image: Option<&str>) -> i64 {
    let conn = store::open(&cfg.db_path).unwrap();
    conn.execute(
        "INSERT INTO books (title, author, image) VALUES (?1, ?2, ?3)",
        params![title, author, image],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub(crate) fn find(cfg: &Config, id: i64) -> Option<Book> {
    let conn = store::open(&cfg.db_path).unwrap();
    store::find_book(&conn, id).unwrap()
}

pub(crate) fn count_books(cfg: &Config) -> i64 {
    let conn = store::open(&cfg.db_path).unwrap();
    conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .unwrap()
}

pub(crate) fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"jpeg bytes").unwrap();
}
