use crate::config::Config;
use crate::services::books::see_other;
use crate::store;
use actix_web::{web, HttpResponse, Responder};
use rusqlite::params;

pub(crate) async fn process(cfg: web::Data<Config>, id: web::Path<i64>) -> impl Responder {
    match delete_book(&cfg, *id) {
        Ok(true) => see_other("Book deleted"),
        Ok(false) => HttpResponse::NotFound().body("Book not found"),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error deleting book: {}", e)),
    }
}

// Removes the database row only. Public images referenced by the row are
// left in place.
fn delete_book(cfg: &Config, id: i64) -> Result<bool, String> {
    let conn = store::open(&cfg.db_path)?;
    let affected = conn
        .execute("DELETE FROM books WHERE id = ?1", params![id])
        .map_err(|e| e.to_string())?;
    Ok(affected > 0)
}
