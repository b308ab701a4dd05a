use crate::config::Config;
use crate::locks::BookLocks;
use crate::services::books::{reconcile, see_other, validate};
use crate::store;
use actix_web::{web, HttpResponse, Responder};
use rusqlite::params;

pub(crate) async fn process(
    cfg: web::Data<Config>,
    locks: web::Data<BookLocks>,
    id: web::Path<i64>,
    payload: web::Json<common::requests::BookPayload>,
) -> impl Responder {
    let (title, author) = match validate(&payload) {
        Ok(fields) => fields,
        Err(errors) => {
            return HttpResponse::UnprocessableEntity().json(serde_json::json!({ "errors": errors }))
        }
    };

    match update_book(&cfg, &locks, *id, &title, &author, payload.image.as_deref()).await {
        Ok(true) => see_other("Book updated"),
        Ok(false) => HttpResponse::NotFound().body("Book not found"),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error updating book: {}", e)),
    }
}

/// Updates `title`/`author` and reconciles images. Returns `Ok(false)` when
/// no book with `id` exists.
///
/// The book is fetched before the field update so reconciliation sees the
/// pre-update image list.
async fn update_book(
    cfg: &Config,
    locks: &BookLocks,
    id: i64,
    title: &str,
    author: &str,
    image: Option<&str>,
) -> Result<bool, String> {
    let lock = locks.for_book(id).await;
    let _guard = lock.lock().await;

    let conn = store::open(&cfg.db_path)?;
    let book = match store::find_book(&conn, id)? {
        Some(book) => book,
        None => return Ok(false),
    };

    conn.execute(
        "UPDATE books SET title = ?1, author = ?2, updated_at = datetime('now') WHERE id = ?3",
        params![title, author, id],
    )
    .map_err(|e| e.to_string())?;

    reconcile::reconcile(&conn, &cfg.image_roots(), &book, image)?;
    Ok(true)
}
