use crate::config::Config;
use crate::locks::BookLocks;
use crate::services::books::{reconcile, see_other, validate};
use crate::store;
use actix_web::{web, HttpResponse, Responder};
use rusqlite::params;

pub(crate) async fn process(
    cfg: web::Data<Config>,
    locks: web::Data<BookLocks>,
    payload: web::Json<common::requests::BookPayload>,
) -> impl Responder {
    let (title, author) = match validate(&payload) {
        Ok(fields) => fields,
        Err(errors) => {
            return HttpResponse::UnprocessableEntity().json(serde_json::json!({ "errors": errors }))
        }
    };

    match create_book(&cfg, &locks, &title, &author, payload.image.as_deref()).await {
        Ok(_) => see_other("Book created"),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error creating book: {}", e)),
    }
}

async fn create_book(
    cfg: &Config,
    locks: &BookLocks,
    title: &str,
    author: &str,
    image: Option<&str>,
) -> Result<i64, String> {
    let conn = store::open(&cfg.db_path)?;
    conn.execute(
        "INSERT INTO books (title, author) VALUES (?1, ?2)",
        params![title, author],
    )
    .map_err(|e| e.to_string())?;
    let id = conn.last_insert_rowid();

    let lock = locks.for_book(id).await;
    let _guard = lock.lock().await;

    let book = store::find_book(&conn, id)?.ok_or_else(|| "book row vanished after insert".to_string())?;
    reconcile::reconcile(&conn, &cfg.image_roots(), &book, image)?;
    Ok(id)
}
