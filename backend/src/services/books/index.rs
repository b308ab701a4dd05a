use crate::config::Config;
use crate::store;
use actix_web::{web, HttpResponse, Responder};
use common::model::book::Book;
use common::model::page::Page;
use rusqlite::params;
use serde::Deserialize;

pub(crate) const PER_PAGE: u32 = 20;

#[derive(Deserialize)]
pub struct ListQuery {
    page: Option<u32>,
}

pub(crate) async fn process(cfg: web::Data<Config>, query: web::Query<ListQuery>) -> impl Responder {
    let page = query.page.unwrap_or(1).max(1);
    match list_books(&cfg, page) {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error listing books: {}", e)),
    }
}

fn list_books(cfg: &Config, page: u32) -> Result<Page<Book>, String> {
    let conn = store::open(&cfg.db_path)?;

    let total: u32 = conn
        .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .map_err(|e| e.to_string())?;

    let offset = (page - 1) * PER_PAGE;
    let mut stmt = conn
        .prepare(
            "SELECT id, title, author, image, created_at, updated_at
             FROM books ORDER BY id LIMIT ?1 OFFSET ?2",
        )
        .map_err(|e| e.to_string())?;
    let data: Vec<Book> = stmt
        .query_map(params![PER_PAGE, offset], store::row_to_book)
        .map_err(|e| e.to_string())?
        .filter_map(Result::ok)
        .collect();

    let last_page = if total == 0 { 1 } else { total.div_ceil(PER_PAGE) };

    Ok(Page {
        data,
        current_page: page,
        per_page: PER_PAGE,
        total,
        last_page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_book, test_env};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn listing_paginates_twenty_per_page() {
        let env = test_env();
        for i in 0..25 {
            seed_book(&env.cfg, &format!("Book {}", i), "Author", None);
        }
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(env.cfg.clone()))
                .service(crate::services::books::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/books").to_request();
        let first: Page<Book> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first.data.len(), 20);
        assert_eq!(first.current_page, 1);
        assert_eq!(first.per_page, 20);
        assert_eq!(first.total, 25);
        assert_eq!(first.last_page, 2);

        let req = test::TestRequest::get().uri("/books?page=2").to_request();
        let second: Page<Book> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(second.data.len(), 5);
        assert_eq!(second.current_page, 2);
        assert_eq!(second.data[0].title, "Book 20");
    }

    #[actix_web::test]
    async fn empty_table_lists_as_a_single_empty_page() {
        let env = test_env();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(env.cfg.clone()))
                .service(crate::services::books::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/books").to_request();
        let listing: Page<Book> = test::call_and_read_body_json(&app, req).await;
        assert!(listing.data.is_empty());
        assert_eq!(listing.total, 0);
        assert_eq!(listing.last_page, 1);
    }
}
