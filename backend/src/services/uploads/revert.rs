use crate::config::Config;
use actix_web::{web, HttpResponse, Responder};
use common::requests::RevertPayload;
use log::{debug, warn};
use std::fs;

pub(crate) async fn process(cfg: web::Data<Config>, form: web::Form<RevertPayload>) -> impl Responder {
    revert_upload(&cfg, &form.image);
    HttpResponse::Ok().body("")
}

/// Deletes a staged upload identified by its storage-relative path.
///
/// Best-effort: a path that does not resolve to an existing file under the
/// storage root is ignored. Canonicalizing both sides keeps `..` segments
/// from reaching outside the root.
fn revert_upload(cfg: &Config, image: &str) {
    let candidate = cfg.storage_root.join(image.trim_start_matches('/'));
    let Ok(path) = candidate.canonicalize() else {
        debug!("revert for '{}': nothing to remove", image);
        return;
    };
    let Ok(root) = cfg.storage_root.canonicalize() else {
        return;
    };
    if !path.starts_with(&root) {
        warn!("revert path '{}' escapes the storage root, ignoring", image);
        return;
    }
    if let Err(e) = fs::remove_file(&path) {
        warn!("could not remove reverted upload '{}': {}", image, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_env, touch};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn revert_deletes_the_staged_file() {
        let env = test_env();
        touch(&env.cfg.staging_dir(), "cover.jpg");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(env.cfg.clone()))
                .service(crate::services::uploads::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/upload-revert")
            .set_form(RevertPayload {
                image: "uploads/books/cover.jpg".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(test::read_body(resp).await.is_empty());
        assert!(!env.cfg.staging_dir().join("cover.jpg").exists());
    }

    #[actix_web::test]
    async fn revert_of_a_missing_file_is_a_no_op() {
        let env = test_env();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(env.cfg.clone()))
                .service(crate::services::uploads::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/upload-revert")
            .set_form(RevertPayload {
                image: "uploads/books/ghost.jpg".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn revert_ignores_paths_escaping_the_storage_root() {
        let env = test_env();
        let outside = env.cfg.storage_root.parent().unwrap().join("outside.jpg");
        fs::write(&outside, b"jpeg bytes").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(env.cfg.clone()))
                .service(crate::services::uploads::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/upload-revert")
            .set_form(RevertPayload {
                image: "../outside.jpg".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(outside.exists());
    }
}
