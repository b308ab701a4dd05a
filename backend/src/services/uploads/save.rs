use crate::config::Config;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

pub(crate) async fn process(cfg: web::Data<Config>, payload: Multipart) -> impl Responder {
    match store_upload(&cfg, payload).await {
        Ok(Some(path)) => HttpResponse::Ok().body(path),
        Ok(None) => HttpResponse::Ok().body(""),
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Streams the first file part into the staging area under a generated name,
/// keeping the client filename's extension. Returns the storage-relative path
/// of the stored file, or `None` when the request carries no file part.
async fn store_upload(
    cfg: &Config,
    mut payload: Multipart,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()));
        // Non-file fields are ignored.
        let Some(filename) = filename else { continue };

        let stored_name = match Path::new(&filename).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        let staging = cfg.staging_dir();
        fs::create_dir_all(&staging)?;
        let mut file = File::create(staging.join(&stored_name))?;
        while let Some(chunk) = field.next().await {
            file.write_all(&chunk?)?;
        }

        return Ok(Some(format!("uploads/books/{}", stored_name)));
    }

    Ok(None)
}
