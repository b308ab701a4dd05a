mod config;
mod locks;
mod services;
mod store;
#[cfg(test)]
mod test_support;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::fs;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cfg = config::Config::from_env();
    fs::create_dir_all(cfg.staging_dir())?;
    fs::create_dir_all(&cfg.public_root)?;
    store::init_schema(&cfg.db_path).map_err(std::io::Error::other)?;

    let locks = locks::BookLocks::default();
    let bind_addr = (cfg.host.clone(), cfg.port);
    info!("Server running at http://{}:{}", cfg.host, cfg.port);

    HttpServer::new(move || {
        let public_root = cfg.public_root.clone();
        App::new()
            .app_data(web::Data::new(cfg.clone()))
            .app_data(web::Data::new(locks.clone()))
            .service(services::books::configure_routes())
            .service(services::uploads::configure_routes())
            // Promoted images are served straight from the public area,
            // registered last so the API routes above take precedence.
            .service(Files::new("/", public_root))
    })
    .bind(bind_addr)?
    .run()
    .await
}
