use std::sync::Arc;

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod routes;
mod store;

use config::Config;
use db::{ensure_schema, init_db};
use store::{RecordStore, SqliteStore};

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(addr = %config.server_addr, database = %config.database_url, "Server starting...");

    let pool = init_db(&config).await?;
    ensure_schema(&pool)
        .await
        .context("Failed to create database schema")?;

    let store: Arc<dyn RecordStore> = Arc::new(SqliteStore::new(pool));
    let store = Data::from(store);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard so JS/CSS assets resolve
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind(&config.server_addr)
    .with_context(|| format!("Failed to bind {}", config.server_addr))?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
