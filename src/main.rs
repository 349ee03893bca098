#[macro_use]
extern crate diesel;

mod config;
mod database;
mod export;
mod logger;
mod models;
mod protocol;
mod utils;

use actix_web::{middleware, App, HttpServer};
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use std::sync::Arc;

use crate::{config::Config, database::MysqlSource, export::ExportState};

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    logger::init(&config.log_level, config.log_config.as_deref())?;

    // connections are opened on first use
    let manager = ConnectionManager::<MysqlConnection>::new(config.database_url.clone());
    let pool = r2d2::Pool::builder()
        .max_size(config.pool_size)
        .build_unchecked(manager);

    let state = ExportState {
        source: Arc::new(MysqlSource::new(pool, &config.schema)),
        clock: config.clock,
        file_name: config.export_file_name.clone(),
    };

    log::info!("listening on {}", config.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .data(state.clone())
            .configure(export::config)
    })
    .bind(&config.bind)
    .with_context(|| format!("Failed to bind {}", config.bind))?
    .run()
    .await
    .context("Server error")?;

    Ok(())
}
