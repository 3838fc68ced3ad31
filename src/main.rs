#[macro_use]
extern crate diesel;
use std::io;

use actix_web::{middleware, web, App, HttpServer};

mod classifier;
mod config;
mod error;
mod handlers;
mod interaction;
mod models;
mod query;
mod schema;
mod store;
mod view;

use crate::config::Config;
use crate::store::FoodStore;

fn startup_error<E: std::fmt::Display>(context: &str, err: E) -> io::Error {
    log::error!("{}: {}", context, err);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| startup_error("invalid configuration", e))?;

    // one pooled handle, shared by every worker; connections are checked out per operation
    let store = FoodStore::open(&config.store);
    if let Err(err) = store.ensure_schema() {
        // every page action retries this and renders the failure
        log::warn!("could not create food_data table at startup: {}", err);
    }

    log::info!(
        "starting HTTP server at http://{}:{} (database: {})",
        config.bind_host,
        config.bind_port,
        config.store.database_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.bind_host.as_str(), config.bind_port))?
    .run()
    .await
}
