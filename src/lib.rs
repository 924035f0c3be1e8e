#[macro_use]
extern crate rocket;

pub mod api;
pub mod cors;
pub mod db;
pub mod error;
pub mod schema;
pub mod settings;
pub mod store;

use api::debug_query::DebugQueries;
use cors::CORS;
use db::{DbConn, DATABASE_NAME};
use rocket::figment::util::map;
use rocket::figment::value::{Map, Value};
use rocket::{Build, Rocket};
use settings::Settings;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("couldn't read settings: {0}")]
    Settings(#[from] config::ConfigError),
    #[error("couldn't launch server: {0}")]
    Launch(#[from] rocket::Error),
}

/// Builds the server: database pool, schema creation, CORS, catchers and routes.
pub fn build_rocket(settings: Settings) -> Rocket<Build> {
    let db: Map<_, Value> = map! {
        "url" => settings.database_url.clone().into(),
        "pool_size" => settings.db_pool_size.into(),
    };
    let figment = rocket::Config::figment().merge(("databases", map![DATABASE_NAME => db]));

    let rocket = rocket::custom(figment);

    log::info!(
        "starting in {} environment against {}",
        settings.environment,
        settings.redacted_database_url()
    );

    let debug_queries = DebugQueries::from_settings(&settings);
    if debug_queries.enabled() {
        log::warn!("debug query endpoint is enabled");
    }

    rocket
        .attach(DbConn::fairing())
        .attach(db::schema_fairing())
        .attach(CORS)
        .manage(debug_queries)
        .manage(settings)
        .register("/", catchers![error::default_catcher])
        .mount("/", api::routes())
}
