use diesel::connection::SimpleConnection;
use diesel::PgConnection;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use rocket_sync_db_pools::database;

pub const DATABASE_NAME: &str = "hybrid_db";

#[database("hybrid_db")]
pub struct DbConn(PgConnection);

/// Tables are created when absent and never altered afterwards.
pub const CREATE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id SERIAL PRIMARY KEY,
    name VARCHAR NOT NULL,
    description VARCHAR,
    created_at TIMESTAMP NOT NULL DEFAULT (now() AT TIME ZONE 'utc')
);
CREATE INDEX IF NOT EXISTS ix_items_name ON items (name);

CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username VARCHAR NOT NULL UNIQUE,
    email VARCHAR NOT NULL UNIQUE,
    created_at TIMESTAMP NOT NULL DEFAULT (now() AT TIME ZONE 'utc')
);

CREATE TABLE IF NOT EXISTS user_items (
    user_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    item_id INTEGER NOT NULL REFERENCES items (id) ON DELETE CASCADE,
    created_at TIMESTAMP NOT NULL DEFAULT (now() AT TIME ZONE 'utc'),
    PRIMARY KEY (user_id, item_id)
);
CREATE INDEX IF NOT EXISTS ix_user_items_item_id ON user_items (item_id);
"#;

pub fn create_schema(conn: &mut PgConnection) -> diesel::QueryResult<()> {
    conn.batch_execute(CREATE_SCHEMA)
}

pub(crate) fn schema_fairing() -> AdHoc {
    AdHoc::try_on_ignite("Create database schema", create_db_schema)
}

async fn create_db_schema(rocket: Rocket<Build>) -> Result<Rocket<Build>, Rocket<Build>> {
    let conn = match DbConn::get_one(&rocket).await {
        Some(conn) => conn,
        None => {
            log::error!("no database connection available for schema creation");
            return Err(rocket);
        }
    };

    match conn.run(create_schema).await {
        Ok(()) => {
            log::info!("database schema ready");
            Ok(rocket)
        }
        Err(err) => {
            log::error!("couldn't create database schema: {}", err);
            Err(rocket)
        }
    }
}
