//! Raw query passthrough for local development.
//!
//! The query text is executed without parameter binding. It is only reachable
//! when [`DebugQueries`] is enabled, which never happens outside the
//! development environment.

use crate::db::DbConn;
use crate::error::{ErrorKind, ErrorResponse};
use crate::settings::Settings;
use crate::store;
use rocket::serde::json::Json;
use rocket::State;
use serde::{Deserialize, Serialize};

pub struct DebugQueries {
    enabled: bool,
}

impl DebugQueries {
    pub fn from_settings(settings: &Settings) -> DebugQueries {
        DebugQueries {
            enabled: settings.is_development() && settings.debug_queries,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DebugOut {
    pub query: String,
    pub result: serde_json::Value,
}

/// Checks the capability first so that a disabled endpoint answers 403 for
/// any query text.
pub(crate) fn authorize(capability: &DebugQueries, query: &str) -> Result<(), ErrorResponse> {
    if !capability.enabled() {
        return Err(ErrorResponse::of(
            ErrorKind::Forbidden,
            "Debug endpoint disabled in production",
        ));
    }

    if !store::debug::is_select(query) {
        return Err(ErrorResponse::invalid_input("Only SELECT queries allowed"));
    }

    Ok(())
}

#[get("/debug/query?<query>")]
pub(crate) async fn debug_query(
    query: String,
    capability: &State<DebugQueries>,
    conn: DbConn,
) -> Result<Json<DebugOut>, ErrorResponse> {
    authorize(capability, &query)?;

    log::warn!("executing debug query: {}", query);

    let text = query.clone();
    let result = conn
        .run(move |c| store::debug::run_select(c, &text))
        .await
        .map_err(|err| ErrorResponse::invalid_input(err.to_string()))?;

    Ok(Json(DebugOut { query, result }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;

    fn capability(environment: &str, debug_queries: bool) -> DebugQueries {
        DebugQueries::from_settings(&Settings {
            database_url: String::new(),
            environment: environment.to_string(),
            debug_queries,
            db_pool_size: 1,
        })
    }

    #[test]
    fn capability_requires_development() {
        assert!(capability("development", true).enabled());
        assert!(!capability("development", false).enabled());
        assert!(!capability("production", true).enabled());
        assert!(!capability("staging", true).enabled());
    }

    #[test]
    fn forbidden_outside_development_whatever_the_query() {
        let production = capability("production", true);
        for query in ["select 1", "delete from items", ""] {
            let err = authorize(&production, query).unwrap_err();
            assert_eq!(err.status(), Status::Forbidden);
            assert_eq!(err.message(), "Debug endpoint disabled in production");
        }
    }

    #[test]
    fn only_selects_pass_in_development() {
        let development = capability("development", true);
        assert!(authorize(&development, "SELECT * FROM items").is_ok());

        let err = authorize(&development, "drop table items").unwrap_err();
        assert_eq!(err.status(), Status::BadRequest);
        assert_eq!(err.message(), "Only SELECT queries allowed");
    }
}
