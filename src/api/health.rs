use crate::db::DbConn;
use crate::error::{ErrorKind, ErrorResponse};
use crate::settings::Settings;
use diesel::prelude::*;
use rocket::serde::json::Json;
use rocket::State;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthOut {
    pub status: String,
    pub environment: String,
}

/// Turns the outcome of the database round trip into the health response.
pub(crate) fn health_from(
    round_trip: Result<(), String>,
    environment: &str,
) -> Result<Json<HealthOut>, ErrorResponse> {
    round_trip.map_err(|err| {
        log::error!("health check failed: {}", err);
        ErrorResponse::of(ErrorKind::Unavailable, err)
    })?;

    Ok(Json(HealthOut {
        status: "healthy".to_string(),
        environment: environment.to_string(),
    }))
}

#[get("/health")]
pub(crate) async fn health_check(
    conn: Option<DbConn>,
    settings: &State<Settings>,
) -> Result<Json<HealthOut>, ErrorResponse> {
    let round_trip = match conn {
        Some(conn) => conn
            .run(|c| diesel::sql_query("SELECT 1").execute(c))
            .await
            .map(|_| ())
            .map_err(|err| err.to_string()),
        None => Err("Couldn't acquire a database connection".to_string()),
    };

    health_from(round_trip, &settings.environment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;

    #[test]
    fn reachable_database_is_healthy() {
        let health = health_from(Ok(()), "development").unwrap();
        assert_eq!(
            health.into_inner(),
            HealthOut {
                status: "healthy".to_string(),
                environment: "development".to_string(),
            }
        );
    }

    #[test]
    fn unreachable_database_is_unavailable() {
        let err = health_from(
            Err("could not connect to server: Connection refused".to_string()),
            "production",
        )
        .unwrap_err();
        assert_eq!(err.status(), Status::ServiceUnavailable);
        assert_eq!(err.message(), "could not connect to server: Connection refused");

        let no_conn = health_from(
            Err("Couldn't acquire a database connection".to_string()),
            "production",
        )
        .unwrap_err();
        assert_eq!(no_conn.status(), Status::ServiceUnavailable);
    }
}
