use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ApiError {
    pub err: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Forbidden,
    Conflict,
    Unavailable,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> Status {
        match self {
            ErrorKind::NotFound => Status::NotFound,
            ErrorKind::InvalidInput => Status::BadRequest,
            ErrorKind::Forbidden => Status::Forbidden,
            ErrorKind::Conflict => Status::Conflict,
            ErrorKind::Unavailable => Status::ServiceUnavailable,
            ErrorKind::Internal => Status::InternalServerError,
        }
    }
}

#[derive(Debug)]
pub struct ErrorResponse<T = ApiError> {
    json: Json<T>,
    status: Status,
}

impl ErrorResponse<ApiError> {
    pub(crate) fn new(status: Status, err: String) -> ErrorResponse<ApiError> {
        ErrorResponse {
            json: Json(ApiError { err }),
            status,
        }
    }

    pub(crate) fn of(kind: ErrorKind, err: impl Into<String>) -> ErrorResponse<ApiError> {
        ErrorResponse::new(kind.status(), err.into())
    }

    pub(crate) fn not_found(err: impl Into<String>) -> ErrorResponse<ApiError> {
        ErrorResponse::of(ErrorKind::NotFound, err)
    }

    pub(crate) fn invalid_input(err: impl Into<String>) -> ErrorResponse<ApiError> {
        ErrorResponse::of(ErrorKind::InvalidInput, err)
    }

    /// Maps a failed query to a 500 carrying the driver message. Unique
    /// violations become a 409 instead.
    pub(crate) fn from_query(err: DieselError) -> ErrorResponse<ApiError> {
        let kind = match &err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ErrorKind::Conflict
            }
            DieselError::NotFound => ErrorKind::NotFound,
            _ => ErrorKind::Internal,
        };
        log::warn!("query failed: {}", err);
        ErrorResponse::of(kind, err.to_string())
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.json.err
    }
}

impl<'r, T: serde::Serialize> Responder<'r, 'static> for ErrorResponse<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        Response::build_from(self.json.respond_to(req)?)
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}

#[catch(default)]
pub(crate) fn default_catcher(status: Status, _req: &Request) -> ErrorResponse {
    let reason = status.reason().unwrap_or("Unknown error");
    ErrorResponse::new(status, reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_statuses() {
        assert_eq!(ErrorKind::NotFound.status().code, 404);
        assert_eq!(ErrorKind::InvalidInput.status().code, 400);
        assert_eq!(ErrorKind::Forbidden.status().code, 403);
        assert_eq!(ErrorKind::Conflict.status().code, 409);
        assert_eq!(ErrorKind::Unavailable.status().code, 503);
        assert_eq!(ErrorKind::Internal.status().code, 500);
    }

    #[test]
    fn query_errors_keep_driver_text() {
        let err = ErrorResponse::from_query(DieselError::RollbackTransaction);
        assert_eq!(err.status(), Status::InternalServerError);
        assert_eq!(err.message(), DieselError::RollbackTransaction.to_string());

        let missing = ErrorResponse::from_query(DieselError::NotFound);
        assert_eq!(missing.status(), Status::NotFound);
    }

    #[test]
    fn unknown_routes_get_json_errors() {
        use rocket::local::blocking::Client;

        let rocket = rocket::build().register("/", catchers![default_catcher]);
        let client = Client::tracked(rocket).unwrap();
        let response = client.get("/nowhere").dispatch();

        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.content_type(), Some(ContentType::JSON));
        assert_eq!(response.into_string().unwrap(), r#"{"err":"Not Found"}"#);
    }
}
