pub mod business;
pub mod disposal_request;
pub mod status;
pub mod timeslot;

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::Route;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::StoreError;
use crate::timestamp::TimestampError;

/// Error body returned by every handler failure.
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = Custom<Json<ErrorResponse>>;

pub(crate) fn error_response(status: Status, message: impl Into<String>) -> ApiError {
    Custom(status, Json(ErrorResponse { error: message.into() }))
}

/// Maps a failed store call to a response. `action` completes the sentence
/// "Database error while ..." in the 500 case.
pub(crate) fn store_error_response(action: &str, err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound { .. } => error_response(Status::NotFound, err.to_string()),
        StoreError::Database(e) => database_error_response(action, e),
    }
}

pub(crate) fn database_error_response(action: &str, err: DieselError) -> ApiError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            warn!("Constraint violation while {}: {}", action, info.message());
            error_response(Status::Conflict, info.message().to_string())
        }
        e => {
            error!("Database error while {}: {:?}", action, e);
            error_response(Status::InternalServerError, format!("Database error while {}", action))
        }
    }
}

pub(crate) fn timestamp_error_response(err: TimestampError) -> ApiError {
    error_response(Status::UnprocessableEntity, err.to_string())
}

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(business::routes());
    routes.extend(disposal_request::routes());
    routes.extend(status::routes());
    routes.extend(timeslot::routes());
    routes
}
