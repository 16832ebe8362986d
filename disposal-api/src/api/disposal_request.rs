//! API endpoints for disposal requests.
//!
//! Requests are filed by a registered business and carry the pickup
//! location, the expected amount and type of waste, and a deadline. The
//! listing returns raw rows; the detail view resolves the owning business
//! and the scheduled timeslots.

use rocket::Route;
use rocket::form::FromForm;
use rocket::response::status;
use rocket::serde::json::Json;

use super::{ApiError, database_error_response, store_error_response, timestamp_error_response};
use crate::logged_json::LoggedJson;
use crate::models::{
    DisposalRequest, DisposalRequestInput, DisposalRequestResponse, NewDisposalRequest,
};
use crate::orm::DbConn;
use crate::orm::disposal_request::{
    create_disposal_request, get_disposal_request_detail, list_disposal_requests,
};

/// Create Disposal Request endpoint.
///
/// - **URL:** `/disposal/requests/`
/// - **Method:** `POST`
/// - **Purpose:** Files a waste pickup request for an existing business
///
/// # Request Format
///
/// ```json
/// {
///   "address": "400 Broad St, Seattle, WA",
///   "business_id": 1,
///   "longitude": -122.3493,
///   "latitude": 47.6205,
///   "expected_amt": 10,
///   "waste_type": "organic",
///   "deadline": "2025-01-01T00:00:00",
///   "created_at": "2024-12-01T09:30:00"
/// }
/// ```
///
/// `created_at` may be omitted, in which case the server time is used.
///
/// # Response
///
/// - **201 Created:** the stored request, with the raw `address` field
/// - **404 Not Found:** `business_id` does not exist
/// - **422 Unprocessable Entity:** `deadline` or `created_at` is not ISO-8601
#[post("/disposal/requests/", data = "<new_request>")]
pub async fn create_disposal_request_endpoint(
    db: DbConn,
    new_request: LoggedJson<DisposalRequestInput>,
) -> Result<status::Created<Json<DisposalRequest>>, ApiError> {
    let new_request =
        NewDisposalRequest::try_from(new_request.into_inner()).map_err(timestamp_error_response)?;

    db.run(move |conn| {
        create_disposal_request(conn, new_request)
            .map(|request| {
                info!(
                    "Created disposal request {} for business {}",
                    request.id, request.business_id
                );
                let location = format!("/disposal/requests/{}", request.id);
                status::Created::new(location).body(Json(request))
            })
            .map_err(|e| store_error_response("creating disposal request", e))
    })
    .await
}

/// Query options for the listing.
///
/// A missing `offset` means 0. A negative or non-numeric one fails the
/// query guard and the request ends in 422.
#[derive(FromForm, Debug, Clone)]
pub struct ListQuery {
    #[field(default = 0, validate = range(0..))]
    pub offset: i64,
}

/// List Disposal Requests endpoint.
///
/// - **URL:** `/disposal/requests/?offset=<n>`
/// - **Method:** `GET`
/// - **Purpose:** Returns one page of requests in creation order
///
/// A page holds at most
/// [`PAGE_SIZE`](crate::orm::disposal_request::PAGE_SIZE) requests. Related
/// business and timeslots are not included.
#[get("/disposal/requests/?<query..>")]
pub async fn list_disposal_requests_endpoint(
    db: DbConn,
    query: ListQuery,
) -> Result<Json<Vec<DisposalRequest>>, ApiError> {
    let offset = query.offset;

    db.run(move |conn| {
        list_disposal_requests(conn, offset)
            .map(Json)
            .map_err(|e| database_error_response("listing disposal requests", e))
    })
    .await
}

/// Get Disposal Request endpoint.
///
/// - **URL:** `/disposal/requests/<request_id>`
/// - **Method:** `GET`
/// - **Purpose:** Returns a request with its business and timeslots
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// {
///   "id": 1,
///   "location": "400 Broad St, Seattle, WA",
///   "expected_amt": 10,
///   "waste_type": "organic",
///   "deadline": "2025-01-01T00:00:00",
///   "created_at": "2024-12-01T09:30:00",
///   "business": {
///     "id": 1,
///     "name": "Corner Cafe",
///     "phone_number": 555,
///     "email": "a@x.com"
///   },
///   "timeslots": [
///     { "id": 1, "start_time": "2025-01-02T08:00:00", "end_time": "2025-01-02T10:00:00" }
///   ],
///   "longitude": -122.3493,
///   "latitude": 47.6205
/// }
/// ```
///
/// **Error (HTTP 404 Not Found):** no request with that id.
#[get("/disposal/requests/<request_id>")]
pub async fn get_disposal_request_endpoint(
    db: DbConn,
    request_id: i32,
) -> Result<Json<DisposalRequestResponse>, ApiError> {
    db.run(move |conn| {
        get_disposal_request_detail(conn, request_id)
            .map(Json)
            .map_err(|e| store_error_response("loading disposal request", e))
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        create_disposal_request_endpoint,
        list_disposal_requests_endpoint,
        get_disposal_request_endpoint
    ]
}
