//! API endpoint for scheduling timeslots against a disposal request.

use rocket::Route;
use rocket::response::status;
use rocket::serde::json::Json;

use super::{ApiError, store_error_response, timestamp_error_response};
use crate::logged_json::LoggedJson;
use crate::models::{NewTimeslot, Timeslot, TimeslotInput};
use crate::orm::DbConn;
use crate::orm::timeslot::create_timeslot_for_request;

/// Create Timeslot endpoint.
///
/// - **URL:** `/disposal/requests/<request_id>/timeslots`
/// - **Method:** `POST`
/// - **Purpose:** Adds a pickup window to an existing disposal request
///
/// The new slot always belongs to `request_id`. A `disposal_request_id` in
/// the body is ignored. Overlapping slots are accepted.
///
/// # Request Format
///
/// ```json
/// {
///   "start_time": "2025-01-02T08:00:00",
///   "end_time": "2025-01-02T10:00:00"
/// }
/// ```
///
/// # Response
///
/// - **201 Created:** the stored timeslot
/// - **404 Not Found:** no disposal request with that id
/// - **422 Unprocessable Entity:** a timestamp is not ISO-8601
#[post("/disposal/requests/<request_id>/timeslots", data = "<new_timeslot>")]
pub async fn create_timeslot(
    db: DbConn,
    request_id: i32,
    new_timeslot: LoggedJson<TimeslotInput>,
) -> Result<status::Created<Json<Timeslot>>, ApiError> {
    if let Some(claimed) = new_timeslot.disposal_request_id
        && claimed != request_id
    {
        warn!(
            "Ignoring disposal_request_id {} in body; using {} from the path",
            claimed, request_id
        );
    }

    let new_timeslot =
        NewTimeslot::for_request(request_id, &new_timeslot).map_err(timestamp_error_response)?;

    db.run(move |conn| {
        create_timeslot_for_request(conn, request_id, new_timeslot)
            .map(|slot| {
                let location = format!("/disposal/requests/{}/timeslots/{}", request_id, slot.id);
                status::Created::new(location).body(Json(slot))
            })
            .map_err(|e| store_error_response("creating timeslot", e))
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![create_timeslot]
}
