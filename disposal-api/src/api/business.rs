//! API endpoint for registering businesses.

use rocket::Route;
use rocket::response::status;
use rocket::serde::json::Json;

use super::{ApiError, database_error_response};
use crate::logged_json::LoggedJson;
use crate::models::{Business, BusinessInput, NewBusiness};
use crate::orm::DbConn;
use crate::orm::business::insert_business;

/// Create Business endpoint.
///
/// - **URL:** `/businesses/`
/// - **Method:** `POST`
/// - **Purpose:** Registers a business that can file disposal requests
///
/// # Request Format
///
/// ```json
/// {
///   "name": "Corner Cafe",
///   "phone_number": 5551234,
///   "email": "owner@cornercafe.example"
/// }
/// ```
///
/// # Response
///
/// **Success (HTTP 201 Created):** the stored business including its `id`.
///
/// **Error (HTTP 409 Conflict):** `phone_number` or `email` is already
/// registered. Uniqueness is enforced by the database, not checked here.
#[post("/businesses/", data = "<new_business>")]
pub async fn create_business(
    db: DbConn,
    new_business: LoggedJson<BusinessInput>,
) -> Result<status::Created<Json<Business>>, ApiError> {
    let new_business = NewBusiness::from(new_business.into_inner());

    db.run(move |conn| {
        insert_business(conn, new_business)
            .map(|business| {
                info!("Registered business {} ({})", business.id, business.name);
                let location = format!("/businesses/{}", business.id);
                status::Created::new(location).body(Json(business))
            })
            .map_err(|e| database_error_response("creating business", e))
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![create_business]
}
