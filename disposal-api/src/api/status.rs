//! Liveness check for load balancers and uptime monitors.
//!
//! Answers without touching the database.

use rocket::Route;
use rocket::serde::json::Json;
use serde::Serialize;

/// Body of `GET /status`.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthStatus {
    status: &'static str,
}

#[get("/status")]
pub fn health_status() -> Json<HealthStatus> {
    Json(HealthStatus { status: "running" })
}

pub fn routes() -> Vec<Route> {
    routes![health_status]
}
