use chrono::NaiveDateTime;
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::business::{Business, BusinessResponse};
use crate::models::timeslot::{Timeslot, TimeslotResponse};
use crate::schema::disposal_requests;
use crate::timestamp::{TimestampError, parse_optional_timestamp, parse_timestamp};

#[derive(
    Queryable,
    Selectable,
    Identifiable,
    Associations,
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    TS,
)]
#[diesel(belongs_to(Business))]
#[diesel(table_name = disposal_requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct DisposalRequest {
    pub id: i32,
    pub address: String,
    pub business_id: i32, // Foreign key to Business
    pub longitude: f64,
    pub latitude: f64,
    pub expected_amt: i32,
    pub waste_type: String,
    #[ts(type = "string")]
    pub deadline: NaiveDateTime,
    #[ts(type = "string")]
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = disposal_requests)]
pub struct NewDisposalRequest {
    pub address: String,
    pub business_id: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub expected_amt: i32,
    pub waste_type: String,
    pub deadline: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

// For API inputs; timestamps arrive as ISO-8601 text
#[derive(Debug, Clone, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct DisposalRequestInput {
    pub address: String,
    pub business_id: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub expected_amt: i32,
    pub waste_type: String,
    pub deadline: String,
    #[serde(default)]
    #[ts(optional)]
    pub created_at: Option<String>,
}

impl TryFrom<DisposalRequestInput> for NewDisposalRequest {
    type Error = TimestampError;

    /// Parses the textual timestamps. A missing `created_at` becomes the
    /// current UTC time; an empty one is rejected like any malformed value.
    fn try_from(input: DisposalRequestInput) -> Result<Self, Self::Error> {
        let deadline = parse_timestamp("deadline", &input.deadline)?;
        let created_at = parse_optional_timestamp("created_at", input.created_at.as_deref())?
            .unwrap_or_else(|| chrono::Utc::now().naive_utc());

        Ok(NewDisposalRequest {
            address: input.address,
            business_id: input.business_id,
            longitude: input.longitude,
            latitude: input.latitude,
            expected_amt: input.expected_amt,
            waste_type: input.waste_type,
            deadline,
            created_at,
        })
    }
}

/// Detail view of a disposal request with its business and timeslots
/// resolved. `address` is exposed as `location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisposalRequestResponse {
    pub id: i32,
    pub location: String,
    pub expected_amt: i32,
    pub waste_type: String,
    #[ts(type = "string")]
    pub deadline: NaiveDateTime,
    #[ts(type = "string")]
    pub created_at: NaiveDateTime,
    pub business: BusinessResponse,
    pub timeslots: Vec<TimeslotResponse>,
    pub longitude: f64,
    pub latitude: f64,
}

impl DisposalRequestResponse {
    pub fn new(request: DisposalRequest, business: Business, timeslots: Vec<Timeslot>) -> Self {
        DisposalRequestResponse {
            id: request.id,
            location: request.address,
            expected_amt: request.expected_amt,
            waste_type: request.waste_type,
            deadline: request.deadline,
            created_at: request.created_at,
            business: business.into(),
            timeslots: timeslots.into_iter().map(TimeslotResponse::from).collect(),
            longitude: request.longitude,
            latitude: request.latitude,
        }
    }
}
