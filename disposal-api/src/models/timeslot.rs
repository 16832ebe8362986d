use chrono::NaiveDateTime;
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::disposal_request::DisposalRequest;
use crate::schema::timeslots;
use crate::timestamp::{TimestampError, parse_timestamp};

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
#[diesel(belongs_to(DisposalRequest, foreign_key = disposal_request_id))]
#[diesel(table_name = timeslots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Timeslot {
    pub id: i32,
    #[ts(type = "string")]
    pub start_time: NaiveDateTime,
    #[ts(type = "string")]
    pub end_time: NaiveDateTime,
    pub disposal_request_id: Option<i32>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = timeslots)]
pub struct NewTimeslot {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub disposal_request_id: Option<i32>,
}

/// Timeslot payload. `disposal_request_id` is accepted so existing clients
/// keep working, but the owning request always comes from the URL.
#[derive(Debug, Clone, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct TimeslotInput {
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    #[ts(optional)]
    pub disposal_request_id: Option<i32>,
}

impl NewTimeslot {
    /// Builds an insertable timeslot attached to `request_id`, ignoring any
    /// request id carried in the payload.
    pub fn for_request(request_id: i32, input: &TimeslotInput) -> Result<Self, TimestampError> {
        Ok(NewTimeslot {
            start_time: parse_timestamp("start_time", &input.start_time)?,
            end_time: parse_timestamp("end_time", &input.end_time)?,
            disposal_request_id: Some(request_id),
        })
    }
}

/// Timeslot as nested inside a disposal request detail. The back-reference
/// is dropped since the parent is already known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimeslotResponse {
    pub id: i32,
    #[ts(type = "string")]
    pub start_time: NaiveDateTime,
    #[ts(type = "string")]
    pub end_time: NaiveDateTime,
}

impl From<Timeslot> for TimeslotResponse {
    fn from(slot: Timeslot) -> Self {
        TimeslotResponse {
            id: slot.id,
            start_time: slot.start_time,
            end_time: slot.end_time,
        }
    }
}
