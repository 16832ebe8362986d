use diesel::prelude::*;

use super::db::last_insert_rowid;
use super::disposal_request::get_disposal_request_by_id;
use crate::error::StoreError;
use crate::models::{DisposalRequest, NewTimeslot, Timeslot};

/// Inserts a timeslot as given, without checking its owning request.
pub fn insert_timeslot(
    conn: &mut SqliteConnection,
    new_timeslot: NewTimeslot,
) -> Result<Timeslot, diesel::result::Error> {
    use crate::schema::timeslots::dsl::*;

    diesel::insert_into(timeslots).values(&new_timeslot).execute(conn)?;

    let last_id = last_insert_rowid(conn)?;
    timeslots.filter(id.eq(last_id)).select(Timeslot::as_select()).first(conn)
}

/// Creates a timeslot under `request_id`.
///
/// The request must exist; otherwise nothing is written and
/// `StoreError::NotFound` is returned. The stored `disposal_request_id` is
/// always `request_id`. Overlapping or duplicate slots are allowed.
///
/// Runs as an immediate transaction: the write lock is held from the
/// parent check through the insert, so concurrent writers queue on the
/// busy timeout.
pub fn create_timeslot_for_request(
    conn: &mut SqliteConnection,
    request_id: i32,
    mut new_timeslot: NewTimeslot,
) -> Result<Timeslot, StoreError> {
    new_timeslot.disposal_request_id = Some(request_id);

    conn.immediate_transaction(|c| {
        if get_disposal_request_by_id(c, request_id)?.is_none() {
            return Err(StoreError::not_found("Disposal request", request_id));
        }
        Ok(insert_timeslot(c, new_timeslot)?)
    })
}

/// All timeslots owned by `request`, ordered by id.
pub fn get_timeslots_for_request(
    conn: &mut SqliteConnection,
    request: &DisposalRequest,
) -> Result<Vec<Timeslot>, diesel::result::Error> {
    use crate::schema::timeslots::dsl::*;
    Timeslot::belonging_to(request)
        .order(id.asc())
        .select(Timeslot::as_select())
        .load(conn)
}

/// Number of timeslots across all requests.
pub fn count_timeslots(conn: &mut SqliteConnection) -> Result<i64, diesel::result::Error> {
    use crate::schema::timeslots::dsl::*;
    timeslots.count().get_result(conn)
}
