use diesel::prelude::*;

use super::business::get_business_by_id;
use super::db::last_insert_rowid;
use super::timeslot::get_timeslots_for_request;
use crate::error::StoreError;
use crate::models::{Business, DisposalRequest, DisposalRequestResponse, NewDisposalRequest};

/// Number of rows returned by one page of [`list_disposal_requests`].
pub const PAGE_SIZE: i64 = 100;

/// Inserts a disposal request as given, without checking its business.
pub fn insert_disposal_request(
    conn: &mut SqliteConnection,
    new_request: NewDisposalRequest,
) -> Result<DisposalRequest, diesel::result::Error> {
    use crate::schema::disposal_requests::dsl::*;

    diesel::insert_into(disposal_requests).values(&new_request).execute(conn)?;

    let last_id = last_insert_rowid(conn)?;
    disposal_requests
        .filter(id.eq(last_id))
        .select(DisposalRequest::as_select())
        .first(conn)
}

/// Creates a disposal request for an existing business.
///
/// Returns `StoreError::NotFound` without writing anything when
/// `business_id` does not resolve.
///
/// Runs as an immediate transaction: the write lock is held from the
/// parent check through the insert, so concurrent writers queue on the
/// busy timeout.
pub fn create_disposal_request(
    conn: &mut SqliteConnection,
    new_request: NewDisposalRequest,
) -> Result<DisposalRequest, StoreError> {
    conn.immediate_transaction(|c| {
        if get_business_by_id(c, new_request.business_id)?.is_none() {
            return Err(StoreError::not_found("Business", new_request.business_id));
        }
        Ok(insert_disposal_request(c, new_request)?)
    })
}

/// Gets a disposal request by its ID.
pub fn get_disposal_request_by_id(
    conn: &mut SqliteConnection,
    request_id: i32,
) -> Result<Option<DisposalRequest>, diesel::result::Error> {
    use crate::schema::disposal_requests::dsl::*;
    disposal_requests
        .filter(id.eq(request_id))
        .select(DisposalRequest::as_select())
        .first(conn)
        .optional()
}

/// One page of disposal requests in insertion (id) order, skipping the
/// first `offset` rows.
pub fn list_disposal_requests(
    conn: &mut SqliteConnection,
    offset: i64,
) -> Result<Vec<DisposalRequest>, diesel::result::Error> {
    use crate::schema::disposal_requests::dsl::*;
    disposal_requests
        .order(id.asc())
        .limit(PAGE_SIZE)
        .offset(offset)
        .select(DisposalRequest::as_select())
        .load(conn)
}

/// Loads a disposal request together with its business and timeslots.
///
/// Both reads run in one transaction so the projection reflects a single
/// snapshot of the store.
pub fn get_disposal_request_detail(
    conn: &mut SqliteConnection,
    request_id: i32,
) -> Result<DisposalRequestResponse, StoreError> {
    use crate::schema::{businesses, disposal_requests};

    conn.transaction(|c| {
        let (request, business) = disposal_requests::table
            .inner_join(businesses::table)
            .filter(disposal_requests::id.eq(request_id))
            .select((DisposalRequest::as_select(), Business::as_select()))
            .first::<(DisposalRequest, Business)>(c)
            .optional()?
            .ok_or_else(|| StoreError::not_found("Disposal request", request_id))?;

        let timeslots = get_timeslots_for_request(c, &request)?;
        Ok(DisposalRequestResponse::new(request, business, timeslots))
    })
}

/// Number of disposal requests across all businesses.
pub fn count_disposal_requests(conn: &mut SqliteConnection) -> Result<i64, diesel::result::Error> {
    use crate::schema::disposal_requests::dsl::*;
    disposal_requests.count().get_result(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewBusiness, NewTimeslot};
    use crate::orm::business::insert_business;
    use crate::orm::testing::setup_test_db;
    use crate::orm::timeslot::create_timeslot_for_request;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .unwrap()
    }

    fn day(d: u32) -> NaiveDateTime {
        at(d, 0)
    }

    fn seed_business(conn: &mut SqliteConnection) -> Business {
        insert_business(
            conn,
            NewBusiness {
                name: "Corner Cafe".to_string(),
                phone_number: 555,
                email: "a@x.com".to_string(),
            },
        )
        .expect("Failed to insert business")
    }

    fn new_request(business_id: i32, address: &str) -> NewDisposalRequest {
        NewDisposalRequest {
            address: address.to_string(),
            business_id,
            longitude: -122.3321,
            latitude: 47.6062,
            expected_amt: 10,
            waste_type: "organic".to_string(),
            deadline: day(1),
            created_at: day(1),
        }
    }

    #[test]
    fn test_create_disposal_request() {
        let mut conn = setup_test_db();
        let business = seed_business(&mut conn);

        let request = create_disposal_request(&mut conn, new_request(business.id, "1 Main St"))
            .expect("Failed to create request");

        assert!(request.id > 0);
        assert_eq!(request.business_id, business.id);
        assert_eq!(request.address, "1 Main St");
        assert_eq!(request.expected_amt, 10);
        assert_eq!(request.waste_type, "organic");
        assert_eq!(request.deadline, day(1));
    }

    #[test]
    fn test_create_disposal_request_unknown_business() {
        let mut conn = setup_test_db();

        let result = create_disposal_request(&mut conn, new_request(12345, "Nowhere"));

        assert!(matches!(
            result,
            Err(StoreError::NotFound { entity: "Business", id: 12345 })
        ));
        assert_eq!(count_disposal_requests(&mut conn).unwrap(), 0);
    }

    #[test]
    fn test_list_disposal_requests_with_offset() {
        let mut conn = setup_test_db();
        let business = seed_business(&mut conn);

        for n in 0..5 {
            create_disposal_request(&mut conn, new_request(business.id, &format!("{} Elm St", n)))
                .unwrap();
        }

        let all = list_disposal_requests(&mut conn, 0).unwrap();
        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

        let tail = list_disposal_requests(&mut conn, 3).unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].address, "3 Elm St");
        assert_eq!(tail[1].address, "4 Elm St");

        let past_end = list_disposal_requests(&mut conn, 10).unwrap();
        assert!(past_end.is_empty());
    }

    #[test]
    fn test_list_disposal_requests_page_size() {
        let mut conn = setup_test_db();
        let business = seed_business(&mut conn);

        for n in 0..(PAGE_SIZE + 5) {
            create_disposal_request(&mut conn, new_request(business.id, &format!("{} Oak Ave", n)))
                .unwrap();
        }

        assert_eq!(list_disposal_requests(&mut conn, 0).unwrap().len() as i64, PAGE_SIZE);
        assert_eq!(list_disposal_requests(&mut conn, PAGE_SIZE).unwrap().len(), 5);
    }

    #[test]
    fn test_get_disposal_request_detail() {
        let mut conn = setup_test_db();
        let business = seed_business(&mut conn);
        let request = create_disposal_request(&mut conn, new_request(business.id, "1 Main St")).unwrap();

        for hour in [8, 12, 16] {
            let slot = NewTimeslot {
                start_time: at(2, hour),
                end_time: at(2, hour + 2),
                disposal_request_id: None,
            };
            create_timeslot_for_request(&mut conn, request.id, slot).unwrap();
        }

        let detail = get_disposal_request_detail(&mut conn, request.id).expect("detail should load");

        assert_eq!(detail.id, request.id);
        assert_eq!(detail.location, "1 Main St");
        assert_eq!(detail.business.id, business.id);
        assert_eq!(detail.business.email, "a@x.com");
        assert_eq!(detail.timeslots.len(), 3);
        assert_eq!(detail.timeslots[0].start_time, at(2, 8));
    }

    #[test]
    fn test_get_disposal_request_detail_without_timeslots() {
        let mut conn = setup_test_db();
        let business = seed_business(&mut conn);
        let request = create_disposal_request(&mut conn, new_request(business.id, "1 Main St")).unwrap();

        let detail = get_disposal_request_detail(&mut conn, request.id).unwrap();
        assert!(detail.timeslots.is_empty());
    }

    #[test]
    fn test_get_disposal_request_detail_missing() {
        let mut conn = setup_test_db();

        let result = get_disposal_request_detail(&mut conn, 1);
        assert!(matches!(
            result,
            Err(StoreError::NotFound { entity: "Disposal request", id: 1 })
        ));
    }
}
