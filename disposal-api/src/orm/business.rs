use diesel::prelude::*;

use super::db::last_insert_rowid;
use crate::models::{Business, NewBusiness};

/// Inserts a business and returns it with its generated id.
///
/// `phone_number` and `email` are unique in the table; a duplicate fails
/// with a `UniqueViolation` database error and nothing is written.
pub fn insert_business(
    conn: &mut SqliteConnection,
    new_business: NewBusiness,
) -> Result<Business, diesel::result::Error> {
    use crate::schema::businesses::dsl::*;

    diesel::insert_into(businesses).values(&new_business).execute(conn)?;

    let last_id = last_insert_rowid(conn)?;
    businesses.filter(id.eq(last_id)).select(Business::as_select()).first(conn)
}

/// Try to find a business by id.
/// Returns Ok(Some(Business)) if found, Ok(None) if not, Err on DB error.
pub fn get_business_by_id(
    conn: &mut SqliteConnection,
    business_id: i32,
) -> Result<Option<Business>, diesel::result::Error> {
    use crate::schema::businesses::dsl::*;
    businesses.filter(id.eq(business_id)).select(Business::as_select()).first(conn).optional()
}

/// Number of registered businesses.
pub fn count_businesses(conn: &mut SqliteConnection) -> Result<i64, diesel::result::Error> {
    use crate::schema::businesses::dsl::*;
    businesses.count().get_result(conn)
}
