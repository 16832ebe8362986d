use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::businesses;

#[derive(
    Queryable,
    Selectable,
    Identifiable,
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    TS,
)]
#[diesel(table_name = businesses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Business {
    pub id: i32,
    pub name: String,
    #[ts(type = "number")]
    pub phone_number: i64,
    pub email: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = businesses)]
pub struct NewBusiness {
    pub name: String,
    pub phone_number: i64,
    pub email: String,
}

// For API inputs
#[derive(Debug, Clone, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct BusinessInput {
    pub name: String,
    #[ts(type = "number")]
    pub phone_number: i64,
    pub email: String,
}

impl From<BusinessInput> for NewBusiness {
    fn from(input: BusinessInput) -> Self {
        NewBusiness {
            name: input.name,
            phone_number: input.phone_number,
            email: input.email,
        }
    }
}

/// Business as nested inside a disposal request detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BusinessResponse {
    pub id: i32,
    pub name: String,
    #[ts(type = "number")]
    pub phone_number: i64,
    pub email: String,
}

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        BusinessResponse {
            id: business.id,
            name: business.name,
            phone_number: business.phone_number,
            email: business.email,
        }
    }
}
