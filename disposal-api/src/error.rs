//! Errors raised by store operations that validate before writing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A referenced parent row does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error(transparent)]
    Database(#[from] diesel::result::Error),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        StoreError::NotFound { entity, id }
    }
}
