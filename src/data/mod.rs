//! Data repositories.
//!
//! Each repository wraps one table and is generic over [`sea_orm::ConnectionTrait`],
//! so callers pass either the connection or an open transaction when they need
//! several statements to commit or roll back together.

pub mod category;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod session;
pub mod unit;
pub mod user;


use crate::error::data::DataError;

/// Enforces the single-row contract of `upsert_one`: zero or multiple
/// returned rows are defined errors, never an arbitrary pick.
pub(crate) fn expect_single<T>(mut rows: Vec<T>) -> Result<T, DataError> {
    match rows.len() {
        1 => Ok(rows.remove(0)),
        0 => Err(DataError::NoRowsReturned),
        n => Err(DataError::MultipleRowsReturned(n)),
    }
}
