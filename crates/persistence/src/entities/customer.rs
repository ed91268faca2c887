//! Customer entity (database row mapping).

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database row mapping for the customer table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerEntity {
    pub customer_id: i32,
    pub fname: String,
    pub lname: String,
    pub address: String,
    pub phno: i64,
    pub dob: NaiveDate,
    pub gender: String,
}
