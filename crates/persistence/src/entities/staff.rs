//! Staff entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the staff table. `employer_id` is the
/// hotel the member works for.
#[derive(Debug, Clone, FromRow)]
pub struct StaffEntity {
    pub ssn: i32,
    pub fname: String,
    pub lname: String,
    pub role: String,
    pub employer_id: i32,
}
