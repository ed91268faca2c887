//! Repair entity (database row mapping).

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database row mapping for the repair table.
#[derive(Debug, Clone, FromRow)]
pub struct RepairEntity {
    pub repair_id: i32,
    pub hotel_id: i32,
    pub room_no: i32,
    pub company_id: i32,
    pub repair_date: NaiveDate,
    pub description: String,
    pub repair_type: String,
}
