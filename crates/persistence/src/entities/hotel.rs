//! Hotel entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the hotel table. `manager` is a staff ssn.
#[derive(Debug, Clone, FromRow)]
pub struct HotelEntity {
    pub hotel_id: i32,
    pub manager: i32,
}
