//! Room entity (database row mapping).

use domain::tabular::Tabular;
use sqlx::FromRow;

/// Database row mapping for the room table, keyed by (hotelid, roomno).
#[derive(Debug, Clone, FromRow)]
pub struct RoomEntity {
    pub hotel_id: i32,
    pub room_no: i32,
    pub room_type: String,
}

impl Tabular for RoomEntity {
    fn columns() -> &'static [&'static str] {
        &["hotelid", "roomno", "roomtype"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.hotel_id.to_string(),
            self.room_no.to_string(),
            self.room_type.clone(),
        ]
    }
}
