//! Booking entity (database row mapping).

use chrono::NaiveDate;
use domain::tabular::Tabular;
use sqlx::FromRow;

/// Database row mapping for the booking table.
///
/// At most one booking exists per (hotelid, roomno, bookingdate);
/// the booking flow checks before inserting.
#[derive(Debug, Clone, FromRow)]
pub struct BookingEntity {
    pub booking_id: i32,
    pub customer_id: i32,
    pub hotel_id: i32,
    pub room_no: i32,
    pub booking_date: NaiveDate,
    pub occupants: i32,
    pub price: f64,
}

impl Tabular for BookingEntity {
    fn columns() -> &'static [&'static str] {
        &[
            "bid",
            "customer",
            "hotelid",
            "roomno",
            "bookingdate",
            "noofpeople",
            "price",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.booking_id.to_string(),
            self.customer_id.to_string(),
            self.hotel_id.to_string(),
            self.room_no.to_string(),
            self.booking_date.to_string(),
            self.occupants.to_string(),
            self.price.to_string(),
        ]
    }
}
