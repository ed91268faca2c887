//! Booking repository for database operations.

use chrono::NaiveDate;
use domain::models::NewBooking;
use sqlx::PgPool;

use crate::entities::{BookingEntity, PriceRow};

/// Repository for booking-related database operations.
#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Creates a new BookingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Highest booking id currently in use, `None` on an empty table.
    pub async fn max_id(&self) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(bid) FROM booking")
            .fetch_one(&self.pool)
            .await
    }

    /// The booking holding (hotel, room) on `date`, if any.
    pub async fn find_for(
        &self,
        hotel_id: i32,
        room_no: i32,
        date: NaiveDate,
    ) -> Result<Option<BookingEntity>, sqlx::Error> {
        sqlx::query_as::<_, BookingEntity>(
            r#"
            SELECT bid AS booking_id, customer AS customer_id, hotelid AS hotel_id,
                   roomno AS room_no, bookingdate AS booking_date,
                   noofpeople AS occupants, price
            FROM booking
            WHERE hotelid = $1 AND roomno = $2 AND bookingdate = $3
            "#,
        )
        .bind(hotel_id)
        .bind(room_no)
        .bind(date)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a booking under a client-generated id.
    pub async fn insert(&self, id: i32, booking: &NewBooking) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO booking (bid, customer, hotelid, roomno, bookingdate, noofpeople, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(booking.customer_id)
        .bind(booking.hotel_id)
        .bind(booking.room_no)
        .bind(booking.booking_date)
        .bind(booking.occupants)
        .bind(booking.price)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Number of the hotel's bookings on `date`.
    pub async fn booked_count(&self, hotel_id: i32, date: NaiveDate) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM booking WHERE hotelid = $1 AND bookingdate = $2",
        )
        .bind(hotel_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await
    }

    /// The `k` highest-priced bookings in [start, end].
    pub async fn top_priced_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        k: i64,
    ) -> Result<Vec<BookingEntity>, sqlx::Error> {
        sqlx::query_as::<_, BookingEntity>(
            r#"
            SELECT bid AS booking_id, customer AS customer_id, hotelid AS hotel_id,
                   roomno AS room_no, bookingdate AS booking_date,
                   noofpeople AS occupants, price
            FROM booking
            WHERE bookingdate BETWEEN $1 AND $2
            ORDER BY price DESC
            LIMIT $3
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(k)
        .fetch_all(&self.pool)
        .await
    }

    /// The `k` highest prices the named customer has paid.
    pub async fn top_prices_for_customer(
        &self,
        first: &str,
        last: &str,
        k: i64,
    ) -> Result<Vec<PriceRow>, sqlx::Error> {
        sqlx::query_as::<_, PriceRow>(
            r#"
            SELECT b.price
            FROM booking b
            JOIN customer c ON b.customer = c.customerid
            WHERE c.fname = $1 AND c.lname = $2
            ORDER BY b.price DESC
            LIMIT $3
            "#,
        )
        .bind(first)
        .bind(last)
        .bind(k)
        .fetch_all(&self.pool)
        .await
    }

    /// Prices of the named customer's bookings at one hotel in [start, end].
    pub async fn prices_for_customer_at_hotel(
        &self,
        hotel_id: i32,
        first: &str,
        last: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceRow>, sqlx::Error> {
        sqlx::query_as::<_, PriceRow>(
            r#"
            SELECT b.price
            FROM booking b
            JOIN customer c ON b.customer = c.customerid
            WHERE b.hotelid = $1
              AND c.fname = $2 AND c.lname = $3
              AND b.bookingdate BETWEEN $4 AND $5
            "#,
        )
        .bind(hotel_id)
        .bind(first)
        .bind(last)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }
}
