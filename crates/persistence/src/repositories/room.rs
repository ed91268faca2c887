//! Room repository for database operations.

use chrono::NaiveDate;
use domain::models::NewRoom;
use sqlx::PgPool;

use crate::entities::RoomEntity;

/// Repository for room-related database operations.
#[derive(Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Creates a new RoomRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by its composite key.
    pub async fn find(
        &self,
        hotel_id: i32,
        room_no: i32,
    ) -> Result<Option<RoomEntity>, sqlx::Error> {
        sqlx::query_as::<_, RoomEntity>(
            r#"
            SELECT hotelid AS hotel_id, roomno AS room_no, roomtype AS room_type
            FROM room
            WHERE hotelid = $1 AND roomno = $2
            "#,
        )
        .bind(hotel_id)
        .bind(room_no)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a room into an existing hotel.
    pub async fn insert(&self, room: &NewRoom) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO room (hotelid, roomno, roomtype)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(room.hotel_id)
        .bind(room.room_no)
        .bind(&room.room_type)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Number of the hotel's rooms with no booking on `date`.
    pub async fn available_count(
        &self,
        hotel_id: i32,
        date: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM room
            WHERE hotelid = $1
              AND (hotelid, roomno) NOT IN (
                SELECT hotelid, roomno FROM booking WHERE bookingdate = $2
              )
            "#,
        )
        .bind(hotel_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await
    }

    /// The hotel's rooms with no booking anywhere in [start, end].
    pub async fn free_for_window(
        &self,
        hotel_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RoomEntity>, sqlx::Error> {
        sqlx::query_as::<_, RoomEntity>(
            r#"
            SELECT hotelid AS hotel_id, roomno AS room_no, roomtype AS room_type
            FROM room
            WHERE hotelid = $1
              AND (hotelid, roomno) NOT IN (
                SELECT hotelid, roomno FROM booking
                WHERE bookingdate BETWEEN $2 AND $3
              )
            "#,
        )
        .bind(hotel_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }
}
