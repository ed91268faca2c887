//! Hotel repository for database operations.

use sqlx::PgPool;

use crate::entities::HotelEntity;

/// Repository for hotel-related database operations.
#[derive(Clone)]
pub struct HotelRepository {
    pool: PgPool,
}

impl HotelRepository {
    /// Creates a new HotelRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a hotel by id.
    pub async fn find_by_id(&self, hotel_id: i32) -> Result<Option<HotelEntity>, sqlx::Error> {
        sqlx::query_as::<_, HotelEntity>(
            r#"
            SELECT hotelid AS hotel_id, manager
            FROM hotel
            WHERE hotelid = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// The hotel, only if the given ssn is its manager.
    ///
    /// Repair requests may be raised only by the hotel's manager.
    pub async fn find_managed(
        &self,
        hotel_id: i32,
        manager_ssn: i32,
    ) -> Result<Option<HotelEntity>, sqlx::Error> {
        sqlx::query_as::<_, HotelEntity>(
            r#"
            SELECT hotelid AS hotel_id, manager
            FROM hotel
            WHERE hotelid = $1 AND manager = $2
            "#,
        )
        .bind(hotel_id)
        .bind(manager_ssn)
        .fetch_optional(&self.pool)
        .await
    }
}
