//! Staff repository for database operations.

use domain::models::HOUSE_CLEANING_ROLE;
use sqlx::PgPool;

use crate::entities::StaffEntity;

/// Repository for staff-related database operations.
#[derive(Clone)]
pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    /// Creates a new StaffRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The staff member with this ssn, only if they clean rooms for
    /// the given hotel.
    pub async fn find_house_cleaner(
        &self,
        ssn: i32,
        hotel_id: i32,
    ) -> Result<Option<StaffEntity>, sqlx::Error> {
        sqlx::query_as::<_, StaffEntity>(
            r#"
            SELECT ssn, fname, lname, role, employerid AS employer_id
            FROM staff
            WHERE ssn = $1 AND employerid = $2 AND role = $3
            "#,
        )
        .bind(ssn)
        .bind(hotel_id)
        .bind(HOUSE_CLEANING_ROLE)
        .fetch_optional(&self.pool)
        .await
    }
}
