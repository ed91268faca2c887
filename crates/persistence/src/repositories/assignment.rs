//! Cleaning-assignment repository for database operations.

use domain::models::NewAssignment;
use sqlx::PgPool;

/// Repository for cleaning-staff room assignments.
#[derive(Clone)]
pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    /// Creates a new AssignmentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Highest assignment id currently in use, `None` on an empty table.
    pub async fn max_id(&self) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(asgid) FROM assigned")
            .fetch_one(&self.pool)
            .await
    }

    /// Insert an assignment under a client-generated id.
    pub async fn insert(&self, id: i32, assignment: &NewAssignment) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO assigned (asgid, staffid, hotelid, roomno)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(assignment.staff_ssn)
        .bind(assignment.hotel_id)
        .bind(assignment.room_no)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
