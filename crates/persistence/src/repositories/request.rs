//! Repair-request repository for database operations.

use domain::models::NewRepairRequest;
use sqlx::PgPool;

/// Repository for manager-raised repair requests.
#[derive(Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    /// Creates a new RequestRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Highest request id currently in use, `None` on an empty table.
    pub async fn max_id(&self) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(reqid) FROM request")
            .fetch_one(&self.pool)
            .await
    }

    /// Insert a repair request under a client-generated id.
    pub async fn insert(&self, id: i32, request: &NewRepairRequest) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO request (reqid, managerid, repairid, requestdate, description)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(request.manager_ssn)
        .bind(request.repair_id)
        .bind(request.request_date)
        .bind(&request.description)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
