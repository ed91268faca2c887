//! Maintenance company repository for database operations.

use domain::models::NewMaintenanceCompany;
use sqlx::PgPool;

use crate::entities::{CompanyRepairCount, MaintenanceCompanyEntity};

/// Repository for maintenance-company database operations.
#[derive(Clone)]
pub struct MaintenanceCompanyRepository {
    pool: PgPool,
}

impl MaintenanceCompanyRepository {
    /// Creates a new MaintenanceCompanyRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Highest company id currently in use, `None` on an empty table.
    pub async fn max_id(&self) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(cmpid) FROM maintenancecompany")
            .fetch_one(&self.pool)
            .await
    }

    /// Company with exactly this name and address, if present.
    ///
    /// Companies are considered duplicates only on an exact match of both.
    pub async fn find_by_name_and_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Option<MaintenanceCompanyEntity>, sqlx::Error> {
        sqlx::query_as::<_, MaintenanceCompanyEntity>(
            r#"
            SELECT cmpid AS company_id, name, address, iscertified AS is_certified
            FROM maintenancecompany
            WHERE name = $1 AND address = $2
            "#,
        )
        .bind(name)
        .bind(address)
        .fetch_optional(&self.pool)
        .await
    }

    /// The company, only if it exists and is certified.
    pub async fn find_certified(
        &self,
        company_id: i32,
    ) -> Result<Option<MaintenanceCompanyEntity>, sqlx::Error> {
        sqlx::query_as::<_, MaintenanceCompanyEntity>(
            r#"
            SELECT cmpid AS company_id, name, address, iscertified AS is_certified
            FROM maintenancecompany
            WHERE cmpid = $1 AND iscertified
            "#,
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a company under a client-generated id.
    pub async fn insert(
        &self,
        id: i32,
        company: &NewMaintenanceCompany,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO maintenancecompany (cmpid, name, address, iscertified)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(&company.name)
        .bind(&company.address)
        .bind(company.certified)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// The `k` companies with the most repairs, busiest first.
    pub async fn top_by_repair_count(
        &self,
        k: i64,
    ) -> Result<Vec<CompanyRepairCount>, sqlx::Error> {
        sqlx::query_as::<_, CompanyRepairCount>(
            r#"
            SELECT mc.name, COUNT(r.rid)::bigint AS num_of_repairs
            FROM repair r
            JOIN maintenancecompany mc ON mc.cmpid = r.mcompany
            GROUP BY mc.name
            ORDER BY num_of_repairs DESC
            LIMIT $1
            "#,
        )
        .bind(k)
        .fetch_all(&self.pool)
        .await
    }
}
