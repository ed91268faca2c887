//! Repair repository for database operations.

use domain::models::NewRepair;
use sqlx::PgPool;

use crate::entities::{CompanyRepairRow, RepairEntity, RoomRepairsPerYear};

/// Repository for repair-related database operations.
#[derive(Clone)]
pub struct RepairRepository {
    pool: PgPool,
}

impl RepairRepository {
    /// Creates a new RepairRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Highest repair id currently in use, `None` on an empty table.
    pub async fn max_id(&self) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(rid) FROM repair")
            .fetch_one(&self.pool)
            .await
    }

    /// The repair with this id, only if it was made on the given room.
    pub async fn find_for(
        &self,
        repair_id: i32,
        hotel_id: i32,
        room_no: i32,
    ) -> Result<Option<RepairEntity>, sqlx::Error> {
        sqlx::query_as::<_, RepairEntity>(
            r#"
            SELECT rid AS repair_id, hotelid AS hotel_id, roomno AS room_no,
                   mcompany AS company_id, repairdate AS repair_date,
                   description, repairtype AS repair_type
            FROM repair
            WHERE rid = $1 AND hotelid = $2 AND roomno = $3
            "#,
        )
        .bind(repair_id)
        .bind(hotel_id)
        .bind(room_no)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a repair under a client-generated id.
    pub async fn insert(&self, id: i32, repair: &NewRepair) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO repair (rid, hotelid, roomno, mcompany, repairdate, description, repairtype)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(repair.hotel_id)
        .bind(repair.room_no)
        .bind(repair.company_id)
        .bind(repair.repair_date)
        .bind(&repair.description)
        .bind(&repair.repair_type)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// All repairs performed by the company with this name.
    pub async fn list_by_company_name(
        &self,
        name: &str,
    ) -> Result<Vec<CompanyRepairRow>, sqlx::Error> {
        sqlx::query_as::<_, CompanyRepairRow>(
            r#"
            SELECT r.repairtype AS repair_type, r.hotelid AS hotel_id, r.roomno AS room_no
            FROM repair r
            JOIN maintenancecompany mc ON mc.cmpid = r.mcompany
            WHERE mc.name = $1
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
    }

    /// Repair counts for one room, grouped by calendar year.
    pub async fn counts_per_year(
        &self,
        hotel_id: i32,
        room_no: i32,
    ) -> Result<Vec<RoomRepairsPerYear>, sqlx::Error> {
        sqlx::query_as::<_, RoomRepairsPerYear>(
            r#"
            SELECT hotelid AS hotel_id, roomno AS room_no,
                   EXTRACT(YEAR FROM repairdate)::int AS year,
                   COUNT(rid)::bigint AS num_of_repairs
            FROM repair
            WHERE hotelid = $1 AND roomno = $2
            GROUP BY hotelid, roomno, year
            "#,
        )
        .bind(hotel_id)
        .bind(room_no)
        .fetch_all(&self.pool)
        .await
    }
}
