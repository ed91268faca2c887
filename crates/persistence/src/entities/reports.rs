//! Typed rows for the aggregate report queries.

use domain::tabular::Tabular;
use sqlx::FromRow;

/// Single COUNT(*) result, printed as a one-cell table.
#[derive(Debug, Clone)]
pub struct CountRow {
    pub count: i64,
}

impl Tabular for CountRow {
    fn columns() -> &'static [&'static str] {
        &["count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.count.to_string()]
    }
}

/// One booking price, for the per-customer price reports.
#[derive(Debug, Clone, FromRow)]
pub struct PriceRow {
    pub price: f64,
}

impl Tabular for PriceRow {
    fn columns() -> &'static [&'static str] {
        &["price"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.price.to_string()]
    }
}

/// One repair performed by a maintenance company.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyRepairRow {
    pub repair_type: String,
    pub hotel_id: i32,
    pub room_no: i32,
}

impl Tabular for CompanyRepairRow {
    fn columns() -> &'static [&'static str] {
        &["repairtype", "hotelid", "roomno"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.repair_type.clone(),
            self.hotel_id.to_string(),
            self.room_no.to_string(),
        ]
    }
}

/// Repair count per maintenance company.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyRepairCount {
    pub name: String,
    pub num_of_repairs: i64,
}

impl Tabular for CompanyRepairCount {
    fn columns() -> &'static [&'static str] {
        &["name", "num_of_repairs"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.num_of_repairs.to_string()]
    }
}

/// Repair count for one room in one calendar year.
#[derive(Debug, Clone, FromRow)]
pub struct RoomRepairsPerYear {
    pub hotel_id: i32,
    pub room_no: i32,
    pub year: i32,
    pub num_of_repairs: i64,
}

impl Tabular for RoomRepairsPerYear {
    fn columns() -> &'static [&'static str] {
        &["hotelid", "roomno", "year", "num_of_repairs"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.hotel_id.to_string(),
            self.room_no.to_string(),
            self.year.to_string(),
            self.num_of_repairs.to_string(),
        ]
    }
}
