//! Maintenance company entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the maintenancecompany table.
///
/// Companies are unique by exact (name, address); only certified
/// companies may be attached to repairs.
#[derive(Debug, Clone, FromRow)]
pub struct MaintenanceCompanyEntity {
    pub company_id: i32,
    pub name: String,
    pub address: String,
    pub is_certified: bool,
}
