//! Database entity definitions.
//!
//! Entities are direct mappings to database rows. Report rows for
//! aggregate queries live in `reports`.

pub mod booking;
pub mod customer;
pub mod hotel;
pub mod maintenance_company;
pub mod repair;
pub mod reports;
pub mod room;
pub mod staff;

pub use booking::BookingEntity;
pub use customer::CustomerEntity;
pub use hotel::HotelEntity;
pub use maintenance_company::MaintenanceCompanyEntity;
pub use repair::RepairEntity;
pub use reports::{CompanyRepairCount, CompanyRepairRow, CountRow, PriceRow, RoomRepairsPerYear};
pub use room::RoomEntity;
pub use staff::StaffEntity;
