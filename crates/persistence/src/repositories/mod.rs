//! Repository implementations.
//!
//! One repository per table; every method is one parameterized
//! statement. Mutating flows generate ids client-side from the
//! `max_id` lookups and validate referenced rows before inserting.

pub mod assignment;
pub mod booking;
pub mod customer;
pub mod hotel;
pub mod maintenance_company;
pub mod repair;
pub mod request;
pub mod room;
pub mod staff;

pub use assignment::AssignmentRepository;
pub use booking::BookingRepository;
pub use customer::CustomerRepository;
pub use hotel::HotelRepository;
pub use maintenance_company::MaintenanceCompanyRepository;
pub use repair::RepairRepository;
pub use request::RequestRepository;
pub use room::RoomRepository;
pub use staff::StaffRepository;

use sqlx::PgPool;

/// All repositories over one shared connection pool.
#[derive(Clone)]
pub struct Repositories {
    pub customers: CustomerRepository,
    pub hotels: HotelRepository,
    pub rooms: RoomRepository,
    pub bookings: BookingRepository,
    pub companies: MaintenanceCompanyRepository,
    pub repairs: RepairRepository,
    pub staff: StaffRepository,
    pub assignments: AssignmentRepository,
    pub requests: RequestRepository,
}

impl Repositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            customers: CustomerRepository::new(pool.clone()),
            hotels: HotelRepository::new(pool.clone()),
            rooms: RoomRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            companies: MaintenanceCompanyRepository::new(pool.clone()),
            repairs: RepairRepository::new(pool.clone()),
            staff: StaffRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool.clone()),
            requests: RequestRepository::new(pool),
        }
    }
}
