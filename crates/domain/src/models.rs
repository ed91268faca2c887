//! Domain models shared by the CLI and persistence layers.
//!
//! These are the records collected interactively before an insert.
//! Row ids are generated separately and passed alongside, so none of
//! these carry one.

use chrono::NaiveDate;

/// Staff role that may be assigned to clean rooms.
pub const HOUSE_CLEANING_ROLE: &str = "HouseCleaning";

/// Customer details collected at registration.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: i64,
    pub date_of_birth: NaiveDate,
    pub gender: String,
}

/// A room added to an existing hotel.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub hotel_id: i32,
    pub room_no: i32,
    pub room_type: String,
}

/// A maintenance company, unique by exact (name, address).
#[derive(Debug, Clone)]
pub struct NewMaintenanceCompany {
    pub name: String,
    pub address: String,
    pub certified: bool,
}

/// A repair performed on a room by a certified company.
#[derive(Debug, Clone)]
pub struct NewRepair {
    pub hotel_id: i32,
    pub room_no: i32,
    pub company_id: i32,
    pub repair_date: NaiveDate,
    pub description: String,
    pub repair_type: String,
}

/// A booking of one room for one customer on one date.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub customer_id: i32,
    pub hotel_id: i32,
    pub room_no: i32,
    pub booking_date: NaiveDate,
    pub occupants: i32,
    pub price: f64,
}

/// A cleaning-staff-to-room assignment.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub staff_ssn: i32,
    pub hotel_id: i32,
    pub room_no: i32,
}

/// A repair follow-up raised by the hotel's manager.
#[derive(Debug, Clone)]
pub struct NewRepairRequest {
    pub manager_ssn: i32,
    pub repair_id: i32,
    pub request_date: NaiveDate,
    pub description: String,
}

/// Outcome of matching customers by first and last name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// No customer has this name.
    NotFound,
    /// Exactly one customer matches.
    Unique,
    /// Several customers share the name; an explicit id is required.
    Ambiguous,
}

impl NameMatch {
    /// Classifies a name-match row count.
    pub fn classify(count: i64) -> Self {
        match count {
            0 => NameMatch::NotFound,
            1 => NameMatch::Unique,
            _ => NameMatch::Ambiguous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_name_matches() {
        assert_eq!(NameMatch::classify(0), NameMatch::NotFound);
        assert_eq!(NameMatch::classify(1), NameMatch::Unique);
        assert_eq!(NameMatch::classify(2), NameMatch::Ambiguous);
        assert_eq!(NameMatch::classify(17), NameMatch::Ambiguous);
    }
}
