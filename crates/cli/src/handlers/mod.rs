//! Menu action handlers.
//!
//! Each handler gathers its input line by line, runs the staged
//! validation lookups, and executes at most one mutating statement —
//! or, for the reporting actions, one SELECT printed as a table.

pub mod bookings;
pub mod companies;
pub mod customers;
pub mod repairs;
pub mod reports;
pub mod requests;
pub mod rooms;
pub mod staff;
