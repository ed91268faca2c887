//! Domain layer for the hotel operations client.
//!
//! This crate contains:
//! - Domain models shared by the CLI and persistence layers
//! - Date parsing for the two interactive date formats
//! - Client-side id generation
//! - The `Tabular` trait driving tab-separated report output

pub mod dates;
pub mod ids;
pub mod models;
pub mod tabular;
