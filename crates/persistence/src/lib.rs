//! Persistence layer for the hotel operations client.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations (the parameterized statements)

pub mod db;
pub mod entities;
pub mod repositories;
