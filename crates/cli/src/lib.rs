//! Menu-driven client for the hotel operations database.
//!
//! The binary wires command-line arguments and configuration into a
//! connection pool, then hands an interactive console and the
//! repositories to the menu loop. Everything else lives here so the
//! flows can be driven end to end from tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod input;
pub mod logging;
pub mod menu;
pub mod render;
