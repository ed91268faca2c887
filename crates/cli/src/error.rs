//! Error type for the interactive handlers.

use domain::dates::DateParseError;
use thiserror::Error;

/// Errors that abort the current menu action.
///
/// Database, I/O, and parse failures end the handler; the menu loop
/// reports them and keeps running. Validation failures are not errors:
/// handlers print their diagnostic and return normally.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("input error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid number: {0}")]
    InvalidInt(#[from] std::num::ParseIntError),

    #[error("invalid number: {0}")]
    InvalidFloat(#[from] std::num::ParseFloatError),

    #[error(transparent)]
    InvalidDate(#[from] DateParseError),
}
