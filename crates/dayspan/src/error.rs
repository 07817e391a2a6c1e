//! Error types for dayspan operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DayspanError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid direction: {0}")]
    InvalidDirection(String),
}

pub type Result<T> = std::result::Result<T, DayspanError>;
