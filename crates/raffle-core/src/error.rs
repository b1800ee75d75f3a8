//! Error types for raffle-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaffleError {
    #[error("Prize value is required")]
    MissingValue,

    #[error("Prize quantity is required")]
    MissingQuantity,

    #[error("Invalid prize value '{0}': must be a positive whole number")]
    InvalidValue(String),

    #[error("Invalid prize quantity '{0}': must be a positive whole number")]
    InvalidQuantity(String),

    #[error("Attendee '{name}' has invalid attendance {attendance}")]
    InvalidAttendance { name: String, attendance: i64 },

    #[error("Attendee name cannot be empty")]
    EmptyName,
}

/// Result type alias
pub type RaffleResult<T> = Result<T, RaffleError>;
