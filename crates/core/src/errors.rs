//! Core error types for the HealthHub registry.
//!
//! Almost every operation in the core is total: lookups return `Option`,
//! mutators accept any input. The variants below cover the few calls that
//! can be made incorrectly.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A structural rule of the session was broken, e.g. installing a
    /// second process-wide registry.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// The user factory was asked for a role it does not know.
    #[error("Unknown user type: {0}")]
    UnknownVariant(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for caller-supplied field bags.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to decode field bag: {0}")]
    FieldBag(#[from] serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::FieldBag(err))
    }
}
