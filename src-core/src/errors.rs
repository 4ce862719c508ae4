use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Expected {expected} yearly targets, got {actual}")]
    TargetCount { expected: usize, actual: usize },

    #[error("Yearly targets must cover years 1..10 in ascending order: position {position} holds year {year}")]
    NonContiguousYear { position: usize, year: u32 },

    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: String, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: String },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ValidationError {
    pub(crate) fn out_of_range(field: &str, value: i64, min: i64, max: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        }
    }
}

/// Rejects NaN and infinities so they never reach the arithmetic.
pub(crate) fn ensure_finite(field: &str, value: f64) -> std::result::Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFiniteAmount {
            field: field.to_string(),
        })
    }
}

pub(crate) fn ensure_non_negative(
    field: &str,
    value: f64,
) -> std::result::Result<f64, ValidationError> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}
