// src/domain/constraints.rs
//! Length rules shared by the entity value objects. Lengths are counted in
//! Unicode scalar values, not bytes.
use crate::domain::errors::{DomainError, DomainResult};

/// Upper bound of every bounded text column (names, titles).
pub const MAX_TEXT_LENGTH: usize = 255;

pub fn max_length(value: &str, max: usize) -> DomainResult<()> {
    if value.chars().count() > max {
        Err(DomainError::Validation(format!(
            "Longer than maximum length {max}."
        )))
    } else {
        Ok(())
    }
}

pub fn exact_length(value: &str, len: usize) -> DomainResult<()> {
    if value.chars().count() != len {
        Err(DomainError::Validation(format!("Length must be {len}.")))
    } else {
        Ok(())
    }
}

/// Validates a surrogate key supplied by a client.
pub fn positive_id(id: i64) -> DomainResult<i64> {
    if id <= 0 {
        Err(DomainError::Validation(
            "Must be greater than or equal to 1.".into(),
        ))
    } else {
        Ok(id)
    }
}
