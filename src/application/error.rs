// src/application/error.rs
use crate::application::validation::FieldErrors;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// `entity` is the display name used in the 404 body, e.g. `Author`.
    #[error("no {entity} matches the given query")]
    NotFound { entity: &'static str },
}

impl ApplicationError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }
}

impl From<FieldErrors> for ApplicationError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
