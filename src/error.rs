//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the scheduling and cutting entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input failed validation. Carries every detected problem.
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl Error {
    /// Validation errors behind this error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Error::InvalidInput(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::InvalidInput(errors)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
