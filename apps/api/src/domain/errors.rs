use thiserror::Error;

/// Errors raised by the domain layer
///
/// Raised synchronously at the point of violation. A failed construction
/// never yields a partially built value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid(message: impl Into<String>) -> Self {
        DomainError::InvalidArgument(message.into())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
