use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub(crate) enum DomainError {
    #[error("{0}")]
    Unauthenticated(&'static str),

    #[error("invalid token")]
    InvalidToken,

    #[error("forbidden")]
    Forbidden,

    #[error("invalid input: {}", .0.join(" "))]
    InvalidInput(Vec<String>),

    #[error("resource already exists: {0}")]
    AlreadyExists(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub(crate) const INVALID_CREDENTIALS: &'static str = "invalid credentials";

    pub(crate) fn invalid_credentials() -> Self {
        DomainError::Unauthenticated(Self::INVALID_CREDENTIALS)
    }
}
