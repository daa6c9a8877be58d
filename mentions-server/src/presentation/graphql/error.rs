use async_graphql::{Error, ErrorExtensions};

use crate::domain::error::DomainError;

impl DomainError {
    pub(crate) fn code(&self) -> &'static str {
        match self {
            DomainError::Unauthenticated(_) | DomainError::InvalidToken => "UNAUTHENTICATED",
            DomainError::Forbidden => "FORBIDDEN",
            DomainError::InvalidInput(_) => "BAD_USER_INPUT",
            DomainError::AlreadyExists(_) => "ALREADY_EXISTS",
            DomainError::NotFound(_) => "NOT_FOUND",
            DomainError::Unexpected(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for DomainError {
    fn extend(&self) -> Error {
        let message = match self {
            DomainError::Unexpected(detail) => {
                tracing::error!(error = %detail, "operation failed");
                "internal error".to_string()
            }
            other => other.to_string(),
        };

        let code = self.code();
        let field_errors = match self {
            DomainError::InvalidInput(errors) => Some(errors.clone()),
            _ => None,
        };

        Error::new(message).extend_with(move |_, ext| {
            ext.set("code", code);
            if let Some(errors) = &field_errors {
                ext.set("errors", errors.clone());
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use async_graphql::ErrorExtensions;

    use crate::domain::error::DomainError;

    #[test]
    fn unexpected_errors_are_masked() {
        let err = DomainError::Unexpected("db password is hunter2".to_string()).extend();
        assert_eq!(err.message, "internal error");
    }

    #[test]
    fn codes_follow_error_kind() {
        assert_eq!(DomainError::InvalidToken.code(), "UNAUTHENTICATED");
        assert_eq!(DomainError::Forbidden.code(), "FORBIDDEN");
        assert_eq!(DomainError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(DomainError::AlreadyExists("email".into()).code(), "ALREADY_EXISTS");
        assert_eq!(DomainError::InvalidInput(vec![]).code(), "BAD_USER_INPUT");
    }
}
