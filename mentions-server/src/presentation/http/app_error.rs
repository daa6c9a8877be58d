use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tower::BoxError;

/// Failures raised outside GraphQL execution. Resolver errors travel in the
/// GraphQL response body instead.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("not found")]
    NotFound,

    #[error("request timed out")]
    Timeout,

    #[error("internal error")]
    Internal(#[source] BoxError),
}

impl From<BoxError> for AppError {
    fn from(err: BoxError) -> Self {
        if err.is::<tower::timeout::error::Elapsed>() {
            AppError::Timeout
        } else {
            AppError::Internal(err)
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Internal(err) => {
                tracing::error!(error = %err, "request failed outside GraphQL");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use tower::BoxError;

    use super::AppError;

    #[test]
    fn elapsed_maps_to_request_timeout() {
        let err: BoxError = Box::new(tower::timeout::error::Elapsed::new());
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn unknown_errors_are_internal() {
        let err: BoxError = "boom".into();
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
