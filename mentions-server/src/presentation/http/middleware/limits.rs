use std::time::Duration;

use axum::{Router, error_handling::HandleErrorLayer};
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;

use crate::infrastructure::settings::Settings;
use crate::presentation::http::app_error::AppError;

/// Body size cap (uploads included), in-flight request cap and per-request timeout.
pub(crate) fn apply_limits(router: Router, settings: &Settings) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|err: BoxError| async move {
                AppError::from(err)
            }))
            .concurrency_limit(settings.http_concurrency_limit)
            .timeout(Duration::from_secs(settings.http_request_timeout_secs))
            .layer(RequestBodyLimitLayer::new(
                settings.http_request_body_limit_bytes,
            )),
    )
}
