use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::presentation::AppState;
use crate::presentation::graphql::RequestContext;

/// Resolves the `Authorization` header once per request. A missing or bad
/// token is not a rejection here: only protected resolvers fail on it.
impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A header that is not valid UTF-8 counts as malformed.
        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .map(|value| value.to_str().unwrap_or_default());

        Ok(RequestContext::from_authorization(&state.jwt, authorization))
    }
}
