use async_graphql::Context;

use crate::domain::error::DomainError;
use crate::infrastructure::jwt::{Identity, JwtService};

/// Per-request caller state, resolved once from the `Authorization` header.
#[derive(Debug, Clone)]
pub(crate) struct RequestContext {
    caller: Result<Identity, DomainError>,
}

impl RequestContext {
    pub(crate) fn from_authorization(jwt: &JwtService, authorization: Option<&str>) -> Self {
        Self {
            caller: jwt.resolve(authorization),
        }
    }

    pub(crate) fn identity(&self) -> Result<&Identity, DomainError> {
        self.caller.as_ref().map_err(Clone::clone)
    }
}

/// The caller of a protected resolver, or the reason there is none.
pub(crate) fn require_identity<'a>(ctx: &Context<'a>) -> Result<&'a Identity, DomainError> {
    match ctx.data_opt::<RequestContext>() {
        Some(request) => request.identity(),
        None => Err(DomainError::Unauthenticated("you must be logged in")),
    }
}
