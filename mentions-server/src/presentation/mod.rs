use std::sync::Arc;

use crate::infrastructure::jwt::JwtService;

pub(crate) mod graphql;
pub(crate) mod http;

use graphql::AppSchema;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) schema: AppSchema,
    pub(crate) jwt: Arc<JwtService>,
    pub(crate) graphiql_enabled: bool,
}

impl AppState {
    pub(crate) fn new(schema: AppSchema, jwt: Arc<JwtService>, graphiql_enabled: bool) -> Self {
        Self {
            schema,
            jwt,
            graphiql_enabled,
        }
    }
}
