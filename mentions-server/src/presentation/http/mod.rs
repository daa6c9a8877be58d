use axum::{Router, routing::get};

use super::AppState;
use handlers::graphql::{GRAPHQL_PATH, graphiql, graphql_handler};
use handlers::health::health_handler;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod middleware;

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests;
