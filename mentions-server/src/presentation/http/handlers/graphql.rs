use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::presentation::AppState;
use crate::presentation::graphql::RequestContext;
use crate::presentation::http::app_error::AppError;

pub(crate) const GRAPHQL_PATH: &str = "/graphql";

pub(crate) async fn graphql_handler(
    State(state): State<AppState>,
    context: RequestContext,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state
        .schema
        .execute(req.into_inner().data(context))
        .await
        .into()
}

pub(crate) async fn graphiql(State(state): State<AppState>) -> Response {
    if !state.graphiql_enabled {
        return AppError::NotFound.into_response();
    }
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}
