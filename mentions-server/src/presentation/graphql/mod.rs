use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Schema};

use crate::application::post_service::PostService;
use crate::application::user_service::UserService;
use crate::data::post_repository::PostRepository;
use crate::data::user_repository::UserRepository;

pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod mutation;
pub(crate) mod query;
pub(crate) mod types;

pub(crate) use context::RequestContext;
use mutation::MutationRoot;
use query::QueryRoot;

pub(crate) type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;
pub(crate) type SharedUserService = Arc<UserService<dyn UserRepository>>;
pub(crate) type SharedPostService = Arc<PostService<dyn PostRepository>>;

const MAX_QUERY_DEPTH: usize = 12;

pub(crate) fn build_schema(users: SharedUserService, posts: SharedPostService) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(users)
        .data(posts)
        .limit_depth(MAX_QUERY_DEPTH)
        .finish()
}

pub(crate) fn user_service<'a>(ctx: &Context<'a>) -> &'a UserService<dyn UserRepository> {
    ctx.data_unchecked::<SharedUserService>()
}

pub(crate) fn post_service<'a>(ctx: &Context<'a>) -> &'a PostService<dyn PostRepository> {
    ctx.data_unchecked::<SharedPostService>()
}
