use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::post_service::PostService;
use application::user_service::UserService;
use data::post_repository::PostRepository;
use data::repositories::postgres::post_repository::PostgresPostRepository;
use data::repositories::postgres::user_repository::PostgresUserRepository;
use data::user_repository::UserRepository;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::jwt::JwtService;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use infrastructure::uploads::UploadStorage;
use presentation::AppState;
use presentation::graphql::build_schema;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url, settings.database_max_connections).await?;
    run_migrations(&pool).await?;

    let jwt = Arc::new(JwtService::new(&settings.jwt_secret, settings.jwt_ttl_seconds));

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool));

    let users = Arc::new(UserService::new(
        user_repo.clone(),
        jwt.clone(),
        UploadStorage::new(&settings.upload_dir),
    ));
    let posts = Arc::new(PostService::new(post_repo, user_repo));

    let schema = build_schema(users, posts);
    let state = AppState::new(schema, jwt, settings.graphiql_enabled);

    server::run_http(&settings, state).await
}
