use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::routes;
use crate::application::post_service::PostService;
use crate::application::user_service::UserService;
use crate::data::post_repository::PostRepository;
use crate::data::repositories::memory::{InMemoryPostRepository, InMemoryUserRepository};
use crate::data::user_repository::UserRepository;
use crate::infrastructure::jwt::JwtService;
use crate::infrastructure::uploads::UploadStorage;
use crate::presentation::AppState;
use crate::presentation::graphql::build_schema;

fn router(graphiql_enabled: bool, uploads: &tempfile::TempDir) -> Router {
    let jwt = Arc::new(JwtService::new("0123456789abcdef0123456789abcdef", 3600));
    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let post_repo: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
    let users = Arc::new(UserService::new(
        user_repo.clone(),
        jwt.clone(),
        UploadStorage::new(uploads.path()),
    ));
    let posts = Arc::new(PostService::new(post_repo, user_repo));

    routes(AppState::new(build_schema(users, posts), jwt, graphiql_enabled))
}

fn graphql_post(query: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::post("/graphql").header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder
        .body(Body::from(json!({ "query": query }).to_string()))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let uploads = tempfile::tempdir().expect("temp dir");
    let response = router(false, &uploads)
        .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn graphiql_is_served_only_when_enabled() {
    let uploads = tempfile::tempdir().expect("temp dir");

    let enabled = router(true, &uploads)
        .oneshot(Request::get("/graphql").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(enabled.status(), StatusCode::OK);

    let disabled = router(false, &uploads)
        .oneshot(Request::get("/graphql").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(disabled.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn public_query_ignores_bad_token() {
    let uploads = tempfile::tempdir().expect("temp dir");
    let response = router(false, &uploads)
        .oneshot(graphql_post("{ users { id } }", Some("Bearer nonsense")))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["users"], json!([]));
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn bearer_header_reaches_protected_resolvers() {
    let uploads = tempfile::tempdir().expect("temp dir");
    let app = router(false, &uploads);

    let signup = app
        .clone()
        .oneshot(graphql_post(
            r#"mutation { addUser(firstName: "Ann", lastName: "Lee", email: "ann@example.com", password: "pw") { token } }"#,
            None,
        ))
        .await
        .expect("response");
    let signup = json_body(signup).await;
    let token = signup["data"]["addUser"]["token"]
        .as_str()
        .expect("token")
        .to_string();

    let anonymous = app
        .clone()
        .oneshot(graphql_post(r#"mutation { addPost(post: "hi") { id } }"#, None))
        .await
        .expect("response");
    let anonymous = json_body(anonymous).await;
    assert_eq!(
        anonymous["errors"][0]["extensions"]["code"],
        json!("UNAUTHENTICATED")
    );

    let authed = app
        .oneshot(graphql_post(
            r#"mutation { addPost(post: "hi") { post user { email } } }"#,
            Some(&format!("Bearer {token}")),
        ))
        .await
        .expect("response");
    let authed = json_body(authed).await;
    assert_eq!(authed["data"]["addPost"]["post"], json!("hi"));
    assert_eq!(
        authed["data"]["addPost"]["user"]["email"],
        json!("ann@example.com")
    );
}
