#![allow(dead_code)]

use std::sync::Arc;

use askhub_api::auth::jwt::{generate_access_token, JwtConfig};
use askhub_api::config::{LogFormat, ServerConfig};
use askhub_api::router::build_app_router;
use askhub_api::state::AppState;
use askhub_core::roles::ROLE_USER;
use askhub_core::types::DbId;
use askhub_db::models::user::CreateUser;
use askhub_db::repositories::UserRepo;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// JWT settings shared by the test router and [`token_for`].
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-for-integration-tests".to_string(),
        access_token_expiry_mins: 15,
        refresh_token_expiry_days: 7,
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        log_format: LogFormat::Pretty,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router with the production middleware stack,
/// using the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A user created directly in the database, with a ready-to-use token.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: DbId,
    pub username: String,
    pub token: String,
}

/// Insert a user with the given role and mint an access token for them.
///
/// The stored password hash is a placeholder; use the register endpoint
/// when a test needs to log in with a password.
pub async fn create_user_with_role(pool: &PgPool, username: &str, role: &str) -> TestUser {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "not-a-real-hash".to_string(),
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    TestUser {
        token: token_for(user.id, role),
        id: user.id,
        username: user.username,
    }
}

pub async fn create_user(pool: &PgPool, username: &str) -> TestUser {
    create_user_with_role(pool, username, ROLE_USER).await
}

pub fn token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, &test_jwt_config()).expect("token generation")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn put_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers going through the API
// ---------------------------------------------------------------------------

/// Post a question and return its id.
pub async fn create_question(app: Router, owner: &TestUser, title: &str, tags: &[&str]) -> DbId {
    let response = post_json_auth(
        app,
        "/api/v1/questions",
        serde_json::json!({
            "title": title,
            "description": format!("Details about {title}"),
            "tags": tags,
        }),
        &owner.token,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Post an answer and return its id.
pub async fn create_answer(app: Router, author: &TestUser, question_id: DbId) -> DbId {
    let response = post_json_auth(
        app,
        &format!("/api/v1/questions/{question_id}/answers"),
        serde_json::json!({ "description": "Try turning it off and on again." }),
        &author.token,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Count rows of a table matching a simple `WHERE` clause.
pub async fn count(pool: &PgPool, table: &str, predicate: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE {predicate}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
