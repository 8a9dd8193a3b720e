#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use tailorshop_api::auth::password::hash_password;
use tailorshop_api::auth::session::{SessionConfig, SESSION_COOKIE};
use tailorshop_api::config::ServerConfig;
use tailorshop_api::router::build_app_router;
use tailorshop_api::state::AppState;
use tailorshop_api::views::build_templates;
use tailorshop_core::price::Price;
use tailorshop_db::models::account::{Account, CreateAccount};
use tailorshop_db::models::dress::{CreateDress, Dress};
use tailorshop_db::models::tailor::{CreateTailor, Tailor};
use tailorshop_db::repositories::{AccountRepo, DressRepo, TailorRepo};

/// Password used for every account created by [`create_account`].
pub const TEST_PASSWORD: &str = "test123test123";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        media_root: std::env::temp_dir(),
        password_min_length: 8,
        session: SessionConfig::default(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (cookies, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        templates: Arc::new(build_templates().expect("templates should compile")),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send a GET request, optionally carrying a `Cookie` header.
pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a urlencoded form POST, optionally carrying a `Cookie` header.
pub async fn post_form(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    cookie: Option<&str>,
) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = builder.body(Body::from(body)).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a 302 to `location`.
pub fn assert_redirect(response: &Response, location: &str) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], location);
}

/// The `sessionid=<token>` pair set by a response, ready to send back as a
/// `Cookie` header. `None` if no non-empty session cookie was set.
pub fn session_cookie(response: &Response) -> Option<String> {
    let prefix = format!("{SESSION_COOKIE}=");
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&prefix) && pair.len() > prefix.len())
        .map(str::to_string)
}

/// Log in through `POST /login` and return the session cookie.
pub async fn login(app: Router, username: &str, password: &str) -> String {
    let response = post_form(
        app,
        "/login",
        &[("username", username), ("password", password)],
        None,
    )
    .await;
    assert_redirect(&response, "/");
    session_cookie(&response).expect("login should set a session cookie")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create an account with [`TEST_PASSWORD`].
pub async fn create_account(pool: &SqlitePool, username: &str) -> Account {
    let input = CreateAccount {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    AccountRepo::create(pool, &input)
        .await
        .expect("account creation should succeed")
}

/// Create a tailor profile, with its own account, for `username`.
pub async fn create_tailor(pool: &SqlitePool, username: &str) -> Tailor {
    let account = create_account(pool, username).await;
    TailorRepo::create(
        pool,
        &CreateTailor {
            account_id: account.id,
            bio: "Test bio".to_string(),
        },
    )
    .await
    .expect("tailor creation should succeed")
}

/// Create a dress for `tailor` priced at 100.00.
pub async fn create_dress(pool: &SqlitePool, tailor: &Tailor, name: &str) -> Dress {
    DressRepo::create(
        pool,
        &CreateDress {
            tailor_id: tailor.id,
            name: name.to_string(),
            description: "Test description".to_string(),
            price: "100.00".parse::<Price>().unwrap(),
            image_path: "dresses/test_image.jpg".to_string(),
        },
    )
    .await
    .expect("dress creation should succeed")
}
