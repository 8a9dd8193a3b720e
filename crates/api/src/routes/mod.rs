pub mod auth;
pub mod health;
pub mod shop;

use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                              login form, log in (public)
/// /register                           registration form, register (public)
/// /logout                             log out (POST)
///
/// /                                   dress catalog (requires login)
/// /submit_measurements/{dress_id}     measurement form, submit (requires login)
/// /tailor_work/{tailor_id}            tailor's dresses (requires login)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(auth::router()).merge(shop::router())
}
