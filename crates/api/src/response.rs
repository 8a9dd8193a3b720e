//! Response helpers shared by the page handlers.

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Path of the catalog page every successful form post lands on.
pub const HOME_PATH: &str = "/";

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";

/// `302 Found` redirect to `location`.
///
/// Unlike `axum::response::Redirect::to`, which answers 303.
pub fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}
