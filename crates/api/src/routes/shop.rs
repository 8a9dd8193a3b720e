//! Route definitions for the catalog, measurements, and tailor pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{catalog, measurement, tailor};
use crate::state::AppState;

/// ```text
/// GET  /                                  -> home
/// GET  /submit_measurements/{dress_id}    -> measurement_form
/// POST /submit_measurements/{dress_id}    -> submit_measurements
/// GET  /tailor_work/{tailor_id}           -> tailor_work
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::home))
        .route(
            "/submit_measurements/{dress_id}",
            get(measurement::measurement_form).post(measurement::submit_measurements),
        )
        .route("/tailor_work/{tailor_id}", get(tailor::tailor_work))
}
