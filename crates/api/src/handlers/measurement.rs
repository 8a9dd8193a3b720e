//! Handlers for submitting measurements for a dress.

use axum::extract::State;
use axum::response::{Html, Response};
use axum::Form;
use tailorshop_core::error::CoreError;
use tailorshop_core::types::DbId;
use tailorshop_db::models::dress::Dress;
use tailorshop_db::models::measurement::CreateMeasurement;
use tailorshop_db::repositories::{DressRepo, MeasurementRepo};
use tailorshop_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::forms::MeasurementForm;
use crate::middleware::auth::AuthAccount;
use crate::middleware::path::IdPath;
use crate::response::{redirect_found, HOME_PATH};
use crate::state::AppState;
use crate::views::{page_context, render, DressCard, SUBMIT_MEASUREMENTS_TEMPLATE};

/// GET /submit_measurements/{dress_id}
pub async fn measurement_form(
    State(state): State<AppState>,
    AuthAccount(account): AuthAccount,
    IdPath(dress_id): IdPath,
) -> AppResult<Html<String>> {
    let dress = find_dress(&state.pool, dress_id).await?;

    let mut context = page_context(Some(&account));
    context.insert("dress", &DressCard::from(dress));
    render(&state.templates, SUBMIT_MEASUREMENTS_TEMPLATE, &context)
}

/// POST /submit_measurements/{dress_id}
///
/// Stores the `measurements` field exactly as submitted and redirects home.
/// Every submission creates a new row.
pub async fn submit_measurements(
    State(state): State<AppState>,
    AuthAccount(account): AuthAccount,
    IdPath(dress_id): IdPath,
    Form(input): Form<MeasurementForm>,
) -> AppResult<Response> {
    let dress = find_dress(&state.pool, dress_id).await?;

    let measurement = MeasurementRepo::create(
        &state.pool,
        &CreateMeasurement {
            account_id: account.id,
            dress_id: dress.id,
            measurements: input.into_raw(),
        },
    )
    .await?;

    tracing::info!(
        measurement_id = measurement.id,
        account_id = account.id,
        dress_id = dress.id,
        "Measurements submitted"
    );

    Ok(redirect_found(HOME_PATH))
}

async fn find_dress(pool: &DbPool, id: DbId) -> AppResult<Dress> {
    DressRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Dress", id }))
}
