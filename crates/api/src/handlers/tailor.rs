//! Handler for a tailor's work page.

use axum::extract::State;
use axum::response::Html;
use tailorshop_core::error::CoreError;
use tailorshop_core::types::DbId;
use tailorshop_db::repositories::{DressRepo, MeasurementRepo, TailorRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAccount;
use crate::middleware::path::IdPath;
use crate::state::AppState;
use crate::views::{dress_cards, page_context, render, TAILOR_WORK_TEMPLATE};

/// GET /tailor_work/{tailor_id}
///
/// Any logged-in account may see a tailor's dresses. The measurement requests
/// for those dresses are only listed when the tailor views their own page.
pub async fn tailor_work(
    State(state): State<AppState>,
    AuthAccount(account): AuthAccount,
    IdPath(tailor_id): IdPath,
) -> AppResult<Html<String>> {
    let tailor = TailorRepo::find_profile(&state.pool, tailor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tailor",
            id: tailor_id,
        }))?;

    let dresses = DressRepo::list_by_tailor(&state.pool, tailor.id).await?;

    let own_page = tailor.account_id == account.id;
    let requests = if own_page {
        MeasurementRepo::list_requests_for_tailor(&state.pool, tailor.id).await?
    } else {
        Vec::new()
    };

    let mut context = page_context(Some(&account));
    context.insert("tailor", &tailor);
    context.insert("dresses", &dress_cards(dresses));
    context.insert("requests", &requests);
    context.insert("own_page", &own_page);
    render(&state.templates, TAILOR_WORK_TEMPLATE, &context)
}
