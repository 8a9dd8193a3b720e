//! Handler for the dress catalog (home page).

use axum::extract::State;
use axum::response::Html;
use tailorshop_db::repositories::DressRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthAccount;
use crate::state::AppState;
use crate::views::{dress_cards, page_context, render, HOME_TEMPLATE};

/// GET /
///
/// Every dress, unfiltered, in insertion order.
pub async fn home(
    State(state): State<AppState>,
    AuthAccount(account): AuthAccount,
) -> AppResult<Html<String>> {
    let dresses = DressRepo::list(&state.pool).await?;

    let mut context = page_context(Some(&account));
    context.insert("dresses", &dress_cards(dresses));
    render(&state.templates, HOME_TEMPLATE, &context)
}
