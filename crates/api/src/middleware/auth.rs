//! Session-cookie authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::Utc;
use tailorshop_db::models::account::Account;
use tailorshop_db::repositories::{AccountRepo, SessionRepo};
use tower_cookies::Cookies;

use crate::auth::session::cookie_token_hash;
use crate::error::AppError;
use crate::state::AppState;

/// Everything a handler needs to know about who is calling.
///
/// Resolved from the `sessionid` cookie on every request that asks for it:
/// the token is hashed, matched against a live session row, and the owning
/// account loaded. A missing, unknown, or expired token yields an anonymous
/// context rather than an error.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// The authenticated account, or `None` for anonymous requests.
    pub account: Option<Account>,
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::InternalError(msg.to_string()))?;

        let Some(token_hash) = cookie_token_hash(&cookies) else {
            return Ok(Self::default());
        };

        let Some(session) =
            SessionRepo::find_active_by_token_hash(&state.pool, &token_hash, Utc::now()).await?
        else {
            tracing::debug!("Session cookie did not match a live session");
            return Ok(Self::default());
        };

        let account = AccountRepo::find_by_id(&state.pool, session.account_id).await?;
        Ok(Self { account })
    }
}

/// The logged-in account. Use this as an extractor parameter in any handler
/// that requires authentication:
///
/// ```ignore
/// async fn my_page(AuthAccount(account): AuthAccount) -> AppResult<Html<String>> {
///     tracing::info!(account_id = account.id, "rendering page");
///     ...
/// }
/// ```
///
/// Anonymous requests are answered with a redirect to the login page and the
/// handler never runs.
#[derive(Debug, Clone)]
pub struct AuthAccount(pub Account);

impl FromRequestParts<AppState> for AuthAccount {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let context = RequestContext::from_request_parts(parts, state).await?;
        context
            .account
            .map(AuthAccount)
            .ok_or(AppError::LoginRequired)
    }
}
