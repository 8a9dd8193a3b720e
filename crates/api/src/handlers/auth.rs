//! Handlers for login, registration, and logout.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use chrono::Utc;
use tailorshop_core::validation::FieldErrors;
use tailorshop_db::models::account::{Account, CreateAccount};
use tailorshop_db::repositories::AccountRepo;
use tailorshop_db::DbPool;
use tower_cookies::Cookies;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{end_session, start_session};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::forms::{
    FormEcho, LoginForm, RegisterForm, INVALID_LOGIN_MESSAGE, USERNAME_TAKEN_MESSAGE,
};
use crate::middleware::auth::RequestContext;
use crate::response::{redirect_found, HOME_PATH, LOGIN_PATH};
use crate::state::AppState;
use crate::views::{form_context, render, LOGIN_TEMPLATE, REGISTER_TEMPLATE};

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// GET /login
pub async fn login_page(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> AppResult<Html<String>> {
    render_form(
        &state,
        &ctx,
        LOGIN_TEMPLATE,
        &FormEcho::default(),
        &FieldErrors::new(),
    )
}

/// POST /login
///
/// Valid credentials start a session and redirect home. Anything else
/// re-renders the form with status 200.
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    ctx: RequestContext,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let credentials = match input.clean() {
        Ok(credentials) => credentials,
        Err(errors) => {
            return Ok(
                render_form(&state, &ctx, LOGIN_TEMPLATE, &input.echo(), &errors)?.into_response(),
            );
        }
    };

    let Some(account) =
        authenticate(&state.pool, credentials.username, credentials.password).await?
    else {
        tracing::warn!(username = %credentials.username, "Failed login attempt");
        let mut errors = FieldErrors::new();
        errors.add_non_field(INVALID_LOGIN_MESSAGE);
        return Ok(render_form(&state, &ctx, LOGIN_TEMPLATE, &input.echo(), &errors)?.into_response());
    };

    log_in(&state, &cookies, &account).await?;
    tracing::info!(account_id = account.id, username = %account.username, "Logged in");

    Ok(redirect_found(HOME_PATH))
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// GET /register
pub async fn register_page(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> AppResult<Html<String>> {
    render_form(
        &state,
        &ctx,
        REGISTER_TEMPLATE,
        &FormEcho::default(),
        &FieldErrors::new(),
    )
}

/// POST /register
///
/// Creates the account, logs it in, and redirects home. Invalid input or a
/// taken username re-renders the form with status 200 and creates nothing.
pub async fn register(
    State(state): State<AppState>,
    cookies: Cookies,
    ctx: RequestContext,
    Form(input): Form<RegisterForm>,
) -> AppResult<Response> {
    let new_account = match input.clean(state.config.password_min_length) {
        Ok(new_account) => new_account,
        Err(errors) => {
            return Ok(
                render_form(&state, &ctx, REGISTER_TEMPLATE, &input.echo(), &errors)?
                    .into_response(),
            );
        }
    };

    let username_taken = || {
        let mut errors = FieldErrors::new();
        errors.add("username", USERNAME_TAKEN_MESSAGE);
        errors
    };

    if AccountRepo::username_exists(&state.pool, &new_account.username).await? {
        return Ok(
            render_form(&state, &ctx, REGISTER_TEMPLATE, &input.echo(), &username_taken())?
                .into_response(),
        );
    }

    let password_hash = hash_password(&new_account.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateAccount {
        username: new_account.username,
        email: new_account.email,
        password_hash,
    };
    let account = match AccountRepo::create(&state.pool, &create).await {
        Ok(account) => account,
        // Lost a race with a concurrent registration of the same name.
        Err(e) if is_unique_violation(&e) => {
            return Ok(
                render_form(&state, &ctx, REGISTER_TEMPLATE, &input.echo(), &username_taken())?
                    .into_response(),
            );
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(account_id = account.id, username = %account.username, "Account registered");

    log_in(&state, &cookies, &account).await?;

    Ok(redirect_found(HOME_PATH))
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

/// POST /logout
///
/// Ends the session (if any) and redirects to the login page.
pub async fn logout(
    State(state): State<AppState>,
    cookies: Cookies,
    ctx: RequestContext,
) -> AppResult<Response> {
    end_session(&state.pool, &cookies).await?;
    if let Some(account) = &ctx.account {
        tracing::info!(account_id = account.id, "Logged out");
    }
    Ok(redirect_found(LOGIN_PATH))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up `username` and check `password` against its hash.
///
/// Returns `None` both for unknown usernames and wrong passwords so callers
/// cannot tell the two apart.
async fn authenticate(pool: &DbPool, username: &str, password: &str) -> AppResult<Option<Account>> {
    let Some(account) = AccountRepo::find_by_username(pool, username).await? else {
        return Ok(None);
    };

    let valid = verify_password(password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    Ok(valid.then_some(account))
}

/// Start a session for `account` and record the login time.
async fn log_in(state: &AppState, cookies: &Cookies, account: &Account) -> AppResult<()> {
    start_session(&state.pool, cookies, account.id, &state.config.session).await?;
    AccountRepo::record_successful_login(&state.pool, account.id, Utc::now()).await?;
    Ok(())
}

fn render_form(
    state: &AppState,
    ctx: &RequestContext,
    template: &str,
    form: &FormEcho,
    errors: &FieldErrors,
) -> AppResult<Html<String>> {
    let context = form_context(ctx.account.as_ref(), form, errors);
    render(&state.templates, template, &context)
}
