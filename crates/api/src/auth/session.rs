//! Login sessions.
//!
//! A session is an opaque random token handed to the browser in the
//! `sessionid` cookie. Only its SHA-256 hash is stored server-side so a
//! database leak does not compromise active sessions.

use chrono::Utc;
use sha2::{Digest, Sha256};
use tailorshop_core::types::DbId;
use tailorshop_db::models::session::CreateSession;
use tailorshop_db::repositories::SessionRepo;
use tailorshop_db::DbPool;
use tower_cookies::cookie::time::Duration as CookieDuration;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use uuid::Uuid;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "sessionid";

/// Default session lifetime in days.
const DEFAULT_MAX_AGE_DAYS: i64 = 14;

/// Configuration for session lifetime and cookie attributes.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session lifetime in days (default: 14).
    pub max_age_days: i64,
    /// Whether the cookie carries the `Secure` attribute (default: false).
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            cookie_secure: false,
        }
    }
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                 | Default |
    /// |-------------------------|---------|
    /// | `SESSION_MAX_AGE_DAYS`  | `14`    |
    /// | `SESSION_COOKIE_SECURE` | `false` |
    pub fn from_env() -> Self {
        let max_age_days: i64 = std::env::var("SESSION_MAX_AGE_DAYS")
            .unwrap_or_else(|_| DEFAULT_MAX_AGE_DAYS.to_string())
            .parse()
            .expect("SESSION_MAX_AGE_DAYS must be a valid i64");

        let cookie_secure: bool = std::env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_COOKIE_SECURE must be true or false");

        Self {
            max_age_days,
            cookie_secure,
        }
    }
}

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client; only the hash is persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hash of the token in the request's session cookie, if there is one.
pub fn cookie_token_hash(cookies: &Cookies) -> Option<String> {
    cookies
        .get(SESSION_COOKIE)
        .map(|cookie| hash_session_token(cookie.value()))
}

/// Persist a new session for `account_id` and set the session cookie.
///
/// Any session the request already carried is ended first, so logging in
/// always rotates the token.
pub async fn start_session(
    pool: &DbPool,
    cookies: &Cookies,
    account_id: DbId,
    config: &SessionConfig,
) -> Result<(), sqlx::Error> {
    end_session(pool, cookies).await?;

    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::days(config.max_age_days);

    SessionRepo::create(
        pool,
        &CreateSession {
            account_id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    cookies.add(session_cookie(token, config));
    tracing::debug!(account_id, "Session started");
    Ok(())
}

/// Delete the request's session (if any) and clear the session cookie.
pub async fn end_session(pool: &DbPool, cookies: &Cookies) -> Result<(), sqlx::Error> {
    if let Some(hash) = cookie_token_hash(cookies) {
        SessionRepo::delete_by_token_hash(pool, &hash).await?;
        cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    }
    Ok(())
}

fn session_cookie(token: String, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(CookieDuration::days(config.max_age_days))
        .build()
}
