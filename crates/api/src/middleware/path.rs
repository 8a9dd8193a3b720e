//! Numeric path parameters.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use tailorshop_core::types::DbId;

use crate::error::AppError;

/// A single integer id taken from the path, e.g. `{dress_id}`.
///
/// A segment that is not an integer names no page, so it is answered with
/// 404 rather than axum's 400 `Path` rejection.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!(path = %parts.uri.path(), error = %rejection, "Unroutable id");
                Err(AppError::PageNotFound)
            }
        }
    }
}
