//! Shared-secret authentication for protected routes.
//!
//! Callers present the secret as `Authorization: Bearer <secret>` or
//! `X-API-Key: <secret>`. When no secret is configured every request to a
//! protected route is rejected.

use super::{ApiError, AppState};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Header carrying the secret when `Authorization` is not used.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Extract the caller-supplied credential from request headers.
fn presented_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    bearer
        .or_else(|| headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()).map(str::trim))
        .filter(|t| !t.is_empty())
}

/// Compare without short-circuiting on the first differing byte.
fn tokens_match(expected: &str, presented: &str) -> bool {
    expected.len() == presented.len()
        && expected
            .bytes()
            .zip(presented.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

/// Middleware rejecting requests that do not carry the configured secret.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.auth_token.as_deref() else {
        tracing::warn!("Rejecting {}: no auth token configured", request.uri().path());
        return Err(ApiError::Unauthorized);
    };

    match presented_token(&headers) {
        Some(token) if tokens_match(expected, token) => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Rejecting {}: invalid credential", request.uri().path());
            Err(ApiError::Unauthorized)
        }
        None => {
            tracing::warn!("Rejecting {}: missing credential", request.uri().path());
            Err(ApiError::Unauthorized)
        }
    }
}
