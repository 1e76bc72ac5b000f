//! API key middleware.
//! Guards routes that require the `X-API-Key` header.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::response::ApiError;
use crate::http::server::AppState;

pub const X_API_KEY: &str = "X-API-Key";

/// Reject the request unless `X-API-Key` equals the configured key.
///
/// Runs before the handler, so a rejected request never reaches Prosody.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let rejection = match request.headers().get(X_API_KEY).map(|v| v.to_str()) {
        Some(Ok(key)) if key == state.settings.api_key => None,
        Some(_) => Some("invalid"),
        None => Some("missing"),
    };

    let Some(reason) = rejection else {
        return Ok(next.run(request).await);
    };

    tracing::warn!(path = %request.uri().path(), reason, "Rejected request: API key check failed");
    Err(ApiError::Unauthorized)
}
