//! Outward error mapping.
//!
//! Every failure leaving a handler is an [`ApiError`]. Each variant maps to
//! exactly one status code and one fixed-shape [`ErrorResponse`] body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prosody::UpstreamError;

/// Body returned on every failure path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable kind.
    pub error: String,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Failures surfaced to API callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid or missing API key")]
    Unauthorized,

    #[error("Invalid room name")]
    InvalidRoomName,

    #[error("Prosody communication error (status: {0})")]
    UpstreamStatus(u16),

    #[error("Failed to connect to Prosody server")]
    UpstreamUnreachable,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidRoomName => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamUnreachable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::InvalidRoomName => "invalid_input",
            Self::UpstreamStatus(_) => "upstream_error",
            Self::UpstreamUnreachable => "upstream_unreachable",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn to_body(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            detail: Some(self.to_string()),
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::InvalidRoom => Self::InvalidRoomName,
            UpstreamError::Status(status) => Self::UpstreamStatus(status.as_u16()),
            UpstreamError::Transport(_) => Self::UpstreamUnreachable,
            UpstreamError::Decode(e) => Self::Internal(e.to_string()),
            UpstreamError::InvalidUrl(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn each_variant_has_one_status_and_body() {
        let cases = [
            (ApiError::Unauthorized, 401, "unauthorized", "Invalid or missing API key"),
            (ApiError::InvalidRoomName, 400, "invalid_input", "Invalid room name"),
            (
                ApiError::UpstreamStatus(503),
                502,
                "upstream_error",
                "Prosody communication error (status: 503)",
            ),
            (
                ApiError::UpstreamUnreachable,
                503,
                "upstream_unreachable",
                "Failed to connect to Prosody server",
            ),
            (
                ApiError::Internal("boom".to_string()),
                500,
                "internal_error",
                "Internal server error: boom",
            ),
        ];

        for (err, status, kind, detail) in cases {
            let (actual_status, body) = body_of(err).await;
            assert_eq!(actual_status.as_u16(), status);
            assert_eq!(body.error, kind);
            assert_eq!(body.detail.as_deref(), Some(detail));
        }
    }

    #[test]
    fn upstream_errors_map_to_api_errors() {
        assert_eq!(ApiError::from(UpstreamError::InvalidRoom), ApiError::InvalidRoomName);
        assert_eq!(
            ApiError::from(UpstreamError::Status(StatusCode::NOT_FOUND)),
            ApiError::UpstreamStatus(404)
        );

        let decode = serde_json::from_str::<u64>("oops").unwrap_err();
        let message = decode.to_string();
        assert_eq!(
            ApiError::from(UpstreamError::Decode(decode)),
            ApiError::Internal(message)
        );
    }

    #[test]
    fn detail_is_omitted_when_absent() {
        let body = ErrorResponse {
            error: "internal_error".to_string(),
            detail: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"internal_error"}"#
        );
    }
}
