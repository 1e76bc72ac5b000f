//! Prosody payload types and error definitions.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Room participant information as reported by the Prosody module.
///
/// Passed through verbatim: `has_participants` and the length of
/// `participants` are not checked against `participant_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomParticipantsResponse {
    pub room_name: String,
    pub exists: bool,
    pub participant_count: u64,
    pub has_participants: bool,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub room_jid: Option<String>,
}

/// Errors that can occur while talking to Prosody.
///
/// Each call ends in exactly one of these or a success.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Prosody rejected the room name (HTTP 400).
    #[error("Prosody rejected the room name")]
    InvalidRoom,

    /// Prosody answered with any other non-200 status.
    #[error("Prosody returned status {}", .0.as_u16())]
    Status(StatusCode),

    /// The request could not be completed (DNS, TCP, timeout, body read).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A 200 response whose body is not a valid payload.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// The upstream URL could not be constructed.
    #[error("Invalid Prosody URL: {0}")]
    InvalidUrl(String),
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_payload() {
        let payload: RoomParticipantsResponse = serde_json::from_str(
            r#"{"room_name":"r1","exists":false,"participant_count":0,"has_participants":false}"#,
        )
        .unwrap();

        assert!(payload.participants.is_empty());
        assert_eq!(payload.room_jid, None);
    }

    #[test]
    fn ignores_unknown_fields() {
        let payload: RoomParticipantsResponse = serde_json::from_str(
            r#"{"room_name":"r1","exists":true,"participant_count":1,"has_participants":true,
                "participants":["a"],"room_jid":"r1@muc.example.org","extra":42}"#,
        )
        .unwrap();

        assert_eq!(payload.room_jid.as_deref(), Some("r1@muc.example.org"));
    }

    #[test]
    fn inconsistent_counts_pass_through() {
        let payload: RoomParticipantsResponse = serde_json::from_str(
            r#"{"room_name":"r1","exists":true,"participant_count":5,"has_participants":false,
                "participants":["a"]}"#,
        )
        .unwrap();

        assert_eq!(payload.participant_count, 5);
        assert!(!payload.has_participants);
        assert_eq!(payload.participants.len(), 1);
    }

    #[test]
    fn negative_count_is_a_decode_error() {
        let result = serde_json::from_str::<RoomParticipantsResponse>(
            r#"{"room_name":"r1","exists":true,"participant_count":-1,"has_participants":false}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn status_error_shows_code() {
        let err = UpstreamError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Prosody returned status 503");
    }
}
