//! HTTP endpoint handlers.

use std::fmt::Display;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::middleware::X_API_KEY;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::prosody::RoomParticipantsResponse;

pub const HEALTH_PATH: &str = "/health";
pub const DOCS_PATH: &str = "/docs";
pub const PARTICIPANTS_PATH: &str = "/api/rooms/{room_name}/participants";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub prosody_status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub docs: String,
    pub health: String,
    pub api_endpoint: String,
    pub authentication: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiDocs {
    pub title: String,
    pub version: String,
    pub description: &'static str,
    pub endpoints: Vec<EndpointDoc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub auth_required: bool,
    pub summary: &'static str,
}

/// Describe the outcome of a Prosody health probe.
///
/// Never fails: every problem ends up in the returned string.
pub fn prosody_status<E: Display>(probe: Result<StatusCode, E>) -> String {
    match probe {
        Ok(StatusCode::OK) => "ok".to_string(),
        Ok(status) => format!("error (status: {})", status.as_u16()),
        Err(e) => format!("error ({})", e),
    }
}

/// Health check endpoint. No authentication, always 200.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let probe = state.prosody.health().await;
    if let Err(e) = &probe {
        tracing::error!(error = %e, "Prosody health check error");
    }

    Json(HealthResponse {
        status: "ok".to_string(),
        service: state.settings.app_title.clone(),
        version: state.settings.app_version.clone(),
        prosody_status: prosody_status(probe),
    })
}

/// Participant information for one room. Requires `X-API-Key`.
pub async fn get_room_participants(
    State(state): State<AppState>,
    room_name: Result<Path<String>, PathRejection>,
) -> Result<Json<RoomParticipantsResponse>, ApiError> {
    // Undecodable segments (e.g. `%FF`) get the same body as an upstream 400.
    let Path(room_name) = room_name.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected undecodable room name");
        ApiError::InvalidRoomName
    })?;
    tracing::info!(room = %room_name, "Requesting room info");

    match state.prosody.room_participants(&room_name).await {
        Ok(payload) => {
            tracing::info!(
                room = %room_name,
                participant_count = payload.participant_count,
                "Room participants retrieved"
            );
            Ok(Json(payload))
        }
        Err(e) => {
            let err = ApiError::from(e);
            match &err {
                ApiError::InvalidRoomName => {
                    tracing::warn!(room = %room_name, "Prosody rejected room name");
                }
                ApiError::UpstreamStatus(status) => {
                    tracing::error!(room = %room_name, status, "Prosody API error");
                }
                ApiError::UpstreamUnreachable => {
                    tracing::error!(room = %room_name, "Connection error with Prosody");
                }
                other => {
                    tracing::error!(room = %room_name, error = %other, "Unexpected error");
                }
            }
            Err(err)
        }
    }
}

/// Root endpoint with service information.
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: state.settings.app_title.clone(),
        version: state.settings.app_version.clone(),
        docs: DOCS_PATH.to_string(),
        health: HEALTH_PATH.to_string(),
        api_endpoint: PARTICIPANTS_PATH.to_string(),
        authentication: format!("{} header required", X_API_KEY),
    })
}

/// Static description of the routes served by the relay.
pub async fn docs(State(state): State<AppState>) -> Json<ApiDocs> {
    Json(ApiDocs {
        title: state.settings.app_title.clone(),
        version: state.settings.app_version.clone(),
        description: "REST API to check for participants in Jitsi Meet rooms",
        endpoints: vec![
            EndpointDoc {
                method: "GET",
                path: "/",
                auth_required: false,
                summary: "Service information",
            },
            EndpointDoc {
                method: "GET",
                path: HEALTH_PATH,
                auth_required: false,
                summary: "Service and Prosody health",
            },
            EndpointDoc {
                method: "GET",
                path: DOCS_PATH,
                auth_required: false,
                summary: "This document",
            },
            EndpointDoc {
                method: "GET",
                path: PARTICIPANTS_PATH,
                auth_required: true,
                summary: "Number of participants in a room, without joining it",
            },
        ],
    })
}
