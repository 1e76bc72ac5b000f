//! Prosody HTTP client with per-call timeouts.
//!
//! # Responsibilities
//! - Build upstream URLs from the configured base
//! - Probe the `room_participants_api` health endpoint
//! - Query participants for a single room
//! - Classify every outcome into exactly one `UpstreamError` variant or success

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::config::Settings;
use crate::prosody::types::{RoomParticipantsResponse, UpstreamError, UpstreamResult};

/// Path prefix served by the Prosody `room_participants_api` module.
pub const API_PREFIX: &str = "room_participants_api";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the Prosody participants API.
///
/// Cheap to clone: the inner `reqwest::Client` is already reference counted
/// and shares one connection pool across all clones.
#[derive(Clone, Debug)]
pub struct ProsodyClient {
    client: reqwest::Client,
    base_url: Arc<Url>,
    health_timeout: Duration,
    lookup_timeout: Duration,
}

impl ProsodyClient {
    /// Create a client from validated settings.
    pub fn new(settings: &Settings) -> UpstreamResult<Self> {
        let base_url = Url::parse(&settings.prosody_url).map_err(|e| {
            UpstreamError::InvalidUrl(format!("'{}': {}", settings.prosody_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(settings.prosody_url.clone()));
        }

        // Prosody lives on the internal network; never route it through HTTP_PROXY.
        // A 3xx is an upstream answer like any other non-200 status, not something to follow.
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
            .build()?;

        Ok(Self {
            client,
            base_url: Arc::new(base_url),
            health_timeout: Duration::from_secs(settings.health_timeout_secs),
            lookup_timeout: Duration::from_secs(settings.lookup_timeout_secs),
        })
    }

    /// Base URL all endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/room_participants_api/health`
    pub fn health_url(&self) -> UpstreamResult<Url> {
        self.endpoint(&[API_PREFIX, "health"])
    }

    /// `{base}/room_participants_api/room-participants/{room_name}`
    ///
    /// The room name becomes one percent-escaped path segment, so `/` or `?`
    /// inside it never change the shape of the URL.
    pub fn room_participants_url(&self, room_name: &str) -> UpstreamResult<Url> {
        self.endpoint(&[API_PREFIX, "room-participants", room_name])
    }

    fn endpoint(&self, segments: &[&str]) -> UpstreamResult<Url> {
        let mut url = Url::clone(&self.base_url);
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Probe Prosody liveness. Any HTTP status counts as a completed call.
    pub async fn health(&self) -> UpstreamResult<StatusCode> {
        let url = self.health_url()?;
        tracing::debug!(url = %url, "Probing Prosody health");

        let response = self
            .client
            .get(url)
            .timeout(self.health_timeout)
            .send()
            .await?;

        Ok(response.status())
    }

    /// Fetch participant information for `room_name`.
    pub async fn room_participants(
        &self,
        room_name: &str,
    ) -> UpstreamResult<RoomParticipantsResponse> {
        let url = self.room_participants_url(room_name)?;
        tracing::debug!(url = %url, "Querying Prosody room participants");

        let response = self
            .client
            .get(url)
            .timeout(self.lookup_timeout)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                // A failed body read is a transport error, a bad body is a decode error.
                let body = response.bytes().await?;
                Ok(serde_json::from_slice(&body)?)
            }
            StatusCode::BAD_REQUEST => Err(UpstreamError::InvalidRoom),
            status => Err(UpstreamError::Status(status)),
        }
    }
}
