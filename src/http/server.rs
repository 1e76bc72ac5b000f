//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Attach the API key guard to the participants route only
//! - Wire up middleware (request ID, tracing)
//! - Serve on a listener until the shutdown signal fires

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::Settings;
use crate::http::handlers::{self, DOCS_PATH, HEALTH_PATH, PARTICIPANTS_PATH};
use crate::http::middleware::require_api_key;
use crate::http::request::{request_id_of, MakeRequestUuid};
use crate::prosody::{ProsodyClient, UpstreamResult};

/// Application state injected into handlers.
///
/// Read-only after construction; clones share the settings and the
/// upstream connection pool.
#[derive(Clone, Debug)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub prosody: ProsodyClient,
}

impl AppState {
    pub fn new(settings: Settings) -> UpstreamResult<Self> {
        let prosody = ProsodyClient::new(&settings)?;
        Ok(Self {
            settings: Arc::new(settings),
            prosody,
        })
    }
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given settings.
    pub fn new(settings: Settings) -> UpstreamResult<Self> {
        let state = AppState::new(settings)?;
        let router = Self::build_router(state.clone());
        Ok(Self { router, state })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        let guard = middleware::from_fn_with_state(state.clone(), require_api_key);

        Router::new()
            .route("/", get(handlers::root))
            .route(HEALTH_PATH, get(handlers::health_check))
            .route(DOCS_PATH, get(handlers::docs))
            .route(
                PARTICIPANTS_PATH,
                get(handlers::get_room_participants).route_layer(guard),
            )
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(
                        |request: &Request<Body>| {
                            tracing::info_span!(
                                "request",
                                method = %request.method(),
                                uri = %request.uri(),
                                request_id = %request_id_of(request),
                            )
                        },
                    ))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            prosody_url = %self.state.prosody.base_url(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the settings.
    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Router for in-process use (e.g., `tower::ServiceExt::oneshot`).
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
