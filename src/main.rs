//! Prosody Participant Count Hook.
//!
//! Checks for participants in Jitsi Meet rooms without joining the room.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request ID ─▶ trace span ─▶ router
//!                                                    │
//!                       ┌────────────────────────────┼──────────────┐
//!                       ▼                            ▼              ▼
//!                  /  and  /docs                  /health    /api/rooms/{room}/participants
//!                   (static)                         │              │
//!                                                    │        X-API-Key guard
//!                                                    ▼              ▼
//!                                              ┌────────────────────────┐
//!                                              │     ProsodyClient      │──▶ Prosody
//!                                              │ (pooled, timeouts 5/10)│
//!                                              └────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use room_participants_relay::config::{load_settings, ConfigError};
use room_participants_relay::lifecycle::{spawn_signal_listener, Shutdown};
use room_participants_relay::observability::init_logging;
use room_participants_relay::HttpServer;

#[derive(Parser)]
#[command(name = "room-participants-relay")]
#[command(about = "REST API to check for participants in Jitsi Meet rooms", long_about = None)]
struct Cli {
    /// Optional TOML settings file; environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding BIND_ADDRESS and the settings file.
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => exit_with_config_error(e),
    };
    if let Some(bind) = cli.bind {
        settings.bind_address = bind.to_string();
    }

    init_logging(settings.debug);

    tracing::info!(
        service = %settings.app_title,
        version = %settings.app_version,
        bind_address = %settings.bind_address,
        prosody_url = %settings.prosody_url,
        muc_domain = %settings.muc_domain,
        muc_domain_alt = ?settings.muc_domain_alt,
        "Configuration loaded"
    );
    if settings.uses_default_api_key() {
        tracing::warn!("API key is the built-in default; set API_KEY before exposing this service");
    }

    if let Err(e) = serve(settings).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}

async fn serve(settings: room_participants_relay::Settings) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(&settings.bind_address).await?;
    let server = HttpServer::new(settings)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    spawn_signal_listener(shutdown);

    server.run(listener, server_shutdown).await?;
    Ok(())
}

fn exit_with_config_error(e: ConfigError) -> ! {
    eprintln!("Failed to load configuration: {}", e);
    std::process::exit(1);
}
