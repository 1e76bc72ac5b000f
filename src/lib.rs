//! Prosody room participants relay.
//!
//! Authenticated REST relay that reports how many participants are in a
//! Prosody MUC room, without joining it.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod prosody;

pub use config::Settings;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
