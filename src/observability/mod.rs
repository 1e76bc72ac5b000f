//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers, middleware, Prosody client:
//!     → tracing events with structured fields
//!     → request span (method, uri, request_id) from http/server.rs
//!     → logging.rs subscriber → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
