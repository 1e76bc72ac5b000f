//! Prosody upstream subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (build URL, GET with timeout)
//!     → Prosody room_participants_api
//!     → classify: 200 → decode (types.rs)
//!                 400 → InvalidRoom
//!                 other → Status(code)
//!                 transport failure / timeout → Transport
//! ```
//!
//! # Design Decisions
//! - One pooled client for the whole process, no per-request state on it
//! - Health probe and lookup have separate time budgets
//! - No retries: every failure is surfaced to the caller

pub mod client;
pub mod types;

pub use client::{ProsodyClient, API_PREFIX};
pub use types::{RoomParticipantsResponse, UpstreamError, UpstreamResult};
