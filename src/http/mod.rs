//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID, open trace span)
//!     → middleware/api_key.rs (participants route only)
//!     → handlers.rs (call Prosody, shape the response)
//!     → response.rs (map failures to status + ErrorResponse)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use handlers::{HealthResponse, ServiceInfo};
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::{ApiError, ErrorResponse};
pub use server::{AppState, HttpServer};
