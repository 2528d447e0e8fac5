//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, rewrite middleware, landing route)
//!     → request.rs (request ID, upstream request construction)
//!     → response.rs (relay status/headers, stream body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer, UpstreamClient};
