//! Observability subsystem.
//!
//! Structured logging via `tracing`; proxy events carry the request ID
//! stamped by the request-id layer so one request can be followed across
//! the inbound and upstream legs.

pub mod logging;
