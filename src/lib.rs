//! Path-prefix rewriting HTTP proxy.
//!
//! Requests whose path matches a configured prefix are rewritten onto a
//! fixed upstream origin and relayed back to the caller as a stream.
//! Everything else falls through to the routed handlers, which in the
//! default deployment serve a static landing page at `/`.
//!
//! ```text
//! inbound request
//!     → rewrite middleware (routing::RuleSet)
//!         matched   → build upstream request (http::request)
//!                   → shared client send (headers-received)
//!                   → relay status/headers/body (http::response)
//!         unmatched → next handler (landing page, 404)
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
