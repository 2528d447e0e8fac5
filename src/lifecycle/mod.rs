//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:  load config → validate → build server → bind → serve
//! Signals:  SIGINT/SIGTERM → Shutdown::trigger
//! Shutdown: trigger → handles resolve → server drains and exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownHandle};
