//! Routing subsystem: rewrite rules and target resolution.
//!
//! # Data Flow
//! ```text
//! Incoming request URI (path, query)
//!     → rewrite.rs (ordered segment-prefix scan)
//!     → Return: fully-qualified target URI or NoMatch
//!
//! Rule Compilation (at startup):
//!     RuleConfig[]
//!     → Compile in declaration order
//!     → Freeze as immutable RuleSet
//! ```
//!
//! # Design Decisions
//! - Rules compiled at startup, immutable at runtime
//! - No regex in the hot path (prefix matching only)
//! - First match wins (declaration order)

pub mod rewrite;

pub use rewrite::{RewriteRule, RuleSet};
