//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! The defaults reproduce the single-rule deployment this proxy replaces:
//! `/googleforms` rewritten onto `https://docs.google.com/forms`, with a
//! landing page linking into the proxied path.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Rewrite rules, evaluated in order; first match wins.
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleConfig>,

    /// Landing page served at `/` for requests no rule claims.
    pub landing: LandingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            rules: default_rules(),
            landing: LandingConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

fn default_rules() -> Vec<RuleConfig> {
    vec![RuleConfig {
        name: "google-forms".to_string(),
        path_prefix: "/googleforms".to_string(),
        upstream: "https://docs.google.com/forms".to_string(),
    }]
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// A single rewrite rule: path-segment prefix onto an upstream base URL.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleConfig {
    /// Rule identifier for logging.
    pub name: String,

    /// Path prefix to match, compared at segment boundaries.
    pub path_prefix: String,

    /// Upstream base URL the matched remainder is appended to.
    pub upstream: String,
}

/// Landing page configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Serve the landing page at `/`.
    pub enabled: bool,

    /// Proxied path the landing page links to.
    pub link_path: String,

    /// Anchor text for the link.
    pub link_text: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            link_path: "/googleforms/d/e/1FAIpQLSdJwmxHIl_OCh-CI1J68G1EVSr9hKaYFLh3dHh8TLnxjxCJWw/viewform?hl=en"
                .to_string(),
            link_text: "Register to receive a T-shirt".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
