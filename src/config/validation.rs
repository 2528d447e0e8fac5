//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check rule prefixes are usable for segment matching
//! - Check upstream bases are absolute http/https URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("rule '{name}': path_prefix '{prefix}' must start with '/' and name a segment")]
    PrefixFormat { name: String, prefix: String },

    #[error("rule '{name}': path_prefix '{prefix}' must not end with '/'")]
    PrefixTrailingSlash { name: String, prefix: String },

    #[error("rule '{name}': upstream '{upstream}' is not a valid URL: {reason}")]
    UpstreamUrl {
        name: String,
        upstream: String,
        reason: String,
    },

    #[error("rule '{name}': upstream '{upstream}' must use http or https")]
    UpstreamScheme { name: String, upstream: String },

    #[error("rule '{name}': upstream '{upstream}' must not end with '/' or carry a query/fragment")]
    UpstreamShape { name: String, upstream: String },
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    for rule in &config.rules {
        if !rule.path_prefix.starts_with('/') || rule.path_prefix.len() < 2 {
            errors.push(ValidationError::PrefixFormat {
                name: rule.name.clone(),
                prefix: rule.path_prefix.clone(),
            });
        } else if rule.path_prefix.ends_with('/') {
            errors.push(ValidationError::PrefixTrailingSlash {
                name: rule.name.clone(),
                prefix: rule.path_prefix.clone(),
            });
        }

        match Url::parse(&rule.upstream) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    errors.push(ValidationError::UpstreamScheme {
                        name: rule.name.clone(),
                        upstream: rule.upstream.clone(),
                    });
                } else if rule.upstream.ends_with('/')
                    || url.query().is_some()
                    || url.fragment().is_some()
                {
                    errors.push(ValidationError::UpstreamShape {
                        name: rule.name.clone(),
                        upstream: rule.upstream.clone(),
                    });
                }
            }
            Err(e) => {
                errors.push(ValidationError::UpstreamUrl {
                    name: rule.name.clone(),
                    upstream: rule.upstream.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RuleConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn bad_bind_address_is_reported() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::BindAddress(_)));
    }

    #[test]
    fn prefix_must_be_a_rooted_segment() {
        let mut config = ProxyConfig::default();
        config.rules = vec![
            RuleConfig {
                name: "no-slash".into(),
                path_prefix: "googleforms".into(),
                upstream: "https://docs.google.com/forms".into(),
            },
            RuleConfig {
                name: "trailing".into(),
                path_prefix: "/googleforms/".into(),
                upstream: "https://docs.google.com/forms".into(),
            },
        ];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::PrefixFormat { .. }));
        assert!(matches!(errors[1], ValidationError::PrefixTrailingSlash { .. }));
    }

    #[test]
    fn upstream_must_be_plain_http_base() {
        let mut config = ProxyConfig::default();
        config.rules = vec![
            RuleConfig {
                name: "scheme".into(),
                path_prefix: "/a".into(),
                upstream: "ftp://example.com".into(),
            },
            RuleConfig {
                name: "query".into(),
                path_prefix: "/b".into(),
                upstream: "https://example.com/base?x=1".into(),
            },
            RuleConfig {
                name: "relative".into(),
                path_prefix: "/c".into(),
                upstream: "/just/a/path".into(),
            },
        ];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidationError::UpstreamScheme { .. }));
        assert!(matches!(errors[1], ValidationError::UpstreamShape { .. }));
        assert!(matches!(errors[2], ValidationError::UpstreamUrl { .. }));
    }
}
