//! Rewrite rule matching and target resolution.
//!
//! # Responsibilities
//! - Match request paths against rule prefixes (case-sensitive, at
//!   segment boundaries: `/googleforms2` does not match `/googleforms`)
//! - Build the fully-qualified target URI for a matched rule
//! - Report no-match so the caller falls through with the request untouched
//!
//! # Design Decisions
//! - The remainder of the path and the query string are appended to the
//!   upstream base byte-for-byte, never decoded or re-encoded

use axum::http::Uri;

use crate::config::RuleConfig;

/// A compiled rewrite rule: path-segment prefix onto an upstream base.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: String,
    prefix: String,
    upstream: String,
}

impl RewriteRule {
    /// Compile a rule from its configuration.
    pub fn new(config: &RuleConfig) -> Self {
        Self {
            name: config.name.clone(),
            prefix: config.path_prefix.clone(),
            upstream: config.upstream.clone(),
        }
    }

    /// Strip the prefix at a segment boundary, returning the remainder.
    ///
    /// The remainder is either empty or starts with `/`; a prefix that
    /// merely shares leading bytes with a longer segment does not match.
    fn remainder<'a>(&self, path: &'a str) -> Option<&'a str> {
        let rest = path.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

/// Ordered rewrite rules; evaluated first-match-wins.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    /// Compile a rule set in declaration order.
    pub fn from_config(rules: &[RuleConfig]) -> Self {
        Self {
            rules: rules.iter().map(RewriteRule::new).collect(),
        }
    }

    /// Resolve an inbound URI to a target URI, or `None` for fallthrough.
    pub fn resolve(&self, uri: &Uri) -> Option<Uri> {
        let path = uri.path();

        for rule in &self.rules {
            let Some(rest) = rule.remainder(path) else {
                continue;
            };

            let mut target = String::with_capacity(rule.upstream.len() + rest.len() + 8);
            target.push_str(&rule.upstream);
            target.push_str(rest);
            if let Some(query) = uri.query() {
                target.push('?');
                target.push_str(query);
            }

            match target.parse::<Uri>() {
                Ok(target) => {
                    tracing::debug!(rule = %rule.name, target = %target, "Rewrite rule matched");
                    return Some(target);
                }
                Err(error) => {
                    tracing::warn!(
                        rule = %rule.name,
                        target = %target,
                        error = %error,
                        "Rewrite produced an invalid target URI; falling through"
                    );
                    return None;
                }
            }
        }

        None
    }
}
