//! Host restrictions on routes.

use std::fmt;

/// Which request hosts a route accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostPattern {
    /// No restriction. Registered as an empty string.
    Any,
    /// Exactly this host.
    Exact(String),
    /// Any subdomain of a suffix. Holds the suffix with its leading dot,
    /// so `*.example.com` is stored as `.example.com`.
    Subdomain(String),
}

impl HostPattern {
    /// Interprets a registration host string.
    ///
    /// - `""` accepts every host
    /// - `*.example.com` accepts `api.example.com` and `a.b.example.com`
    ///   but not `example.com`
    /// - anything else must equal the request host literally
    pub fn parse(pattern: &str) -> Self {
        if pattern.is_empty() {
            Self::Any
        } else if let Some(suffix) = pattern.strip_prefix('*').filter(|s| s.starts_with('.')) {
            Self::Subdomain(suffix.to_string())
        } else {
            Self::Exact(pattern.to_string())
        }
    }

    /// Returns true if every host is accepted.
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Whether `host` satisfies this pattern.
    pub fn matches(&self, host: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == host,
            // The label directly in front of the suffix must be non-empty.
            Self::Subdomain(suffix) => host
                .strip_suffix(suffix.as_str())
                .and_then(|prefix| prefix.rsplit('.').next())
                .is_some_and(|label| !label.is_empty()),
        }
    }
}

impl fmt::Display for HostPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Exact(host) => f.write_str(host),
            Self::Subdomain(suffix) => write!(f, "*{suffix}"),
        }
    }
}
