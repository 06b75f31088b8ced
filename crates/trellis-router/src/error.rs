//! Error types for route registration.

use thiserror::Error;

/// Router-specific errors.
///
/// Only registration produces errors. Matching reports a miss through
/// `Option`/[`RouteLookup`](crate::RouteLookup), never through `Err`.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The method string was empty.
    #[error("invalid method: method name must not be empty")]
    InvalidMethod,

    /// The path pattern could not be compiled.
    #[error("invalid path pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as it was given.
        pattern: String,
        /// What was wrong with it.
        reason: PatternError,
    },

    /// A path parameter required for reverse routing or extraction was absent.
    #[error("missing path parameter: {0}")]
    MissingParam(String),

    /// A route file could not be decoded.
    #[error("invalid route config: {0}")]
    Config(#[from] serde_json::Error),
}

/// The structural rule a path pattern broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Empty pattern, or one that does not begin with `/`.
    #[error("pattern must start with '/'")]
    MissingLeadingSlash,

    /// Two consecutive slashes inside the pattern.
    #[error("pattern contains an empty segment")]
    EmptySegment,

    /// A `:` segment with nothing after it.
    #[error("parameter segment has no name")]
    EmptyParamName,

    /// A `*` segment with nothing after it.
    #[error("wildcard segment has no name")]
    EmptyWildcardName,

    /// A wildcard followed by further segments.
    #[error("wildcard segment must be the last segment")]
    WildcardNotLast,
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
