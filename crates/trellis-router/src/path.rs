//! Path pattern compilation and matching.

use std::fmt;
use std::str::FromStr;

use crate::error::{PatternError, Result, RouterError};
use crate::params::PathParams;

/// A segment in a compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment byte for byte.
    Static(String),
    /// Binds exactly one non-empty request segment (`:name`).
    Param(String),
    /// Binds every remaining request segment, joined by `/` (`*name`).
    Wildcard(String),
}

impl Segment {
    /// Returns the bound name, if this segment binds one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Static(_) => None,
            Self::Param(name) | Self::Wildcard(name) => Some(name.as_str()),
        }
    }
}

/// A compiled path pattern for matching request paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    /// The original pattern string.
    pattern: String,
    /// Parsed segments. Empty for the root pattern `/`.
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compiles a path pattern string.
    ///
    /// Pattern syntax:
    /// - `/users` - Static path
    /// - `/users/:id` - Path with parameter
    /// - `/files/*path` - Wildcard (matches the rest of the path, possibly nothing)
    ///
    /// # Example
    ///
    /// ```
    /// use trellis_router::PathPattern;
    ///
    /// let pattern = PathPattern::parse("/posts/:id/comments/:comment_id").unwrap();
    /// let params = pattern.match_path("/posts/123/comments/456").unwrap();
    /// assert_eq!(params.get("id"), Some("123"));
    /// assert_eq!(params.get("comment_id"), Some("456"));
    /// ```
    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = |reason| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        if !pattern.starts_with('/') {
            return Err(invalid(PatternError::MissingLeadingSlash));
        }

        let mut segments = Vec::new();
        if pattern != "/" {
            let parts: Vec<&str> = pattern.trim_matches('/').split('/').collect();
            let last = parts.len() - 1;

            for (i, part) in parts.into_iter().enumerate() {
                if part.is_empty() {
                    return Err(invalid(PatternError::EmptySegment));
                }

                let segment = if let Some(name) = part.strip_prefix(':') {
                    if name.is_empty() {
                        return Err(invalid(PatternError::EmptyParamName));
                    }
                    Segment::Param(name.to_string())
                } else if let Some(name) = part.strip_prefix('*') {
                    if name.is_empty() {
                        return Err(invalid(PatternError::EmptyWildcardName));
                    }
                    if i != last {
                        return Err(invalid(PatternError::WildcardNotLast));
                    }
                    Segment::Wildcard(name.to_string())
                } else {
                    Segment::Static(part.to_string())
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
        })
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the parameter and wildcard names in pattern order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::name)
    }

    /// Whether the pattern ends in a wildcard.
    pub fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard(_)))
    }

    /// Attempts to match a raw request path against this pattern.
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        self.match_segments(&split_path(path))
    }

    /// Walks the compiled segments against already split request segments.
    ///
    /// Without a wildcard the segment counts must be equal. A wildcard
    /// accepts whatever remains, including nothing.
    pub fn match_segments(&self, parts: &[&str]) -> Option<PathParams> {
        let mut params = PathParams::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    if parts.get(i) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(i).filter(|value| !value.is_empty())?;
                    params.insert(name.as_str(), *value);
                }
                Segment::Wildcard(name) => {
                    let rest = parts.get(i..).map(|rest| rest.join("/")).unwrap_or_default();
                    params.insert(name.as_str(), rest);
                    return Some(params);
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }

    /// Generates a concrete path from parameters.
    ///
    /// Returns `None` when a parameter is missing or empty. An empty
    /// wildcard value renders nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use trellis_router::{PathParams, PathPattern};
    ///
    /// let pattern = PathPattern::parse("/posts/:id").unwrap();
    /// let mut params = PathParams::new();
    /// params.insert("id", "123");
    /// assert_eq!(pattern.reverse(&params), Some("/posts/123".to_string()));
    /// ```
    pub fn reverse(&self, params: &PathParams) -> Option<String> {
        let mut path = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Static(s) => {
                    path.push('/');
                    path.push_str(s);
                }
                Segment::Param(name) => {
                    let value = params.get(name).filter(|v| !v.is_empty())?;
                    path.push('/');
                    path.push_str(value);
                }
                Segment::Wildcard(name) => {
                    let value = params.get(name)?;
                    if !value.is_empty() {
                        path.push('/');
                        path.push_str(value.trim_start_matches('/'));
                    }
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Some(path)
    }
}

impl FromStr for PathPattern {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Splits a request path into its `/`-delimited segments.
///
/// An empty path is treated as `/`, and the root yields no segments.
/// Leading and trailing slashes are ignored.
pub fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(pattern: &str) -> PatternError {
        match PathPattern::parse(pattern) {
            Err(RouterError::InvalidPattern { reason, .. }) => reason,
            other => panic!("expected invalid pattern for {pattern:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_root_pattern_has_no_segments() {
        let pattern = PathPattern::parse("/").unwrap();
        assert!(pattern.segments().is_empty());
        assert!(pattern.match_path("/").is_some());
        assert!(pattern.match_path("").is_some());
        assert!(pattern.match_path("/users").is_none());
    }

    #[test]
    fn test_segment_kinds() {
        let pattern = PathPattern::parse("/api/:version/*rest").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Static("api".to_string()),
                Segment::Param("version".to_string()),
                Segment::Wildcard("rest".to_string()),
            ]
        );
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), ["version", "rest"]);
        assert!(pattern.has_wildcard());
        assert_eq!(pattern.as_str(), "/api/:version/*rest");
    }

    #[test]
    fn test_compile_is_deterministic() {
        let a = PathPattern::parse("/teams/:team/members/*tail").unwrap();
        let b = PathPattern::parse("/teams/:team/members/*tail").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_trailing_slash_in_pattern_is_trimmed() {
        let pattern = PathPattern::parse("/users/").unwrap();
        assert_eq!(pattern.segments(), &[Segment::Static("users".to_string())]);
    }

    #[test]
    fn test_rejects_missing_leading_slash() {
        assert_eq!(reason(""), PatternError::MissingLeadingSlash);
        assert_eq!(reason("users"), PatternError::MissingLeadingSlash);
    }

    #[test]
    fn test_rejects_empty_segment() {
        assert_eq!(reason("/a//b"), PatternError::EmptySegment);
        assert_eq!(reason("//"), PatternError::EmptySegment);
    }

    #[test]
    fn test_rejects_unnamed_bindings() {
        assert_eq!(reason("/users/:"), PatternError::EmptyParamName);
        assert_eq!(reason("/files/*"), PatternError::EmptyWildcardName);
    }

    #[test]
    fn test_rejects_wildcard_not_last() {
        assert_eq!(reason("/assets/*path/more"), PatternError::WildcardNotLast);
    }

    #[test]
    fn test_static_match_is_case_sensitive() {
        let pattern = PathPattern::parse("/Users").unwrap();
        assert!(pattern.match_path("/Users").is_some());
        assert!(pattern.match_path("/users").is_none());
    }

    #[test]
    fn test_segment_count_must_be_exact() {
        let pattern = PathPattern::parse("/users/:id").unwrap();
        assert!(pattern.match_path("/users").is_none());
        assert!(pattern.match_path("/users/1/posts").is_none());
        assert_eq!(pattern.match_path("/users/1/").unwrap().get("id"), Some("1"));
    }

    #[test]
    fn test_param_rejects_empty_segment() {
        let pattern = PathPattern::parse("/a/:id/b").unwrap();
        assert!(pattern.match_path("/a//b").is_none());
    }

    #[test]
    fn test_wildcard_binds_remainder() {
        let pattern = PathPattern::parse("/assets/*path").unwrap();
        let params = pattern.match_path("/assets/css/app.css").unwrap();
        assert_eq!(params.get("path"), Some("css/app.css"));
        assert_eq!(pattern.match_path("/assets").unwrap().get("path"), Some(""));
        assert_eq!(pattern.match_path("/assets/").unwrap().get("path"), Some(""));
        assert!(pattern.match_path("/other/x").is_none());
    }

    #[test]
    fn test_root_wildcard() {
        let pattern = PathPattern::parse("/*all").unwrap();
        assert_eq!(pattern.match_path("/").unwrap().get("all"), Some(""));
        assert_eq!(pattern.match_path("/a/b").unwrap().get("all"), Some("a/b"));
    }

    #[test]
    fn test_split_path() {
        assert!(split_path("").is_empty());
        assert!(split_path("/").is_empty());
        assert_eq!(split_path("/a/b/"), ["a", "b"]);
        assert_eq!(split_path("/a//b"), ["a", "", "b"]);
    }

    #[test]
    fn test_reverse() {
        let pattern = PathPattern::parse("/posts/:id/files/*path").unwrap();
        let mut params = PathParams::new();
        params.insert("id", "7");
        params.insert("path", "a/b.txt");
        assert_eq!(pattern.reverse(&params), Some("/posts/7/files/a/b.txt".to_string()));

        params.insert("path", "");
        assert_eq!(pattern.reverse(&params), Some("/posts/7/files".to_string()));
    }

    #[test]
    fn test_reverse_missing_param() {
        let pattern = PathPattern::parse("/posts/:id").unwrap();
        assert!(pattern.reverse(&PathParams::new()).is_none());
        assert_eq!(
            PathPattern::parse("/").unwrap().reverse(&PathParams::new()),
            Some("/".to_string())
        );
    }
}
