//! HTTP methods and per-route method filters.

use std::fmt;

use crate::error::{Result, RouterError};

/// The symbol a route registers to accept every method.
pub const ANY_METHOD: &str = "*";

/// Common HTTP request methods.
///
/// Routes are not limited to these; any non-empty method name can be
/// registered. This enum is a convenience for the usual verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method
    Get,
    /// POST method
    Post,
    /// PUT method
    Put,
    /// PATCH method
    Patch,
    /// DELETE method
    Delete,
    /// HEAD method
    Head,
    /// OPTIONS method
    Options,
}

impl Method {
    /// Returns the method as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which request methods a route accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MethodFilter {
    /// Registered as `*`: every method.
    Any,
    /// Exactly this method name, compared case-sensitively.
    Exact(String),
}

impl MethodFilter {
    /// Parses a registration method string.
    pub fn parse(method: &str) -> Result<Self> {
        match method {
            "" => Err(RouterError::InvalidMethod),
            ANY_METHOD => Ok(Self::Any),
            name => Ok(Self::Exact(name.to_string())),
        }
    }

    /// Whether a request with `method` passes this filter.
    pub fn permits(&self, method: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(name) => name == method,
        }
    }

    /// Returns the registered method string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => ANY_METHOD,
            Self::Exact(name) => name,
        }
    }
}

impl From<Method> for MethodFilter {
    fn from(method: Method) -> Self {
        Self::Exact(method.as_str().to_string())
    }
}

impl fmt::Display for MethodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
