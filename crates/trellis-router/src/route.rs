//! Registered routes and route groups.

use std::fmt;

use crate::error::Result;
use crate::host::HostPattern;
use crate::method::{Method, MethodFilter, ANY_METHOD};
use crate::path::PathPattern;

/// Identifies a registered route.
///
/// Ids are handed out in registration order starting at zero. `RouteId(0)` is
/// the first route, not a "not found" marker; a miss is always `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single route definition. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: RouteId,
    method: MethodFilter,
    host: HostPattern,
    pattern: PathPattern,
}

impl Route {
    /// Validates and compiles a route. Nothing is registered.
    pub(crate) fn new(id: RouteId, method: &str, host: &str, path: &str) -> Result<Self> {
        let method = MethodFilter::parse(method)?;
        let pattern = PathPattern::parse(path)?;
        Ok(Self {
            id,
            method,
            host: HostPattern::parse(host),
            pattern,
        })
    }

    /// Returns the id assigned at registration.
    pub fn id(&self) -> RouteId {
        self.id
    }

    /// Returns the methods this route accepts.
    pub fn method(&self) -> &MethodFilter {
        &self.method
    }

    /// Returns the host restriction.
    pub fn host(&self) -> &HostPattern {
        &self.host
    }

    /// Returns the compiled path pattern.
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.pattern)?;
        if !self.host.is_any() {
            write!(f, " (host {})", self.host)?;
        }
        Ok(())
    }
}

/// A group of routes with a common prefix and, optionally, a common host.
///
/// # Example
///
/// ```
/// use trellis_router::{RouteGroup, RouterBuilder};
///
/// let api = RouteGroup::new("/api/v1")
///     .get("/users")
///     .get("/users/:id")
///     .post("/users");
///
/// let mut builder = RouterBuilder::new();
/// let ids = builder.group(api).unwrap();
/// assert_eq!(ids.len(), 3);
///
/// let router = builder.build();
/// let found = router.match_path("GET", "/api/v1/users/9").unwrap();
/// assert_eq!(found.id(), ids[1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteGroup {
    /// URL prefix for all routes in this group.
    prefix: String,
    /// Host pattern applied to every route.
    host: String,
    /// `(method, path)` pairs in declaration order.
    routes: Vec<(String, String)>,
}

impl RouteGroup {
    /// Creates a new route group with the given prefix.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            ..Self::default()
        }
    }

    /// Restricts every route in the group to a host pattern.
    #[must_use]
    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Adds a route with any method string.
    #[must_use]
    pub fn route(mut self, method: impl AsRef<str>, path: &str) -> Self {
        self.routes
            .push((method.as_ref().to_string(), path.to_string()));
        self
    }

    /// Adds a GET route.
    #[must_use]
    pub fn get(self, path: &str) -> Self {
        self.route(Method::Get, path)
    }

    /// Adds a POST route.
    #[must_use]
    pub fn post(self, path: &str) -> Self {
        self.route(Method::Post, path)
    }

    /// Adds a PUT route.
    #[must_use]
    pub fn put(self, path: &str) -> Self {
        self.route(Method::Put, path)
    }

    /// Adds a PATCH route.
    #[must_use]
    pub fn patch(self, path: &str) -> Self {
        self.route(Method::Patch, path)
    }

    /// Adds a DELETE route.
    #[must_use]
    pub fn delete(self, path: &str) -> Self {
        self.route(Method::Delete, path)
    }

    /// Adds a route accepting every method.
    #[must_use]
    pub fn any(self, path: &str) -> Self {
        self.route(ANY_METHOD, path)
    }

    pub(crate) fn host_pattern(&self) -> &str {
        &self.host
    }

    /// Returns `(method, full path)` for every route in the group.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, String)> {
        self.routes
            .iter()
            .map(|(method, path)| (method.as_str(), join_prefix(&self.prefix, path)))
    }
}

/// Joins a group prefix and a route path.
///
/// A `/` path maps to the prefix itself and an empty or `/` prefix adds
/// nothing. Anything else is concatenated as written, so malformed input is
/// still rejected by the pattern compiler.
fn join_prefix(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        path.to_string()
    } else if path == "/" || path.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_prefix() {
        assert_eq!(join_prefix("/api", "/users"), "/api/users");
        assert_eq!(join_prefix("/api/", "/users"), "/api/users");
        assert_eq!(join_prefix("/api", "/"), "/api");
        assert_eq!(join_prefix("/", "/users"), "/users");
        assert_eq!(join_prefix("", "/"), "/");
        assert_eq!(join_prefix("/api", "users"), "/apiusers");
    }

    #[test]
    fn test_route_display() {
        let route = Route::new(RouteId(3), "GET", "*.example.com", "/users/:id").unwrap();
        assert_eq!(route.to_string(), "GET /users/:id (host *.example.com)");

        let route = Route::new(RouteId(4), "*", "", "/").unwrap();
        assert_eq!(route.to_string(), "* /");
        assert_eq!(route.id().to_string(), "#4");
    }

    #[test]
    fn test_group_entries() {
        let group = RouteGroup::new("/admin").host("admin.test").get("/").delete("/users/:id");
        let entries: Vec<_> = group.entries().collect();
        assert_eq!(
            entries,
            [("GET", "/admin".to_string()), ("DELETE", "/admin/users/:id".to_string())]
        );
        assert_eq!(group.host_pattern(), "admin.test");
    }
}
