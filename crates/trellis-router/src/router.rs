//! Route table construction and request matching.

use tracing::{debug, trace};

use crate::config::RouteConfig;
use crate::error::Result;
use crate::lookup::{AllowedMethods, RouteLookup, RouteMatch};
use crate::params::PathParams;
use crate::path::split_path;
use crate::route::{Route, RouteGroup, RouteId};

/// Collects routes before serving starts.
///
/// Registration needs `&mut self`, and [`build`](Self::build) consumes the
/// builder, so no route can be added once a [`Router`] exists.
#[derive(Debug, Default)]
pub struct RouterBuilder {
    routes: Vec<Route>,
}

impl RouterBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route that matches regardless of host.
    pub fn register(&mut self, method: impl AsRef<str>, path: &str) -> Result<RouteId> {
        self.register_with_host(method, "", path)
    }

    /// Registers a route restricted to a host pattern.
    ///
    /// `host` is empty (any host), a literal host, or `*.suffix`.
    pub fn register_with_host(
        &mut self,
        method: impl AsRef<str>,
        host: &str,
        path: &str,
    ) -> Result<RouteId> {
        let route = Route::new(self.next_id(), method.as_ref(), host, path)?;
        Ok(self.push(route))
    }

    /// Registers every route of a group, prefix applied.
    ///
    /// Either the whole group is registered or, on the first invalid route,
    /// nothing is.
    pub fn group(&mut self, group: RouteGroup) -> Result<Vec<RouteId>> {
        let host = group.host_pattern();
        self.register_all(group.entries().map(|(method, path)| (method, host, path)))
    }

    /// Registers the routes of a route file in file order, all or nothing.
    pub fn extend_from_config(&mut self, config: &RouteConfig) -> Result<Vec<RouteId>> {
        self.register_all(config.routes.iter().map(|entry| {
            (
                entry.method.as_str(),
                entry.host.as_deref().unwrap_or_default(),
                entry.path.as_str(),
            )
        }))
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no route is registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Freezes the route table.
    pub fn build(self) -> Router {
        debug!(routes = self.routes.len(), "Route table frozen");
        Router {
            routes: self.routes,
        }
    }

    fn next_id(&self) -> RouteId {
        RouteId(self.routes.len())
    }

    fn push(&mut self, route: Route) -> RouteId {
        let id = route.id();
        debug!(
            id = id.index(),
            method = %route.method(),
            host = %route.host(),
            pattern = %route.pattern(),
            "Registered route"
        );
        self.routes.push(route);
        id
    }

    fn register_all<I, M, H, P>(&mut self, entries: I) -> Result<Vec<RouteId>>
    where
        I: IntoIterator<Item = (M, H, P)>,
        M: AsRef<str>,
        H: AsRef<str>,
        P: AsRef<str>,
    {
        let start = self.routes.len();
        let staged = entries
            .into_iter()
            .enumerate()
            .map(|(i, (method, host, path))| {
                Route::new(
                    RouteId(start + i),
                    method.as_ref(),
                    host.as_ref(),
                    path.as_ref(),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(staged.into_iter().map(|route| self.push(route)).collect())
    }
}

/// A frozen, insertion-ordered route table.
///
/// Every query walks the routes in registration order and the first full
/// match wins, however specific a later route may be. The router is
/// `Send + Sync` and is meant to be shared behind an `Arc`.
///
/// # Example
///
/// ```
/// use trellis_router::{RouteLookup, RouterBuilder};
///
/// let mut builder = RouterBuilder::new();
/// let user = builder.register("GET", "/users/:id").unwrap();
/// let router = builder.build();
///
/// let found = router.match_path("GET", "/users/42").unwrap();
/// assert_eq!(found.id(), user);
/// assert_eq!(found.param("id"), Some("42"));
///
/// assert!(router.match_path("POST", "/users/42").is_none());
/// match router.lookup("POST", None, "/users/42") {
///     RouteLookup::MethodNotAllowed(allowed) => assert_eq!(allowed.header_value(), "GET"),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Starts a new route table.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Matches against host-agnostic routes only.
    pub fn match_path(&self, method: &str, path: &str) -> Option<RouteMatch<'_>> {
        let parts = split_path(path);
        self.routes
            .iter()
            .filter(|route| route.host().is_any())
            .find_map(|route| match_route(route, method, &parts))
    }

    /// Matches against every route, checking each route's host pattern.
    pub fn match_with_host(&self, method: &str, host: &str, path: &str) -> Option<RouteMatch<'_>> {
        let parts = split_path(path);
        self.routes
            .iter()
            .filter(|route| route.host().matches(host))
            .find_map(|route| match_route(route, method, &parts))
    }

    /// Methods of every route whose path pattern matches, ignoring method and host.
    pub fn allowed(&self, path: &str) -> AllowedMethods {
        let parts = split_path(path);
        let mut allowed = AllowedMethods::default();
        for route in &self.routes {
            if route.pattern().match_segments(&parts).is_some() {
                allowed.push(route.method().as_str());
            }
        }
        allowed
    }

    /// Resolves a request into a match, a 405 or a 404.
    ///
    /// With `host` set this behaves like [`match_with_host`](Self::match_with_host),
    /// without it like [`match_path`](Self::match_path).
    ///
    /// A miss is a 405 only when the path is registered and no route for it
    /// accepts `method`. If some route would accept the method but was
    /// excluded by its host, the result is `NotFound`.
    pub fn lookup(&self, method: &str, host: Option<&str>, path: &str) -> RouteLookup<'_> {
        let found = match host {
            Some(host) => self.match_with_host(method, host, path),
            None => self.match_path(method, path),
        };

        let lookup = match found {
            Some(found) => RouteLookup::Matched(found),
            None => {
                let allowed = self.allowed(path);
                if allowed.is_empty() || allowed.permits(method) {
                    RouteLookup::NotFound
                } else {
                    RouteLookup::MethodNotAllowed(allowed)
                }
            }
        };

        trace!(method, host = ?host, path, status = lookup.status(), "Route lookup");
        lookup
    }

    /// Returns the route registered under `id`.
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index())
    }

    /// Returns all routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no route is registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Generates a URL for a registered route.
    pub fn url_for(&self, id: RouteId, params: &PathParams) -> Option<String> {
        self.route(id).and_then(|route| route.pattern().reverse(params))
    }
}

fn match_route<'r>(route: &'r Route, method: &str, parts: &[&str]) -> Option<RouteMatch<'r>> {
    if !route.method().permits(method) {
        return None;
    }
    route
        .pattern()
        .match_segments(parts)
        .map(|params| RouteMatch { route, params })
}
