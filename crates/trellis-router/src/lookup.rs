//! Route matching results.

use crate::method::ANY_METHOD;
use crate::params::PathParams;
use crate::route::{Route, RouteId};

/// A matched route with extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'r> {
    /// The matched route.
    pub route: &'r Route,
    /// Extracted path parameters.
    pub params: PathParams,
}

impl RouteMatch<'_> {
    /// Returns the matched route id.
    pub fn id(&self) -> RouteId {
        self.route.id()
    }

    /// Get a parameter value by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// Result of resolving a request to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteLookup<'r> {
    /// A route matched by method, host and path.
    Matched(RouteMatch<'r>),
    /// Some route matches the path, but none accepts the method. The set
    /// never permits the requested method.
    MethodNotAllowed(AllowedMethods),
    /// No route matches the path.
    NotFound,
}

impl RouteLookup<'_> {
    /// The HTTP status a collaborator should answer with absent a handler error.
    pub fn status(&self) -> u16 {
        match self {
            Self::Matched(_) => 200,
            Self::MethodNotAllowed(_) => 405,
            Self::NotFound => 404,
        }
    }
}

/// Methods registered for a path.
///
/// Deduplicated, in the order the routes were registered. A route registered
/// with `*` contributes `*`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedMethods {
    methods: Vec<String>,
}

impl AllowedMethods {
    pub(crate) fn push(&mut self, method: &str) {
        if !self.contains(method) {
            self.methods.push(method.to_string());
        }
    }

    /// Access the methods.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Check whether a method was registered, literally.
    pub fn contains(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    /// Check whether a request with `method` would pass one of the routes,
    /// counting `*` as any method.
    pub fn permits(&self, method: &str) -> bool {
        self.contains(method) || self.contains(ANY_METHOD)
    }

    /// Returns true if no route matched the path.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Returns the number of distinct methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Format as an HTTP Allow header value.
    pub fn header_value(&self) -> String {
        self.methods.join(", ")
    }
}
