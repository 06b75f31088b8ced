#![allow(dead_code)]

use trellis_router::{RouteId, Router, RouterBuilder};

/// Registers host-agnostic `(method, path)` pairs in order.
pub fn build_router(routes: &[(&str, &str)]) -> (Router, Vec<RouteId>) {
    let mut builder = RouterBuilder::new();
    let ids = routes
        .iter()
        .map(|(method, path)| {
            builder
                .register(*method, path)
                .unwrap_or_else(|e| panic!("Failed to register {method} {path}: {e}"))
        })
        .collect();
    (builder.build(), ids)
}

/// Registers `(method, host, path)` triples in order.
pub fn build_host_router(routes: &[(&str, &str, &str)]) -> (Router, Vec<RouteId>) {
    let mut builder = RouterBuilder::new();
    let ids = routes
        .iter()
        .map(|(method, host, path)| {
            builder
                .register_with_host(*method, host, path)
                .unwrap_or_else(|e| panic!("Failed to register {method} {host} {path}: {e}"))
        })
        .collect();
    (builder.build(), ids)
}

/// Matches host-agnostically and returns the id, panicking on a miss.
pub fn matched(router: &Router, method: &str, path: &str) -> RouteId {
    router
        .match_path(method, path)
        .unwrap_or_else(|| panic!("Expected a match for {method} {path}"))
        .id()
}
