//! Route table inspection.
//!
//! Loads a JSON route file into a frozen [`Router`] and renders its contents
//! and routing decisions as plain text.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use trellis_router::{RouteConfig, RouteLookup, Router, RouterBuilder};

/// Reads and decodes a route file.
pub fn load_config(path: &Path) -> Result<RouteConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read route file {}", path.display()))?;
    RouteConfig::from_json(&json)
        .with_context(|| format!("Failed to parse route file {}", path.display()))
}

/// Builds a router from a decoded route file.
pub fn build_router(config: &RouteConfig) -> Result<Router> {
    let mut builder = RouterBuilder::new();
    builder
        .extend_from_config(config)
        .context("Route file contains an invalid route")?;
    Ok(builder.build())
}

/// Reads a route file and freezes it into a router.
pub fn load_router(path: &Path) -> Result<Router> {
    let config = load_config(path)?;
    debug!(entries = config.routes.len(), "Loaded route file");
    let router = build_router(&config)?;
    info!(routes = router.len(), path = %path.display(), "Route table ready");
    Ok(router)
}

/// One line per route, in matching order.
pub fn list_routes(router: &Router) -> String {
    router
        .routes()
        .iter()
        .map(|route| format!("{:>4}  {route}\n", route.id().to_string()))
        .collect()
}

/// Describes how a request would be resolved.
pub fn explain_match(router: &Router, method: &str, host: Option<&str>, path: &str) -> String {
    match router.lookup(method, host, path) {
        RouteLookup::Matched(found) => {
            let mut out = format!("200 {} {}\n", found.id(), found.route);
            let mut params: Vec<_> = found.params.iter().collect();
            params.sort_unstable();
            for (name, value) in params {
                out.push_str(&format!("  {name} = {value:?}\n"));
            }
            out
        }
        RouteLookup::MethodNotAllowed(allowed) => {
            format!("405 Method Not Allowed\nAllow: {}\n", allowed.header_value())
        }
        RouteLookup::NotFound => "404 Not Found\n".to_string(),
    }
}

/// Lists the methods registered for a path.
pub fn explain_allowed(router: &Router, path: &str) -> String {
    let allowed = router.allowed(path);
    if allowed.is_empty() {
        "(none)\n".to_string()
    } else {
        format!("{}\n", allowed.header_value())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ROUTES: &str = r#"{
        "routes": [
            { "method": "GET", "path": "/" },
            { "method": "GET", "path": "/users/:id" },
            { "method": "PUT", "path": "/users/:id" },
            { "method": "GET", "host": "*.example.com", "path": "/files/*path" }
        ]
    }"#;

    fn router() -> Router {
        build_router(&RouteConfig::from_json(ROUTES).unwrap()).unwrap()
    }

    #[test]
    fn test_list_routes() {
        let listing = list_routes(&router());
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  #0  GET /");
        assert_eq!(lines[3], "  #3  GET /files/*path (host *.example.com)");
    }

    #[test]
    fn test_explain_match() {
        let router = router();
        assert_eq!(
            explain_match(&router, "GET", None, "/users/7"),
            "200 #1 GET /users/:id\n  id = \"7\"\n"
        );
        assert_eq!(
            explain_match(&router, "DELETE", None, "/users/7"),
            "405 Method Not Allowed\nAllow: GET, PUT\n"
        );
        assert_eq!(explain_match(&router, "GET", None, "/nope"), "404 Not Found\n");
    }

    #[test]
    fn test_explain_match_with_host() {
        let router = router();
        let out = explain_match(&router, "GET", Some("cdn.example.com"), "/files/a/b.png");
        assert!(out.starts_with("200 #3 "));
        assert!(out.contains("path = \"a/b.png\""));

        // Right method, wrong host: nothing to allow, so not a 405.
        assert_eq!(
            explain_match(&router, "GET", Some("example.org"), "/files/a/b.png"),
            "404 Not Found\n"
        );
    }

    #[test]
    fn test_explain_allowed() {
        let router = router();
        assert_eq!(explain_allowed(&router, "/users/1"), "GET, PUT\n");
        assert_eq!(explain_allowed(&router, "/missing"), "(none)\n");
    }

    #[test]
    fn test_load_router_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROUTES.as_bytes()).unwrap();

        let router = load_router(file.path()).unwrap();
        assert_eq!(router.len(), 4);
    }

    #[test]
    fn test_invalid_route_is_reported() {
        let config = RouteConfig::from_json(r#"{"routes": [{"method": "", "path": "/"}]}"#).unwrap();
        let err = build_router(&config).unwrap_err();
        assert!(format!("{err:#}").contains("method name must not be empty"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_router(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read route file"));
    }
}
