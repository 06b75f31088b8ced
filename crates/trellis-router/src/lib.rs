//! # trellis-router
//!
//! The request-routing engine of the trellis web toolkit.
//!
//! This crate provides:
//! - Path pattern compilation with static, `:param` and `*wildcard` segments
//! - Method filters (a literal method or `*`)
//! - Host patterns (literal or `*.suffix` subdomain wildcards)
//! - First-registered-wins matching over an insertion-ordered table
//! - An allowed-methods query for telling 404 from 405
//! - Route groups, reverse URL lookup and JSON route files
//!
//! ## Quick Start
//!
//! ```
//! use trellis_router::{Method, RouterBuilder};
//!
//! let mut builder = RouterBuilder::new();
//! let home = builder.register(Method::Get, "/").unwrap();
//! let user = builder.register(Method::Get, "/users/:id").unwrap();
//! builder.register(Method::Post, "/users").unwrap();
//!
//! // No routes can be added after this point.
//! let router = builder.build();
//!
//! assert_eq!(router.match_path("GET", "/").unwrap().id(), home);
//!
//! let found = router.match_path("GET", "/users/123").unwrap();
//! assert_eq!(found.id(), user);
//! assert_eq!(found.param("id"), Some("123"));
//! ```
//!
//! ## Ordering
//!
//! Routes are tried in the order they were registered and the first full
//! match wins. Register specific patterns before broad ones:
//!
//! ```
//! use trellis_router::RouterBuilder;
//!
//! let mut builder = RouterBuilder::new();
//! let new_user = builder.register("GET", "/users/new").unwrap();
//! let by_id = builder.register("GET", "/users/:id").unwrap();
//! let router = builder.build();
//!
//! assert_eq!(router.match_path("GET", "/users/new").unwrap().id(), new_user);
//! assert_eq!(router.match_path("GET", "/users/7").unwrap().id(), by_id);
//! ```
//!
//! ## Hosts
//!
//! ```
//! use trellis_router::RouterBuilder;
//!
//! let mut builder = RouterBuilder::new();
//! builder.register_with_host("GET", "example.com", "/").unwrap();
//! let wild = builder.register_with_host("GET", "*.example.com", "/wild").unwrap();
//! let router = builder.build();
//!
//! assert_eq!(
//!     router.match_with_host("GET", "foo.example.com", "/wild").unwrap().id(),
//!     wild
//! );
//! assert!(router.match_with_host("GET", "example.com", "/wild").is_none());
//! ```
//!
//! ## Sharing
//!
//! A built [`Router`] is immutable and `Send + Sync`, so it can be placed in
//! an `Arc` and queried from any number of threads.

mod config;
mod error;
mod host;
mod lookup;
mod method;
mod params;
mod path;
mod route;
mod router;

pub use config::{RouteConfig, RouteEntry};
pub use error::{PatternError, Result, RouterError};
pub use host::HostPattern;
pub use lookup::{AllowedMethods, RouteLookup, RouteMatch};
pub use method::{Method, MethodFilter, ANY_METHOD};
pub use params::PathParams;
pub use path::{split_path, PathPattern, Segment};
pub use route::{Route, RouteGroup, RouteId};
pub use router::{Router, RouterBuilder};
