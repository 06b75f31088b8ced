//! Declarative route files.
//!
//! ```json
//! {
//!   "routes": [
//!     { "method": "GET", "path": "/" },
//!     { "method": "GET", "host": "*.example.com", "path": "/tenant/*rest" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Method name, or `*` for any.
    pub method: String,
    /// Host pattern. Absent or empty means any host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Path pattern.
    pub path: String,
}

/// An ordered list of route declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl RouteConfig {
    /// Decodes a route file.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the routes as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
