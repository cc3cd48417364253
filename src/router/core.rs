//! Router core - the match hot path.

use http::Method;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::reverse::{self, ReverseError};
use crate::table::{ParamValue, RouteMeta, RouteTable};

/// Maximum number of path parameters before heap allocation.
/// Route tables rarely nest deeper than a handful of placeholders.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the match hot path.
///
/// Param names are `Arc<str>` because they come from the static route table
/// and clone in O(1); values are per-request data.
pub type ParamVec = SmallVec<[(Arc<str>, ParamValue); MAX_INLINE_PARAMS]>;

/// Result of successfully matching a request path to a route.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route (shared with the table, cheap to clone).
    pub route: Arc<RouteMeta>,
    /// The method the request was made with.
    pub method: Method,
    /// The request path that matched.
    pub path: String,
    /// Typed path parameters in pattern order, e.g. `pk` → `Int(42)`.
    pub path_params: ParamVec,
    /// Name of the handler that should process this request.
    pub handler_name: String,
}

impl RouteMatch {
    /// Get a typed path parameter by name.
    ///
    /// Names are unique within a pattern, so there is exactly one candidate.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&ParamValue> {
        self.path_params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v)
    }

    /// Convert path_params to a HashMap. This allocates - prefer
    /// `get_path_param` on the hot path.
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, ParamValue> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Router that matches request paths against an immutable routing table.
///
/// Matching is a first-match-wins scan in declaration order: a literal
/// segment must match exactly, a placeholder segment must both match shape
/// and parse under its declared converter. A converter failure (a
/// non-numeric `pk`, an integer that overflows) skips that route and the
/// scan continues; exhausting the table yields `None`, the caller's
/// "not found" outcome.
///
/// The router holds no mutable state and performs no I/O; clones share the
/// underlying table.
#[derive(Debug, Clone)]
pub struct Router {
    table: Arc<RouteTable>,
}

impl Router {
    /// Create a router over a compiled route table.
    #[must_use]
    pub fn new(table: RouteTable) -> Self {
        let routes_summary: Vec<String> = table
            .routes()
            .iter()
            .take(10)
            .map(|meta| format!("/{} -> {}", meta.pattern, meta.handler_name))
            .collect();

        info!(
            routes_count = table.len(),
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );

        Self {
            table: Arc::new(table),
        }
    }

    /// The underlying route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Match a request to a route.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method of the request
    /// * `path` - Request path (e.g. `/product/42/`)
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - the first route in declaration order that
    ///   matches the whole path with all placeholders parsing
    /// * `None` - no route matches (the caller's 404 equivalent)
    #[must_use]
    pub fn route(&self, method: Method, path: &str) -> Option<RouteMatch> {
        debug!(method = %method, path = %path, "Route match attempt");

        for meta in self.table.routes() {
            if !meta.allows_method(&method) {
                continue;
            }
            let Some(captures) = meta.regex().captures(path) else {
                continue;
            };
            let Some(path_params) = extract_params(meta, &captures) else {
                // Shape matched but a converter refused the segment; the
                // route is treated as a non-match and the scan continues.
                debug!(
                    method = %method,
                    path = %path,
                    route_pattern = %meta.pattern,
                    "Placeholder failed its converter, trying next route"
                );
                continue;
            };

            info!(
                method = %method,
                path = %path,
                handler_name = %meta.handler_name,
                route_pattern = %meta.pattern,
                path_params = ?path_params,
                "Route matched"
            );

            return Some(RouteMatch {
                route: Arc::clone(meta),
                method,
                path: path.to_string(),
                path_params,
                handler_name: meta.handler_name.clone(),
            });
        }

        warn!(method = %method, path = %path, "No route matched");
        None
    }

    /// Reverse-resolve a route name into a concrete URL.
    ///
    /// Convenience wrapper over [`crate::reverse::reverse`].
    pub fn reverse(
        &self,
        name: &str,
        args: &[(&str, ParamValue)],
    ) -> Result<String, ReverseError> {
        reverse::reverse(&self.table, name, args)
    }

    /// Print all registered routes to stdout. Debugging aid.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.table.len());
        for meta in self.table.routes() {
            println!("[route] /{} -> {} ({})", meta.pattern, meta.handler_name, meta.name);
        }
    }
}

/// Parse every captured segment under its declared converter.
///
/// Returns `None` as soon as one segment fails, which the router treats as a
/// non-match for the route.
fn extract_params(meta: &Arc<RouteMeta>, captures: &regex::Captures<'_>) -> Option<ParamVec> {
    let mut params = ParamVec::new();
    for (idx, param) in meta.params.iter().enumerate() {
        let raw = captures.get(idx + 1)?.as_str();
        let value = param.kind.parse(raw)?;
        params.push((Arc::from(param.name.as_str()), value));
    }
    Some(params)
}
