//! Dispatcher core - registry lookup and handler invocation.

use http::Method;
use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::ids::RequestId;
use crate::router::{ParamVec, RouteMatch};
use crate::table::ParamValue;

/// Maximum inline response headers before heap allocation.
pub const MAX_INLINE_HEADERS: usize = 8;

/// Stack-allocated header storage.
///
/// Header names are `Arc<str>` because they repeat across responses
/// (content-type and friends) and clone in O(1).
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// Request data passed to a handler.
///
/// Carries the routed request context: method, path, and the typed path
/// parameters the router extracted. The `pk` of `product/<int:pk>/` arrives
/// here as `ParamValue::Int`, never as a raw string.
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    /// Unique id for log correlation.
    pub request_id: RequestId,
    /// HTTP method the request was made with.
    pub method: Method,
    /// The request path that matched.
    pub path: String,
    /// Name of the handler processing this request.
    pub handler_name: String,
    /// Typed path parameters in pattern order.
    pub path_params: ParamVec,
}

impl HandlerRequest {
    /// Get a typed path parameter by name.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&ParamValue> {
        self.path_params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v)
    }

    /// Get an integer path parameter by name.
    #[inline]
    #[must_use]
    pub fn int_param(&self, name: &str) -> Option<i64> {
        self.get_path_param(name).and_then(ParamValue::as_int)
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

/// Response data returned from a handler.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse {
    /// HTTP status code (200, 404, 500, ...).
    pub status: u16,
    /// Response headers.
    #[serde(skip_serializing)]
    pub headers: HeaderVec,
    /// Response body as JSON.
    pub body: Value,
}

impl HandlerResponse {
    #[must_use]
    pub fn new(status: u16, headers: HeaderVec, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// JSON response with a content-type header.
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        let mut headers = HeaderVec::new();
        headers.push((Arc::from("content-type"), "application/json".to_string()));
        Self {
            status,
            headers,
            body,
        }
    }

    /// Error response with a `{"error": message}` body.
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, serde_json::json!({ "error": message }))
    }

    /// Get a header by name (case-insensitive).
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Add or replace a header.
    pub fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((Arc::from(name), value));
    }
}

/// A registered handler: a plain synchronous function from request to
/// response.
pub type Handler = dyn Fn(HandlerRequest) -> HandlerResponse + Send + Sync;

/// Dispatcher that routes matched requests to registered handlers.
///
/// Maintains a registry of handler names to handler functions. Dispatch is a
/// direct call on the caller's thread; the registry is immutable while
/// shared, so a populated dispatcher can serve concurrent callers without
/// locks.
#[derive(Clone, Default)]
pub struct Dispatcher {
    handlers: HashMap<String, Arc<Handler>>,
}

impl Dispatcher {
    /// Create a new empty dispatcher. Handlers are added with [`register`].
    ///
    /// [`register`]: Dispatcher::register
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler function under the given name.
    ///
    /// Registering over an existing name replaces the old handler.
    pub fn register<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        if self
            .handlers
            .insert(name.to_string(), Arc::new(handler))
            .is_some()
        {
            warn!(
                handler_name = %name,
                total_handlers = self.handlers.len(),
                "Replaced existing handler"
            );
        } else {
            info!(
                handler_name = %name,
                total_handlers = self.handlers.len(),
                "Handler registered"
            );
        }
    }

    /// Whether a handler is registered under the given name.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Dispatch a matched request to its handler.
    ///
    /// Looks up the handler by the route's handler name and invokes it with
    /// the typed request context. A panicking handler is caught and turned
    /// into a 500 response rather than unwinding into the caller.
    ///
    /// # Returns
    ///
    /// * `Some(HandlerResponse)` - the handler's response (or a synthesized
    ///   500 if it panicked)
    /// * `None` - no handler is registered for this route
    #[must_use]
    pub fn dispatch(&self, route_match: RouteMatch) -> Option<HandlerResponse> {
        let request_id = RequestId::new();

        debug!(
            request_id = %request_id,
            handler_name = %route_match.handler_name,
            available_handlers = self.handlers.len(),
            "Handler lookup"
        );

        let handler = match self.handlers.get(&route_match.handler_name) {
            Some(handler) => Arc::clone(handler),
            None => {
                let available: Vec<&String> = self.handlers.keys().collect();
                error!(
                    handler_name = %route_match.handler_name,
                    available_handlers = ?available,
                    "Handler not found"
                );
                return None;
            }
        };

        let request = HandlerRequest {
            request_id,
            method: route_match.method,
            path: route_match.path,
            handler_name: route_match.handler_name,
            path_params: route_match.path_params,
        };
        let handler_name = request.handler_name.clone();

        info!(
            request_id = %request_id,
            handler_name = %handler_name,
            method = %request.method,
            path = %request.path,
            path_params = ?request.path_params,
            "Request dispatched to handler"
        );

        let start = Instant::now();
        let response = match catch_unwind(AssertUnwindSafe(|| handler(request))) {
            Ok(response) => response,
            Err(panic) => {
                let panic_message = format!("{panic:?}");
                error!(
                    request_id = %request_id,
                    handler_name = %handler_name,
                    panic_message = %panic_message,
                    "Handler panicked"
                );
                HandlerResponse::error(500, &format!("Handler panicked: {}", panic_message))
            }
        };

        info!(
            request_id = %request_id,
            handler_name = %handler_name,
            status = response.status,
            latency_us = start.elapsed().as_micros() as u64,
            "Handler response"
        );

        Some(response)
    }
}
