//! # Dispatcher Module
//!
//! Handler registry and dispatch. The dispatcher maps handler names to plain
//! synchronous handler functions and invokes the one a
//! [`crate::router::RouteMatch`] names.
//!
//! ## Handler registration
//!
//! ```
//! use routemap::dispatcher::{Dispatcher, HandlerResponse};
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register("get_product", |req| {
//!     HandlerResponse::json(200, serde_json::json!({
//!         "pk": req.int_param("pk"),
//!     }))
//! });
//! ```
//!
//! ## Dispatch flow
//!
//! 1. Router matches the incoming request → [`crate::router::RouteMatch`]
//! 2. Dispatcher looks up the handler by name (`None` when unregistered)
//! 3. The handler runs on the caller's thread with the typed parameters
//! 4. A panicking handler is caught and answered with a 500 response
//!
//! The routing step itself has no blocking or suspension semantics; if the
//! surrounding application wants handler-side concurrency, it wraps dispatch
//! in its own threads or event loop.

mod core;

pub use core::{
    Dispatcher, Handler, HandlerRequest, HandlerResponse, HeaderVec, MAX_INLINE_HEADERS,
};
