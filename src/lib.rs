//! # routemap
//!
//! **routemap** is a declarative, table-driven URL router. Routes are declared
//! as `(pattern, handler-name, route-name)` triples using typed path
//! placeholders (`<int:pk>`), compiled once into an immutable routing table,
//! matched against incoming paths in declaration order, and dispatched to
//! handlers registered by name.
//!
//! ## Architecture
//!
//! The library is organized into a small number of modules:
//!
//! - **[`table`]** - Route declaration, pattern parsing, and table compilation
//! - **[`router`]** - Path matching and typed parameter extraction
//! - **[`reverse`]** - Reverse resolution (route name + arguments → URL)
//! - **[`dispatcher`]** - Synchronous handler registry and dispatch
//! - **[`product`]** - The product-catalog route table this crate ships
//!
//! ## Request flow
//!
//! 1. Route declarations are compiled into a [`table::RouteTable`] at startup.
//!    Compilation validates the table (unique route names, well-formed
//!    placeholders) and freezes it; the table is immutable afterwards.
//! 2. [`router::Router::route`] matches `(method, path)` against the table in
//!    declaration order. The first route whose pattern matches the whole path
//!    *and* whose placeholders all parse under their declared converters wins.
//!    A segment that fails its converter (e.g. a non-numeric `pk`) skips that
//!    route and the scan continues.
//! 3. [`dispatcher::Dispatcher::dispatch`] looks up the matched handler by
//!    name and invokes it with the extracted, typed parameters.
//! 4. No route matching is a `None` outcome for the caller to turn into its
//!    "not found" response; the router itself performs no I/O.
//!
//! ## Quick start
//!
//! ```
//! use routemap::{build_table, RouteDef, Router};
//! use http::Method;
//!
//! let defs = vec![
//!     RouteDef::new("", "home", "home"),
//!     RouteDef::new("product/<int:pk>/", "product_detail", "product_detail"),
//! ];
//! let table = build_table(&defs).expect("route table is valid");
//! let router = Router::new(table);
//!
//! let m = router.route(Method::GET, "/product/42/").expect("route matches");
//! assert_eq!(m.handler_name, "product_detail");
//! assert_eq!(m.get_path_param("pk").and_then(|v| v.as_int()), Some(42));
//!
//! // Reverse resolution: route name + arguments → concrete URL.
//! let url = router.reverse("product_detail", &[("pk", 42.into())]).unwrap();
//! assert_eq!(url, "/product/42/");
//! ```
//!
//! ## Concurrency
//!
//! The routing table is read-only after compilation, so a [`router::Router`]
//! can be cloned and shared across threads without synchronization. Dispatch
//! is a plain synchronous call; whatever concurrency model surrounds the
//! router (thread pool, event loop) is the caller's business.

pub mod dispatcher;
pub mod ids;
pub mod product;
pub mod reverse;
pub mod router;
pub mod table;

pub use dispatcher::{Dispatcher, HandlerRequest, HandlerResponse, HeaderVec};
pub use ids::RequestId;
pub use reverse::{reverse, ReverseError};
pub use router::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
pub use table::{
    build_table, ParamKind, ParamMeta, ParamValue, PatternError, RouteDef, RouteMeta, RouteTable,
    TableError, ValidationIssue,
};
