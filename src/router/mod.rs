//! # Router Module
//!
//! Path matching and route resolution. The router scans an immutable,
//! declaration-ordered [`crate::table::RouteTable`]; the first route whose
//! compiled pattern matches the whole request path *and* whose placeholders
//! all parse under their converters wins.
//!
//! ## Two-phase approach
//!
//! 1. **Compilation**: at startup, patterns (e.g. `product/<int:pk>/`) are
//!    compiled into anchored regexes with one capture group per placeholder.
//! 2. **Matching**: for each incoming request, the router tests the path
//!    against the compiled patterns in declaration order, parses captured
//!    segments into typed [`crate::table::ParamValue`]s, and returns route
//!    metadata plus extracted parameters.
//!
//! A placeholder whose captured segment fails its converter (a non-numeric
//! `pk`, an integer overflowing `i64`) makes that route a non-match; the
//! scan continues and falls through to `None` if nothing else matches.

mod core;

pub use core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
