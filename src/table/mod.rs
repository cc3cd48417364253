//! # Table Module
//!
//! Route declaration and compilation. A routing table starts life as a list
//! of [`RouteDef`] declarations - URL pattern, handler name, route name - and
//! is compiled once, at startup, into an immutable [`RouteTable`].
//!
//! ## Pattern grammar
//!
//! Patterns are written the way the table's original declarations were:
//!
//! - Patterns do not start with `/`; the empty pattern denotes the root URL.
//! - A trailing `/` is significant: `product/create/` matches
//!   `/product/create/` and **not** `/product/create`.
//! - A placeholder occupies a whole segment and is written `<kind:name>`,
//!   e.g. `product/<int:pk>/`. A bare `<name>` defaults to the `str` kind.
//!
//! ## Compilation
//!
//! [`build_table`] parses every pattern into segments, compiles each route to
//! an anchored regex, and validates the table as a whole. Problems are
//! collected as [`ValidationIssue`]s and returned together in a single
//! [`TableError`], so a broken table reports every defect at once rather than
//! the first one found. Table invariants:
//!
//! - route names are pairwise unique;
//! - a parameter name appears at most once within a pattern;
//! - declaration order is preserved exactly (it is the match order).

mod build;
mod pattern;
mod types;

pub use build::{build_table, TableError, ValidationIssue};
pub use pattern::{parse_pattern, PatternError, Segment};
pub use types::{ParamKind, ParamMeta, ParamValue, RouteDef, RouteMeta, RouteTable};
