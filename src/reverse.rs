//! Reverse resolution: route name + arguments → concrete URL.
//!
//! The inverse of matching. Given the unique name a route was declared with
//! and a value for each of its placeholders, [`reverse`] renders the literal
//! URL the router would match back to that route:
//!
//! ```
//! use routemap::{build_table, reverse, RouteDef};
//!
//! let table = build_table(&[
//!     RouteDef::new("product/<int:pk>/", "product_detail", "product_detail"),
//! ]).unwrap();
//!
//! let url = reverse(&table, "product_detail", &[("pk", 42.into())]).unwrap();
//! assert_eq!(url, "/product/42/");
//! ```
//!
//! Arguments are checked against each placeholder's converter, so reverse
//! resolution never produces a URL the router could not match.

use thiserror::Error;

use crate::table::{ParamKind, ParamValue, RouteTable, Segment};

/// Error raised when a URL cannot be generated for a route name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReverseError {
    #[error("no route named `{0}`")]
    UnknownName(String),

    #[error("missing argument `{name}` for route `{route}`")]
    MissingArg { route: String, name: String },

    #[error("unexpected argument `{name}` for route `{route}`")]
    UnexpectedArg { route: String, name: String },

    #[error("argument `{name}`=`{value}` does not satisfy the `{kind}` converter of route `{route}`")]
    BadArg {
        route: String,
        name: String,
        value: String,
        kind: ParamKind,
    },
}

/// Render the concrete URL for a named route.
///
/// Every placeholder of the route's pattern must be supplied exactly once in
/// `args`; arguments that name no placeholder are rejected. Each rendered
/// value is validated against its placeholder's converter, so e.g. a
/// negative number can never be substituted into an `int` placeholder.
pub fn reverse(
    table: &RouteTable,
    name: &str,
    args: &[(&str, ParamValue)],
) -> Result<String, ReverseError> {
    let meta = table
        .get(name)
        .ok_or_else(|| ReverseError::UnknownName(name.to_string()))?;

    for (arg_name, _) in args {
        if !meta.params.iter().any(|p| p.name == *arg_name) {
            return Err(ReverseError::UnexpectedArg {
                route: name.to_string(),
                name: arg_name.to_string(),
            });
        }
    }

    if meta.segments.is_empty() {
        return Ok("/".to_string());
    }

    let mut url = String::with_capacity(meta.pattern.len() + 8);
    for segment in &meta.segments {
        url.push('/');
        match segment {
            Segment::Literal(text) => url.push_str(text),
            Segment::Param(param) => {
                let value = args
                    .iter()
                    .find(|(arg_name, _)| *arg_name == param.name)
                    .map(|(_, value)| value)
                    .ok_or_else(|| ReverseError::MissingArg {
                        route: name.to_string(),
                        name: param.name.clone(),
                    })?;

                let rendered = value.to_string();
                if !param.kind.accepts(&rendered) {
                    return Err(ReverseError::BadArg {
                        route: name.to_string(),
                        name: param.name.clone(),
                        value: rendered,
                        kind: param.kind,
                    });
                }
                url.push_str(&rendered);
            }
        }
    }

    Ok(url)
}
