use http::Method;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::pattern::Segment;

/// Typed path placeholder converter.
///
/// A converter decides which raw segments a placeholder accepts and what
/// typed value the handler receives for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// One or more decimal digits, no sign. Parses to `i64`; a segment that
    /// overflows `i64` is treated as a non-match for the route.
    Int,
    /// Any non-empty segment without `/`. The default for bare `<name>`
    /// placeholders.
    Str,
}

impl ParamKind {
    /// Look up a converter by its pattern tag (`int`, `str`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "int" => Some(ParamKind::Int),
            "str" => Some(ParamKind::Str),
            _ => None,
        }
    }

    /// Regex fragment that captures one segment of this kind.
    pub(crate) fn capture_pattern(&self) -> &'static str {
        match self {
            ParamKind::Int => "([0-9]+)",
            ParamKind::Str => "([^/]+)",
        }
    }

    /// Parse a raw captured segment into a typed value.
    ///
    /// Returns `None` when the segment does not satisfy the converter, which
    /// the router treats as a non-match for that route.
    pub fn parse(&self, raw: &str) -> Option<ParamValue> {
        match self {
            ParamKind::Int => raw.parse::<i64>().ok().map(ParamValue::Int),
            ParamKind::Str => Some(ParamValue::Str(raw.to_string())),
        }
    }

    /// Whether a rendered value would re-match this converter. Used by
    /// reverse resolution to refuse URLs the router could never match.
    pub fn accepts(&self, rendered: &str) -> bool {
        match self {
            ParamKind::Int => !rendered.is_empty() && rendered.bytes().all(|b| b.is_ascii_digit()),
            ParamKind::Str => !rendered.is_empty() && !rendered.contains('/'),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Int => write!(f, "int"),
            ParamKind::Str => write!(f, "str"),
        }
    }
}

/// A typed parameter value extracted from a matched path.
///
/// Handlers receive placeholder values already parsed - an `<int:pk>` segment
/// arrives as `Int(42)`, never as the raw string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Str(String),
}

impl ParamValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            ParamValue::Str(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(v) => Some(v.as_str()),
            ParamValue::Int(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

/// One placeholder of a pattern, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamMeta {
    pub name: String,
    pub kind: ParamKind,
}

/// A declared route, before compilation.
#[derive(Debug, Clone)]
pub struct RouteDef {
    /// URL pattern, e.g. `product/<int:pk>/`. Empty string is the root URL.
    pub pattern: String,
    /// Name of the handler invoked on match.
    pub handler: String,
    /// Unique symbolic name, used for reverse resolution.
    pub name: String,
    /// Methods this route answers to. Empty means any method.
    pub methods: Vec<Method>,
}

impl RouteDef {
    pub fn new(
        pattern: impl Into<String>,
        handler: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Restrict the route to the given methods.
    #[must_use]
    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }
}

/// A compiled route: the declaration plus its anchored regex and parameter
/// metadata.
#[derive(Debug, Clone)]
pub struct RouteMeta {
    /// The pattern as declared.
    pub pattern: String,
    /// Name of the handler invoked on match.
    pub handler_name: String,
    /// Unique route name for reverse lookup.
    pub name: String,
    /// Methods this route answers to. Empty means any method.
    pub methods: Vec<Method>,
    /// Placeholders in pattern order.
    pub params: Vec<ParamMeta>,
    pub(crate) regex: Regex,
    pub(crate) segments: Vec<Segment>,
}

impl RouteMeta {
    /// Test whether this route answers to the given method.
    #[must_use]
    pub fn allows_method(&self, method: &Method) -> bool {
        self.methods.is_empty() || self.methods.contains(method)
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// An immutable, ordered routing table.
///
/// Constructed once by [`super::build_table`] and never mutated afterwards;
/// it is safe to share across threads without synchronization.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Arc<RouteMeta>>,
    by_name: HashMap<String, Arc<RouteMeta>>,
}

impl RouteTable {
    pub(crate) fn new(routes: Vec<Arc<RouteMeta>>) -> Self {
        let by_name = routes
            .iter()
            .map(|r| (r.name.clone(), Arc::clone(r)))
            .collect();
        Self { routes, by_name }
    }

    /// Routes in declaration order - the order they are matched in.
    #[must_use]
    pub fn routes(&self) -> &[Arc<RouteMeta>] {
        &self.routes
    }

    /// Look up a route by its unique name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<RouteMeta>> {
        self.by_name.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
