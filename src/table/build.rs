//! Table compilation and validation.

use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::pattern::{parse_pattern, segments_to_regex, Segment};
use super::types::{ParamMeta, RouteDef, RouteMeta, RouteTable};

/// One defect found while compiling a route table.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Where the problem is, e.g. `route `product_detail``.
    pub location: String,
    /// Short machine-readable kind, e.g. `duplicate_name`.
    pub kind: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

/// Error returned when a route table cannot be compiled.
///
/// Carries every issue found, not just the first, so a broken table can be
/// fixed in one pass.
#[derive(Debug, Error)]
#[error("route table validation failed: {} issue(s)", issues.len())]
pub struct TableError {
    issues: Vec<ValidationIssue>,
}

impl TableError {
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }
}

/// Compile route declarations into an immutable [`RouteTable`].
///
/// Parses every pattern, compiles each route to an anchored regex, and
/// validates the table: route names must be pairwise unique, handler and
/// route names non-empty, patterns well-formed. Declaration order is
/// preserved exactly; it is the order routes are matched in.
pub fn build_table(defs: &[RouteDef]) -> Result<RouteTable, TableError> {
    let mut issues = Vec::new();
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut routes = Vec::with_capacity(defs.len());

    for def in defs {
        let location = format!("route `{}`", def.name);

        if def.name.is_empty() {
            issues.push(ValidationIssue::new(
                format!("pattern `{}`", def.pattern),
                "empty_name",
                "route name must not be empty",
            ));
            continue;
        }
        if !seen_names.insert(def.name.as_str()) {
            issues.push(ValidationIssue::new(
                location,
                "duplicate_name",
                format!("route name `{}` is already declared", def.name),
            ));
            continue;
        }
        if def.handler.is_empty() {
            issues.push(ValidationIssue::new(
                location,
                "empty_handler",
                "handler name must not be empty",
            ));
            continue;
        }

        let segments = match parse_pattern(&def.pattern) {
            Ok(segments) => segments,
            Err(err) => {
                issues.push(ValidationIssue::new(location, "pattern", err.to_string()));
                continue;
            }
        };

        let regex_src = segments_to_regex(&segments);
        let regex = match Regex::new(&regex_src) {
            Ok(regex) => regex,
            Err(err) => {
                issues.push(ValidationIssue::new(location, "regex", err.to_string()));
                continue;
            }
        };

        let params: Vec<ParamMeta> = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(meta) => Some(meta.clone()),
                Segment::Literal(_) => None,
            })
            .collect();

        debug!(
            route_name = %def.name,
            pattern = %def.pattern,
            regex = %regex_src,
            param_count = params.len(),
            "Route compiled"
        );

        routes.push(Arc::new(RouteMeta {
            pattern: def.pattern.clone(),
            handler_name: def.handler.clone(),
            name: def.name.clone(),
            methods: def.methods.clone(),
            params,
            regex,
            segments,
        }));
    }

    if !issues.is_empty() {
        return Err(TableError { issues });
    }

    Ok(RouteTable::new(routes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_preserves_declaration_order() {
        let defs = vec![
            RouteDef::new("", "home", "home"),
            RouteDef::new("a/", "a_handler", "a"),
            RouteDef::new("b/", "b_handler", "b"),
        ];
        let table = build_table(&defs).unwrap();
        let names: Vec<&str> = table.routes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["home", "a", "b"]);
    }

    #[test]
    fn test_duplicate_route_name_rejected() {
        let defs = vec![
            RouteDef::new("a/", "a_handler", "dup"),
            RouteDef::new("b/", "b_handler", "dup"),
        ];
        let err = build_table(&defs).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].kind, "duplicate_name");
    }

    #[test]
    fn test_all_issues_reported_together() {
        let defs = vec![
            RouteDef::new("/bad/", "h", "leading"),
            RouteDef::new("x/<wat:id>/", "h", "converter"),
            RouteDef::new("y/", "", "no_handler"),
        ];
        let err = build_table(&defs).unwrap_err();
        assert_eq!(err.issues().len(), 3);
    }

    #[test]
    fn test_name_index() {
        let defs = vec![RouteDef::new("product/<int:pk>/", "detail", "product_detail")];
        let table = build_table(&defs).unwrap();
        let meta = table.get("product_detail").unwrap();
        assert_eq!(meta.handler_name, "detail");
        assert_eq!(meta.params.len(), 1);
        assert!(table.get("missing").is_none());
    }
}
