//! Pattern parsing: `product/<int:pk>/` → literal and placeholder segments.

use thiserror::Error;

use super::types::{ParamKind, ParamMeta};

/// One segment of a parsed pattern.
///
/// A trailing `/` in the pattern parses to a final empty `Literal`, so
/// rendering a pattern is always `/` + segments joined with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(ParamMeta),
}

/// Error raised for a malformed URL pattern.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern `{pattern}` must not start with `/`")]
    LeadingSlash { pattern: String },

    #[error("empty segment in pattern `{pattern}`")]
    EmptySegment { pattern: String },

    #[error("unterminated placeholder `{segment}` in pattern `{pattern}`")]
    Unterminated { pattern: String, segment: String },

    #[error("unknown converter `{kind}` in pattern `{pattern}`")]
    UnknownConverter { pattern: String, kind: String },

    #[error("invalid parameter name `{name}` in pattern `{pattern}`")]
    InvalidName { pattern: String, name: String },

    #[error("parameter `{name}` declared twice in pattern `{pattern}`")]
    DuplicateParam { pattern: String, name: String },

    #[error("stray `<` or `>` in literal segment `{segment}` of pattern `{pattern}`")]
    StrayBracket { pattern: String, segment: String },
}

/// Parse a URL pattern into segments.
///
/// The empty pattern denotes the root URL and parses to no segments. A
/// placeholder must occupy a whole segment; `<int:pk>` declares an `int`
/// parameter named `pk`, and `<pk>` defaults the kind to `str`.
pub fn parse_pattern(pattern: &str) -> Result<Vec<Segment>, PatternError> {
    if pattern.is_empty() {
        return Ok(Vec::new());
    }
    if pattern.starts_with('/') {
        return Err(PatternError::LeadingSlash {
            pattern: pattern.to_string(),
        });
    }

    let pieces: Vec<&str> = pattern.split('/').collect();
    let last = pieces.len() - 1;
    let mut segments = Vec::with_capacity(pieces.len());
    let mut seen_params: Vec<String> = Vec::new();

    for (idx, piece) in pieces.iter().enumerate() {
        if piece.is_empty() {
            // Only a trailing slash may produce an empty piece.
            if idx == last {
                segments.push(Segment::Literal(String::new()));
                continue;
            }
            return Err(PatternError::EmptySegment {
                pattern: pattern.to_string(),
            });
        }

        if let Some(inner) = piece.strip_prefix('<') {
            let inner = inner
                .strip_suffix('>')
                .ok_or_else(|| PatternError::Unterminated {
                    pattern: pattern.to_string(),
                    segment: piece.to_string(),
                })?;

            let (kind, name) = match inner.split_once(':') {
                Some((tag, name)) => {
                    let kind =
                        ParamKind::from_tag(tag).ok_or_else(|| PatternError::UnknownConverter {
                            pattern: pattern.to_string(),
                            kind: tag.to_string(),
                        })?;
                    (kind, name)
                }
                None => (ParamKind::Str, inner),
            };

            if !is_valid_param_name(name) {
                return Err(PatternError::InvalidName {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }
            if seen_params.iter().any(|n| n == name) {
                return Err(PatternError::DuplicateParam {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }

            seen_params.push(name.to_string());
            segments.push(Segment::Param(ParamMeta {
                name: name.to_string(),
                kind,
            }));
        } else {
            if piece.contains('<') || piece.contains('>') {
                return Err(PatternError::StrayBracket {
                    pattern: pattern.to_string(),
                    segment: piece.to_string(),
                });
            }
            segments.push(Segment::Literal(piece.to_string()));
        }
    }

    Ok(segments)
}

/// Compile parsed segments into an anchored regex source string.
///
/// The root pattern (no segments) compiles to `^/$`; otherwise every segment
/// contributes `/` plus either its escaped literal text or its converter's
/// capture group.
pub(crate) fn segments_to_regex(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "^/$".to_string();
    }

    let mut out = String::with_capacity(16);
    out.push('^');
    for segment in segments {
        out.push('/');
        match segment {
            Segment::Literal(text) => out.push_str(&regex::escape(text)),
            Segment::Param(meta) => out.push_str(meta.kind.capture_pattern()),
        }
    }
    out.push('$');
    out
}

fn is_valid_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_is_root() {
        assert_eq!(parse_pattern("").unwrap(), Vec::new());
        assert_eq!(segments_to_regex(&[]), "^/$");
    }

    #[test]
    fn test_typed_placeholder() {
        let segments = parse_pattern("product/<int:pk>/").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("product".to_string()),
                Segment::Param(ParamMeta {
                    name: "pk".to_string(),
                    kind: ParamKind::Int,
                }),
                Segment::Literal(String::new()),
            ]
        );
        assert_eq!(segments_to_regex(&segments), "^/product/([0-9]+)/$");
    }

    #[test]
    fn test_bare_placeholder_defaults_to_str() {
        let segments = parse_pattern("tag/<slug>/").unwrap();
        match &segments[1] {
            Segment::Param(meta) => {
                assert_eq!(meta.name, "slug");
                assert_eq!(meta.kind, ParamKind::Str);
            }
            other => panic!("expected param segment, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_slash_is_significant() {
        let with = parse_pattern("product/create/").unwrap();
        let without = parse_pattern("product/create").unwrap();
        assert_eq!(segments_to_regex(&with), "^/product/create/$");
        assert_eq!(segments_to_regex(&without), "^/product/create$");
    }

    #[test]
    fn test_leading_slash_rejected() {
        assert!(matches!(
            parse_pattern("/product/"),
            Err(PatternError::LeadingSlash { .. })
        ));
    }

    #[test]
    fn test_empty_mid_segment_rejected() {
        assert!(matches!(
            parse_pattern("product//create/"),
            Err(PatternError::EmptySegment { .. })
        ));
    }

    #[test]
    fn test_unterminated_placeholder_rejected() {
        assert!(matches!(
            parse_pattern("product/<int:pk/"),
            Err(PatternError::Unterminated { .. })
        ));
    }

    #[test]
    fn test_unknown_converter_rejected() {
        let err = parse_pattern("product/<uuid:pk>/").unwrap_err();
        assert!(matches!(err, PatternError::UnknownConverter { ref kind, .. } if kind == "uuid"));
    }

    #[test]
    fn test_duplicate_param_rejected() {
        assert!(matches!(
            parse_pattern("a/<int:pk>/b/<int:pk>/"),
            Err(PatternError::DuplicateParam { .. })
        ));
    }

    #[test]
    fn test_invalid_param_name_rejected() {
        assert!(matches!(
            parse_pattern("a/<int:2pk>/"),
            Err(PatternError::InvalidName { .. })
        ));
        assert!(matches!(
            parse_pattern("a/<int:>/"),
            Err(PatternError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_literal_with_bracket_rejected() {
        assert!(matches!(
            parse_pattern("a/b<c/"),
            Err(PatternError::StrayBracket { .. })
        ));
    }

    #[test]
    fn test_literal_regex_metacharacters_escaped() {
        let segments = parse_pattern("api/v1.0/").unwrap();
        assert_eq!(segments_to_regex(&segments), "^/api/v1\\.0/$");
    }
}
