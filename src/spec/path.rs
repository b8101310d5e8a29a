//! Path expressions.
//!
//! Example path: "$.data.items[*].name"  =>  [Field("data"), Field("items"), Wildcard, Field("name")]
//!
//! The leading `$.` root marker is optional. Segments are separated by `.`;
//! a segment is a field name, a field name followed by one or more `[*]`
//! wildcards, or a bare `[*]`. Path syntax is validated here, at resolution
//! time, not when the spec is parsed.

use crate::error::SpecError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object field lookup.
    Field(String),
    /// Iterate every element of the array at this position.
    Wildcard,
}

/// Parse a path expression into segments.
///
/// `""`, `"$"` and `"$."` all parse to an empty segment list, which resolves
/// to the document itself.
pub fn parse_path(path: &str) -> Result<Vec<Segment>, SpecError> {
    let stripped = match path.strip_prefix("$.") {
        Some(rest) => rest,
        None if path == "$" => "",
        None => path,
    };

    if stripped.is_empty() {
        return Ok(Vec::new());
    }

    let mut segments = Vec::new();
    for part in stripped.split('.') {
        if part.is_empty() {
            return Err(SpecError::path(path, "empty segment"));
        }
        push_part(path, part, &mut segments)?;
    }

    Ok(segments)
}

/// Parse one `.`-separated part: NAME, NAME[*]..., or [*]...
fn push_part(path: &str, part: &str, segments: &mut Vec<Segment>) -> Result<(), SpecError> {
    let (name, mut rest) = match part.find('[') {
        Some(i) => (&part[..i], &part[i..]),
        None => (part, ""),
    };

    if name.contains(']') {
        return Err(SpecError::path(path, format!("stray `]` in segment `{part}`")));
    }

    if !name.is_empty() {
        segments.push(Segment::Field(name.to_string()));
    } else if rest.is_empty() {
        return Err(SpecError::path(path, "empty segment"));
    }

    while !rest.is_empty() {
        rest = rest.strip_prefix("[*]").ok_or_else(|| {
            SpecError::path(path, format!("expected `[*]` in segment `{part}`"))
        })?;
        segments.push(Segment::Wildcard);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(name: &str) -> Segment {
        Segment::Field(name.to_string())
    }

    #[test]
    fn parses_plain_path() {
        assert_eq!(
            parse_path("$.data.id").unwrap(),
            vec![field("data"), field("id")]
        );
    }

    #[test]
    fn root_marker_is_optional() {
        assert_eq!(parse_path("data.id").unwrap(), parse_path("$.data.id").unwrap());
    }

    #[test]
    fn parses_wildcard_path() {
        assert_eq!(
            parse_path("$.items[*].name").unwrap(),
            vec![field("items"), Segment::Wildcard, field("name")]
        );
    }

    #[test]
    fn parses_bare_and_stacked_wildcards() {
        assert_eq!(parse_path("[*]").unwrap(), vec![Segment::Wildcard]);
        assert_eq!(
            parse_path("grid[*][*]").unwrap(),
            vec![field("grid"), Segment::Wildcard, Segment::Wildcard]
        );
    }

    #[test]
    fn empty_path_means_whole_document() {
        assert_eq!(parse_path("").unwrap(), vec![]);
        assert_eq!(parse_path("$").unwrap(), vec![]);
        assert_eq!(parse_path("$.").unwrap(), vec![]);
    }

    #[test]
    fn rejects_malformed_segments() {
        assert!(parse_path("a..b").is_err());
        assert!(parse_path("a.").is_err());
        assert!(parse_path("items[*").is_err());
        assert!(parse_path("items[0]").is_err());
        assert!(parse_path("items]").is_err());
    }

    #[test]
    fn malformed_path_reports_the_path() {
        let err = parse_path("items[*").unwrap_err();
        assert_eq!(
            err,
            SpecError::Path {
                path: "items[*".to_string(),
                reason: "expected `[*]` in segment `items[*`".to_string(),
            }
        );
    }
}
