//! Path resolution against a document.
//!
//! Resolution walks segments left to right over an `Option<&Value>`: `None`
//! is the missing sentinel, distinct from JSON null. Field segments look up
//! object keys and keep walking; absent keys and wrong shapes produce
//! missing, never an error. A wildcard segment forks the walk once per
//! element of the array at that position; anything that is not an array
//! contributes an empty fork.
//!
//! Only malformed path syntax is a hard failure, raised here rather than at
//! spec-parse time.

use crate::error::SpecError;
use crate::spec::{Segment, parse_path};
use serde_json::Value;

/// Result of resolving a path: a single candidate, or one fork per
/// wildcard element, nested in path order.
///
/// A path without wildcards always resolves to `Leaf`; a path containing a
/// wildcard always resolves to `Fork` (possibly empty).
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    Leaf(Option<&'a Value>),
    Fork(Vec<Resolved<'a>>),
}

/// Resolve `path` against `document`.
pub fn resolve<'a>(document: Option<&'a Value>, path: &str) -> Result<Resolved<'a>, SpecError> {
    let segments = parse_path(path)?;
    Ok(walk(document, &segments))
}

fn walk<'a>(value: Option<&'a Value>, segments: &[Segment]) -> Resolved<'a> {
    match segments.split_first() {
        None => Resolved::Leaf(value),
        Some((Segment::Field(name), rest)) => {
            walk(value.and_then(|v| v.get(name.as_str())), rest)
        }
        Some((Segment::Wildcard, rest)) => {
            let forks = match value {
                Some(Value::Array(items)) => {
                    items.iter().map(|item| walk(Some(item), rest)).collect()
                }
                _ => Vec::new(),
            };
            Resolved::Fork(forks)
        }
    }
}

/// Resolve a wildcard-free path to its single value.
///
/// Used for `where` clause fields, where each test needs exactly one value
/// to compare against.
pub fn lookup<'a>(item: Option<&'a Value>, path: &str) -> Result<Option<&'a Value>, SpecError> {
    let mut current = item;
    for segment in &parse_path(path)? {
        match segment {
            Segment::Field(name) => current = current.and_then(|v| v.get(name.as_str())),
            Segment::Wildcard => {
                return Err(SpecError::path(path, "wildcard segment not allowed here"));
            }
        }
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn plain_path_equals_direct_nested_lookup() {
        let doc = json!({"data": {"user": {"id": 7}}});
        let resolved = resolve(Some(&doc), "$.data.user.id").unwrap();
        assert_eq!(resolved, Resolved::Leaf(Some(&json!(7))));
    }

    #[test]
    fn missing_intermediate_resolves_to_missing_not_error() {
        let doc = json!({"user": {"id": 7}});
        assert_eq!(
            resolve(Some(&doc), "$.user.missingField").unwrap(),
            Resolved::Leaf(None)
        );
        assert_eq!(
            resolve(Some(&doc), "$.nothing.at.all").unwrap(),
            Resolved::Leaf(None)
        );
    }

    #[test]
    fn field_lookup_on_non_object_is_missing() {
        let doc = json!({"user": "ada"});
        assert_eq!(resolve(Some(&doc), "$.user.id").unwrap(), Resolved::Leaf(None));
    }

    #[test]
    fn null_is_distinct_from_missing() {
        let doc = json!({"user": null});
        assert_eq!(
            resolve(Some(&doc), "$.user").unwrap(),
            Resolved::Leaf(Some(&Value::Null))
        );
    }

    #[test]
    fn empty_path_resolves_to_the_document() {
        let doc = json!({"a": 1});
        assert_eq!(resolve(Some(&doc), "$").unwrap(), Resolved::Leaf(Some(&doc)));
    }

    #[test]
    fn wildcard_forks_once_per_element_in_order() {
        let doc = json!({"items": [{"n": 1}, {"n": 2}, {"n": 3}]});
        let resolved = resolve(Some(&doc), "$.items[*].n").unwrap();
        assert_eq!(
            resolved,
            Resolved::Fork(vec![
                Resolved::Leaf(Some(&json!(1))),
                Resolved::Leaf(Some(&json!(2))),
                Resolved::Leaf(Some(&json!(3))),
            ])
        );
    }

    #[test]
    fn wildcard_over_empty_array_is_an_empty_fork() {
        let doc = json!({"items": []});
        assert_eq!(
            resolve(Some(&doc), "$.items[*].n").unwrap(),
            Resolved::Fork(vec![])
        );
    }

    #[test]
    fn wildcard_over_non_array_is_an_empty_fork() {
        let doc = json!({"items": {"n": 1}});
        assert_eq!(
            resolve(Some(&doc), "$.items[*].n").unwrap(),
            Resolved::Fork(vec![])
        );
        assert_eq!(
            resolve(Some(&doc), "$.absent[*]").unwrap(),
            Resolved::Fork(vec![])
        );
    }

    #[test]
    fn nested_wildcards_nest_forks_outer_first() {
        let doc = json!({"rows": [{"cells": [1, 2]}, {"cells": [3]}]});
        let resolved = resolve(Some(&doc), "$.rows[*].cells[*]").unwrap();
        assert_eq!(
            resolved,
            Resolved::Fork(vec![
                Resolved::Fork(vec![
                    Resolved::Leaf(Some(&json!(1))),
                    Resolved::Leaf(Some(&json!(2))),
                ]),
                Resolved::Fork(vec![Resolved::Leaf(Some(&json!(3)))]),
            ])
        );
    }

    #[test]
    fn missing_tail_after_wildcard_stays_per_branch() {
        let doc = json!({"items": [{"name": "a"}, {"other": 1}]});
        let resolved = resolve(Some(&doc), "$.items[*].name").unwrap();
        assert_eq!(
            resolved,
            Resolved::Fork(vec![
                Resolved::Leaf(Some(&json!("a"))),
                Resolved::Leaf(None),
            ])
        );
    }

    #[test]
    fn lookup_walks_nested_fields() {
        let doc = json!({"pricing": {"amount": 100}});
        assert_eq!(
            lookup(Some(&doc), "pricing.amount").unwrap(),
            Some(&json!(100))
        );
        assert_eq!(lookup(Some(&doc), "pricing.currency").unwrap(), None);
        assert_eq!(lookup(None, "pricing.amount").unwrap(), None);
    }

    #[test]
    fn lookup_rejects_wildcards() {
        let doc = json!({"items": [1]});
        assert!(lookup(Some(&doc), "items[*]").is_err());
    }

    #[test]
    fn malformed_path_fails_at_resolution() {
        let doc = json!({});
        assert!(matches!(
            resolve(Some(&doc), "items[*").unwrap_err(),
            SpecError::Path { .. }
        ));
    }
}
