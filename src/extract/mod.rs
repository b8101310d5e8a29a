//! Extraction: turn (spec, document) into a result value.
//!
//! The pipeline per spec:
//! 1) normalize the raw spec (once)
//! 2) resolve the path into candidates
//! 3) drop candidates that fail the `where` clause
//! 4) reshape survivors through the `select` clause
//! 5) assemble per the collect mode
//!
//! Pure over immutable inputs: the document is never mutated and no I/O
//! happens here.

pub mod filter;
pub mod project;
pub mod resolve;

use crate::error::SpecError;
use crate::spec::{CollectMode, FieldSpec};
use resolve::Resolved;
use serde_json::Value;

/// Evaluate a raw spec value (path string or structured object) against a
/// document.
pub fn process(spec: &Value, document: &Value) -> Result<Value, SpecError> {
    let field = FieldSpec::parse(spec)?;
    extract(&field, document)
}

/// Evaluate a canonical spec against a document.
///
/// A wildcard-free path yields the single resolved value, `Null` when
/// missing or filtered out. A path containing a wildcard yields an array of
/// the surviving, projected matches, flattened or nested per the spec's
/// collect mode.
pub fn extract(spec: &FieldSpec, document: &Value) -> Result<Value, SpecError> {
    extract_value(spec, Some(document))
}

/// Inner entry point, shared with the projector so nested specs can run
/// against missing candidates.
pub(crate) fn extract_value(spec: &FieldSpec, document: Option<&Value>) -> Result<Value, SpecError> {
    match resolve::resolve(document, &spec.path)? {
        Resolved::Leaf(candidate) => Ok(finish(spec, candidate)?.unwrap_or(Value::Null)),
        Resolved::Fork(branches) => match spec.collect {
            CollectMode::Flat => {
                let mut out = Vec::new();
                flatten_into(&branches, spec, &mut out)?;
                Ok(Value::Array(out))
            }
            CollectMode::Nested => nest(&branches, spec),
        },
    }
}

/// Filter and project one candidate. `None` means dropped by the filter.
fn finish(spec: &FieldSpec, candidate: Option<&Value>) -> Result<Option<Value>, SpecError> {
    if let Some(condition) = &spec.filter {
        if !filter::matches(candidate, condition)? {
            return Ok(None);
        }
    }

    let value = match &spec.select {
        Some(projection) => project::project(candidate, projection)?,
        None => candidate.cloned().unwrap_or(Value::Null),
    };
    Ok(Some(value))
}

/// Splice every fork point into one flat sequence, in document order.
fn flatten_into(
    branches: &[Resolved<'_>],
    spec: &FieldSpec,
    out: &mut Vec<Value>,
) -> Result<(), SpecError> {
    for branch in branches {
        match branch {
            Resolved::Leaf(candidate) => {
                if let Some(value) = finish(spec, *candidate)? {
                    out.push(value);
                }
            }
            Resolved::Fork(inner) => flatten_into(inner, spec, out)?,
        }
    }
    Ok(())
}

/// Keep one array level per wildcard.
fn nest(branches: &[Resolved<'_>], spec: &FieldSpec) -> Result<Value, SpecError> {
    let mut out = Vec::new();
    for branch in branches {
        match branch {
            Resolved::Leaf(candidate) => {
                if let Some(value) = finish(spec, *candidate)? {
                    out.push(value);
                }
            }
            Resolved::Fork(inner) => out.push(nest(inner, spec)?),
        }
    }
    Ok(Value::Array(out))
}
