//! Field specs: the canonical form of one extraction directive.
//!
//! Raw JSON shape, either a bare path string or a structured object:
//!
//! "$.data.items[*].name"
//!
//! {
//!   "path": "$.data.items[*]",        // required
//!   "where": {                        // optional, all entries must hold
//!     "status": "active",             //   literal => equality
//!     "price": {"op": ">", "value": 100}
//!   },
//!   "select": {                       // optional, ordered output keys
//!     "id": "id",                     //   string => nested path-shorthand spec
//!     "amount": {"path": "pricing.amount"}
//!   },
//!   "collect": "flat"                 // optional: "flat" (default) | "nested"
//! }
//!
//! We check the recognized key set and the shape of each clause eagerly;
//! path syntax and comparator operators are only validated when the spec is
//! evaluated.

use crate::error::SpecError;
use serde_json::Value;

/// How wildcard matches are combined into the final result.
///
/// A path containing a wildcard always yields an array; `collect` chooses
/// its shape. `Flat` splices every fork point into a single array in
/// document order. `Nested` keeps one array level per wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectMode {
    #[default]
    Flat,
    Nested,
}

/// One `where` entry: a literal equality or an explicit comparator.
///
/// The operator token stays raw here; the filter validates it.
#[derive(Debug, Clone, PartialEq)]
pub enum Test {
    Equals(Value),
    Compare { op: String, value: Value },
}

/// Conjunction of per-field tests, in declared order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Condition {
    pub tests: Vec<(String, Test)>,
}

/// Ordered projection: output key -> nested spec.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub fields: Vec<(String, FieldSpec)>,
}

/// Canonical extraction directive. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub path: String,
    pub filter: Option<Condition>,
    pub select: Option<Projection>,
    pub collect: CollectMode,
}

impl FieldSpec {
    /// Shorthand for a bare path spec.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filter: None,
            select: None,
            collect: CollectMode::default(),
        }
    }

    /// Normalize a raw spec value into its canonical form.
    ///
    /// Strings are path shorthand. Objects must use only the keys `path`,
    /// `where`, `select`, `collect`, and `path` is mandatory. Anything else
    /// fails with a [`SpecError`].
    pub fn parse(raw: &Value) -> Result<Self, SpecError> {
        let map = match raw {
            Value::String(path) => return Ok(Self::from_path(path.clone())),
            Value::Object(map) => map,
            other => {
                return Err(SpecError::invalid(format!(
                    "spec must be a path string or an object, got {other}"
                )));
            }
        };

        for key in map.keys() {
            if !matches!(key.as_str(), "path" | "where" | "select" | "collect") {
                return Err(SpecError::UnknownKey(key.clone()));
            }
        }

        let path = match map.get("path") {
            Some(Value::String(path)) => path.clone(),
            Some(other) => {
                return Err(SpecError::invalid(format!("`path` must be a string, got {other}")));
            }
            None => return Err(SpecError::MissingPath),
        };

        Ok(Self {
            path,
            filter: map.get("where").map(parse_condition).transpose()?,
            select: map.get("select").map(parse_projection).transpose()?,
            collect: map.get("collect").map(parse_collect).transpose()?.unwrap_or_default(),
        })
    }
}

fn parse_condition(raw: &Value) -> Result<Condition, SpecError> {
    let map = match raw {
        Value::Object(map) => map,
        other => {
            return Err(SpecError::invalid(format!("`where` must be an object, got {other}")));
        }
    };

    let mut tests = Vec::with_capacity(map.len());
    for (field, expected) in map {
        tests.push((field.clone(), parse_test(expected)));
    }
    Ok(Condition { tests })
}

/// An object with exactly the keys `op` (a string) and `value` is a
/// comparator; every other value is an equality literal.
fn parse_test(expected: &Value) -> Test {
    if let Value::Object(map) = expected {
        if map.len() == 2 {
            if let (Some(Value::String(op)), Some(value)) = (map.get("op"), map.get("value")) {
                return Test::Compare {
                    op: op.clone(),
                    value: value.clone(),
                };
            }
        }
    }
    Test::Equals(expected.clone())
}

fn parse_projection(raw: &Value) -> Result<Projection, SpecError> {
    let map = match raw {
        Value::Object(map) => map,
        other => {
            return Err(SpecError::invalid(format!("`select` must be an object, got {other}")));
        }
    };

    let mut fields = Vec::with_capacity(map.len());
    for (key, source) in map {
        fields.push((key.clone(), FieldSpec::parse(source)?));
    }
    Ok(Projection { fields })
}

fn parse_collect(raw: &Value) -> Result<CollectMode, SpecError> {
    match raw {
        Value::String(mode) if mode == "flat" => Ok(CollectMode::Flat),
        Value::String(mode) if mode == "nested" => Ok(CollectMode::Nested),
        other => Err(SpecError::invalid(format!(
            "`collect` must be \"flat\" or \"nested\", got {other}"
        ))),
    }
}
