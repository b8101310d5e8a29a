//! `where` clause evaluation.
//!
//! A condition is a conjunction: every entry must hold for the candidate to
//! pass, and the empty condition passes everything. Each entry resolves a
//! field on the candidate and compares it with one of `=`, `!=`, `<`, `<=`,
//! `>`, `>=`. A missing field is not equal to anything and unordered
//! against everything, so only `!=` can pass on it.

use crate::error::SpecError;
use crate::extract::resolve;
use crate::spec::{Condition, Test};
use serde_json::Value;
use std::cmp::Ordering;

/// Does `item` satisfy every entry of `condition`?
pub fn matches(item: Option<&Value>, condition: &Condition) -> Result<bool, SpecError> {
    for (field, test) in &condition.tests {
        let actual = resolve::lookup(item, field)?;
        let holds = match test {
            Test::Equals(expected) => values_equal(actual, expected),
            Test::Compare { op, value } => apply_operator(op, actual, value)?,
        };
        if !holds {
            return Ok(false);
        }
    }
    Ok(true)
}

fn apply_operator(op: &str, actual: Option<&Value>, expected: &Value) -> Result<bool, SpecError> {
    match op {
        "=" => Ok(values_equal(actual, expected)),
        "!=" => Ok(!values_equal(actual, expected)),
        "<" => Ok(ordering(actual, expected) == Some(Ordering::Less)),
        "<=" => Ok(matches!(
            ordering(actual, expected),
            Some(Ordering::Less | Ordering::Equal)
        )),
        ">" => Ok(ordering(actual, expected) == Some(Ordering::Greater)),
        ">=" => Ok(matches!(
            ordering(actual, expected),
            Some(Ordering::Greater | Ordering::Equal)
        )),
        other => Err(SpecError::UnknownOperator(other.to_string())),
    }
}

fn values_equal(actual: Option<&Value>, expected: &Value) -> bool {
    match actual {
        None => false,
        Some(actual) => match compare_values(actual, expected) {
            Some(ord) => ord == Ordering::Equal,
            // Not scalar-comparable: fall back to deep equality so object
            // and array literals still work.
            None => actual == expected,
        },
    }
}

fn ordering(actual: Option<&Value>, expected: &Value) -> Option<Ordering> {
    compare_values(actual?, expected)
}

/// Compare two JSON values, returning an ordering if the types are comparable.
///
/// - Numbers: compared as f64
/// - Strings: compared lexicographically
/// - Booleans: false < true
/// - Null == Null
/// - Mismatched or non-scalar types: `None`
fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
