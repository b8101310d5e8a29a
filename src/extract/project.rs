//! `select` clause evaluation.
//!
//! Every projection entry is a nested spec evaluated with the candidate as
//! its document, so plain relative paths yield the single value (missing =>
//! null) and wildcard or structured entries compose the full extraction
//! recursively. Output keys keep their declared order.

use crate::error::SpecError;
use crate::extract;
use crate::spec::Projection;
use serde_json::{Map, Value};

/// Project `item` through `projection`, producing a reshaped object.
pub fn project(item: Option<&Value>, projection: &Projection) -> Result<Value, SpecError> {
    let mut out = Map::new();
    for (key, spec) in &projection.fields {
        out.insert(key.clone(), extract::extract_value(spec, item)?);
    }
    Ok(Value::Object(out))
}
