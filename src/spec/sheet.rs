//! Top-level extraction spec (spec.json).
//!
//! JSON shape:
//! {
//!   "request": { "path": "/api/products" },   // optional, used by fetch
//!   "extract": {
//!     "id": "$.data.id",
//!     "names": { "path": "$.data.items[*].name" }
//!   }
//! }
//!
//! Each `extract` entry is a field spec (string shorthand or structured);
//! entries are evaluated in declared order and the results keep that order.
//! Unknown top-level keys are rejected at deserialization.

use crate::error::SpecError;
use crate::extract;
use crate::spec::FieldSpec;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractSpec {
    #[serde(default)]
    pub request: Option<RequestSpec>,

    pub extract: Map<String, Value>,
}

/// Request half of a spec: the path appended to the base URL when fetching.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestSpec {
    pub path: String,
}

impl ExtractSpec {
    /// Evaluate every named extract entry against `document`.
    pub fn process(&self, document: &Value) -> Result<Value, SpecError> {
        let mut out = Map::new();
        for (name, raw) in &self.extract {
            let field = FieldSpec::parse(raw)?;
            out.insert(name.clone(), extract::extract(&field, document)?);
        }
        Ok(Value::Object(out))
    }
}
