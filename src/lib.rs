//! siphon - minimal DSL for API data extraction.
//!
//! A spec describes what to pull out of a JSON document: a path expression
//! (`"$.data.items[*].name"`), optionally combined with a `where` filter, a
//! `select` projection, and a `collect` mode. The core is pure and
//! synchronous; fetching lives in [`fetch`] and stays out of evaluation.
//!
//! ```
//! use serde_json::json;
//!
//! let document = json!({"items": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]});
//!
//! let names = siphon::process(&json!("$.items[*].name"), &document).unwrap();
//! assert_eq!(names, json!(["a", "b"]));
//!
//! let spec = json!({"path": "$.items[*]", "where": {"id": 2}, "select": {"n": "name"}});
//! assert_eq!(siphon::process(&spec, &document).unwrap(), json!([{"n": "b"}]));
//! ```

pub mod error;
pub mod extract;
pub mod fetch;
pub mod spec;

pub use error::SpecError;
pub use extract::{extract, process};
pub use fetch::fetch_and_process;
pub use spec::{CollectMode, ExtractSpec, FieldSpec};
