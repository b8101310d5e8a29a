//! Spec layer: raw JSON spec shapes + canonical immutable structures.
//!
//! This module is intentionally separate from evaluation. It owns:
//! - path expressions (segments, wildcard markers)
//! - field specs (path / where / select / collect)
//! - the top-level extraction spec (request + named entries)

pub mod field;
pub mod path;
pub mod sheet;

pub use field::{CollectMode, Condition, FieldSpec, Projection, Test};
pub use path::{Segment, parse_path};
pub use sheet::{ExtractSpec, RequestSpec};
