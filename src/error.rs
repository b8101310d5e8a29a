//! Spec errors.
//!
//! Only structural problems in a spec are errors: a missing `path`, an
//! unrecognized key, malformed path syntax, an unknown comparator. Absent
//! data is never an error: missing keys and empty wildcard matches resolve
//! to nothing and surface as null or omission in the result.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("spec is missing required key `path`")]
    MissingPath,

    #[error("unrecognized spec key `{0}`")]
    UnknownKey(String),

    #[error("malformed path `{path}`: {reason}")]
    Path { path: String, reason: String },

    #[error("unrecognized comparison operator `{0}`")]
    UnknownOperator(String),

    #[error("invalid spec: {0}")]
    Invalid(String),
}

impl SpecError {
    pub(crate) fn path(path: &str, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
