//! Network-fetch entry point.
//!
//! The only blocking I/O in the crate: GET the spec's endpoint, parse the
//! body as JSON, and hand the document to the pure core. Transport
//! failures, non-success statuses, and non-JSON bodies propagate to the
//! caller as-is.

use crate::spec::ExtractSpec;
use anyhow::Context;
use serde_json::Value;

/// Fetch the document for `spec` from `base_url` and process it.
///
/// When the spec carries a `request`, its `path` is appended to `base_url`;
/// otherwise `base_url` is fetched directly.
pub fn fetch_and_process(spec: &ExtractSpec, base_url: &str) -> anyhow::Result<Value> {
    let url = request_url(spec, base_url);

    let document: Value = ureq::get(&url)
        .call()
        .with_context(|| format!("GET {url}"))?
        .into_json()
        .with_context(|| format!("parse JSON body from {url}"))?;

    Ok(spec.process(&document)?)
}

fn request_url(spec: &ExtractSpec, base_url: &str) -> String {
    match &spec.request {
        Some(request) => format!("{}{}", base_url, request.path),
        None => base_url.to_string(),
    }
}
