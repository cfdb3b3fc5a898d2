//! Run report.
//!
//! # Wire Format
//! ```text
//! { "checks": [ { "resource": "...", "available": "true"|"false",
//!                 "elapsed": "12.3ms", "error": "..." } ] }
//! ```
//!
//! `available` keeps its historical inverted meaning: `"true"` marks a
//! FAILED check. The inversion exists only in serialization; in Rust the
//! flag is `passed`.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::time::Duration;

use crate::check::CheckError;

/// One row of the report. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    resource: String,
    passed: bool,
    elapsed: Duration,
    error: String,
}

impl CheckResult {
    pub fn passed(resource: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            resource: resource.into(),
            passed: true,
            elapsed,
            error: String::new(),
        }
    }

    pub fn failed(resource: impl Into<String>, elapsed: Duration, error: &CheckError) -> Self {
        Self {
            resource: resource.into(),
            passed: false,
            elapsed,
            error: error.to_string(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time as text, e.g. `12.345ms`.
    pub fn elapsed_text(&self) -> String {
        format!("{:?}", self.elapsed)
    }

    /// Failure description; empty when the check passed.
    pub fn error(&self) -> &str {
        &self.error
    }
}

impl Serialize for CheckResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_struct("CheckResult", 4)?;
        row.serialize_field("resource", &self.resource)?;
        row.serialize_field("available", if self.passed { "false" } else { "true" })?;
        row.serialize_field("elapsed", &self.elapsed_text())?;
        row.serialize_field("error", &self.error)?;
        row.end()
    }
}

/// Ordered results of a run, in check declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    checks: Vec<CheckResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result. Nothing is reordered, merged or dropped.
    pub fn append(mut self, result: CheckResult) -> Self {
        self.checks.push(result);
        self
    }

    pub fn entries(&self) -> &[CheckResult] {
        &self.checks
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|r| !r.passed)
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
