//! Outcome evaluation.
//!
//! Conditions are applied in a fixed order and evaluation stops at the first
//! failure:
//!
//! ```text
//! 1. reachability   (probe completed)
//! 2. status code    (HTTP, if expected_status is set)
//! 3. content match  (HTTP, if expected_substring is set)
//! 4. response time  (HTTP and TCP, if max_response_time is set)
//! ```

use crate::check::{CheckError, CheckSpec};
use crate::probe::{ProbeOutcome, Response};
use crate::report::CheckResult;

/// Classify a probe outcome against the expectations of `spec`.
pub fn evaluate(spec: &CheckSpec, outcome: &ProbeOutcome) -> CheckResult {
    let resource = spec.resource();
    match classify(spec, outcome) {
        Ok(()) => CheckResult::passed(resource, outcome.elapsed),
        Err(error) => CheckResult::failed(resource, outcome.elapsed, &error),
    }
}

/// First violated condition, if any.
pub fn classify(spec: &CheckSpec, outcome: &ProbeOutcome) -> Result<(), CheckError> {
    let response = outcome.result.as_ref().map_err(|e| e.clone())?;
    let constraints = &spec.constraints;

    if let Response::Http { status, body } = response {
        if let Some(expected) = constraints.expected_status {
            if expected != *status {
                return Err(CheckError::StatusMismatch {
                    expected,
                    actual: *status,
                });
            }
        }

        if let Some(expected) = &constraints.expected_substring {
            if !body.contains(expected.as_str()) {
                return Err(CheckError::ContentMismatch {
                    expected: expected.clone(),
                });
            }
        }
    }

    if let Some(limit) = constraints.max_response_time {
        if outcome.elapsed > limit {
            return Err(CheckError::LatencyExceeded {
                elapsed: outcome.elapsed,
                limit,
            });
        }
    }

    Ok(())
}
