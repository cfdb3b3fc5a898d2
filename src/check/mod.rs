//! Check definitions and evaluation.
//!
//! # Data Flow
//! ```text
//! config (validated)
//!     → CheckSpec (target + constraints)
//!     → probe executor → ProbeOutcome
//!     → evaluator.rs (ordered predicates)
//!     → CheckResult (report row)
//! ```
//!
//! # Design Decisions
//! - A spec is always exactly one of HTTP or TCP; ambiguity is rejected by
//!   config validation before a spec is constructed
//! - Every constraint is optional; an absent constraint is never evaluated
//! - Only the first violated condition is recorded

pub mod evaluator;

use std::time::Duration;
use thiserror::Error;

use crate::probe::TransportError;

pub use evaluator::evaluate;

/// What a check probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// HTTP GET against a URL.
    Http { url: String },
    /// Raw TCP connect.
    Tcp { host: String, port: u16 },
}

/// Expectations applied to a probe outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Exact status code the response must carry (HTTP only).
    pub expected_status: Option<u16>,
    /// Text the response body must contain (HTTP only).
    pub expected_substring: Option<String>,
    /// Upper bound on elapsed time, inclusive.
    pub max_response_time: Option<Duration>,
}

/// A single validated check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSpec {
    pub target: Target,
    pub constraints: Constraints,
}

impl CheckSpec {
    /// HTTP check with no constraints.
    pub fn http(url: impl Into<String>) -> Self {
        Self {
            target: Target::Http { url: url.into() },
            constraints: Constraints::default(),
        }
    }

    /// TCP check with no constraints.
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Self {
            target: Target::Tcp {
                host: host.into(),
                port,
            },
            constraints: Constraints::default(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.constraints.expected_status = Some(status);
        self
    }

    pub fn with_substring(mut self, text: impl Into<String>) -> Self {
        self.constraints.expected_substring = Some(text.into());
        self
    }

    pub fn with_max_response_time(mut self, limit: Duration) -> Self {
        self.constraints.max_response_time = Some(limit);
        self
    }

    /// Identifier used in reports and alerts: the URL, or `host:port`.
    pub fn resource(&self) -> String {
        match &self.target {
            Target::Http { url } => url.clone(),
            Target::Tcp { host, port } => format!("{}:{}", host, port),
        }
    }
}

/// Reason a check failed. Only one is ever recorded per check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The probe itself did not complete.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("status mismatch: expected {expected} got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },

    #[error("content mismatch: response body does not contain {expected:?}")]
    ContentMismatch { expected: String },

    #[error("response time exceeded: elapsed {elapsed:?} instead of at most {limit:?}")]
    LatencyExceeded { elapsed: Duration, limit: Duration },
}
