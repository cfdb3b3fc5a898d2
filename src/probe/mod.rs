//! Probe execution.
//!
//! # Responsibilities
//! - Perform exactly one network operation per check (HTTP GET or TCP connect)
//! - Measure wall-clock time around the operation
//! - Report transport failures as data, never as a panic or early return
//!
//! # Design Decisions
//! - One `reqwest::Client` per executor, built from explicit `ProbeSettings`
//! - The same overall timeout bounds HTTP requests and TCP connects
//! - Elapsed time for HTTP excludes reading the body

pub mod http;
pub mod tcp;

use std::time::Duration;
use thiserror::Error;

use crate::check::{CheckSpec, Target};

/// Settings shared by every probe in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Overall deadline for a single probe.
    pub timeout: Duration,
    /// Skip TLS certificate verification.
    pub insecure: bool,
    /// Log URLs and response bodies.
    pub verbose: bool,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            insecure: false,
            verbose: false,
        }
    }
}

/// A probe that could not complete at the network level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request failed (DNS, connect, TLS, protocol).
    #[error("{0}")]
    Request(String),

    /// Response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// TCP connect or name resolution failed.
    #[error("{0}")]
    Connect(String),

    /// No answer before the deadline.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Error raised while preparing the executor.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// What the network operation returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Http { status: u16, body: String },
    Connected,
}

/// Result of one probe. Consumed by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub elapsed: Duration,
    pub result: Result<Response, TransportError>,
}

impl ProbeOutcome {
    pub fn http(elapsed: Duration, status: u16, body: impl Into<String>) -> Self {
        Self {
            elapsed,
            result: Ok(Response::Http {
                status,
                body: body.into(),
            }),
        }
    }

    pub fn connected(elapsed: Duration) -> Self {
        Self {
            elapsed,
            result: Ok(Response::Connected),
        }
    }

    pub fn unreachable(elapsed: Duration, error: TransportError) -> Self {
        Self {
            elapsed,
            result: Err(error),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs probes with a fixed set of settings.
pub struct ProbeExecutor {
    client: reqwest::Client,
    settings: ProbeSettings,
}

impl ProbeExecutor {
    pub fn new(settings: ProbeSettings) -> Result<Self, ProbeError> {
        let client = http::build_client(&settings)?;
        Ok(Self { client, settings })
    }

    /// Probe the target of `spec`. Never fails; failures are in the outcome.
    pub async fn execute(&self, spec: &CheckSpec) -> ProbeOutcome {
        match &spec.target {
            Target::Http { url } => http::probe(&self.client, url, &self.settings).await,
            Target::Tcp { host, port } => tcp::probe(host, *port, self.settings.timeout).await,
        }
    }
}

/// Render an error together with its source chain.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
