//! Run orchestration.
//!
//! # Data Flow
//! ```text
//! for each CheckSpec, in order:
//!     → ProbeExecutor::execute   (one network operation)
//!     → check::evaluate          (ordered predicates)
//!     → console notice on failure
//!     → Report::append
//! after the last check:
//!     → AlertPayload::from_report
//!     → AlertSink::deliver       (exactly once; failure aborts the run)
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: a slow check delays the ones after it
//! - Per-check failures become report rows; only delivery errors are fatal
//! - No retries, no cancellation once a run has started

use thiserror::Error;

use crate::check::{self, CheckSpec};
use crate::config::ConfigError;
use crate::notify::{AlertPayload, AlertSink, NotifyError};
use crate::observability::console;
use crate::probe::{ProbeError, ProbeExecutor};
use crate::report::{CheckResult, Report};

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error("alert delivery failed: {0}")]
    Notify(#[from] NotifyError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Sequential check pipeline ending in a single alert.
pub struct Runner<S> {
    executor: ProbeExecutor,
    sink: S,
    alert_title: String,
}

impl<S: AlertSink> Runner<S> {
    pub fn new(executor: ProbeExecutor, sink: S, alert_title: impl Into<String>) -> Self {
        Self {
            executor,
            sink,
            alert_title: alert_title.into(),
        }
    }

    /// Run every check in order, then deliver the alert.
    pub async fn run(&self, checks: &[CheckSpec]) -> Result<Report, RunError> {
        tracing::info!(checks = checks.len(), "Starting health checks");

        let mut report = Report::new();
        for spec in checks {
            report = report.append(self.check(spec).await);
        }

        tracing::info!(
            total = report.len(),
            failed = report.failure_count(),
            "Health checks completed"
        );

        let payload = AlertPayload::from_report(&report, &self.alert_title);
        self.sink.deliver(&payload).await?;

        Ok(report)
    }

    /// Probe and evaluate a single check.
    pub async fn check(&self, spec: &CheckSpec) -> CheckResult {
        let outcome = self.executor.execute(spec).await;
        let result = check::evaluate(spec, &outcome);

        if result.is_passed() {
            tracing::info!(
                resource = %result.resource(),
                elapsed = ?result.elapsed(),
                "Check passed"
            );
        } else {
            console::print_failure(&result);
            tracing::warn!(
                resource = %result.resource(),
                elapsed = ?result.elapsed(),
                error = %result.error(),
                "Check failed"
            );
        }

        result
    }
}
