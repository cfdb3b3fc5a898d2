//! Alert notification.
//!
//! # Data Flow
//! ```text
//! Report (end of run)
//!     → payload.rs (header block + one section per check)
//!     → AlertSink
//!         → webhook.rs (single JSON POST)
//!         → StdoutSink (dry run)
//! ```
//!
//! # Design Decisions
//! - Every report entry gets a section, passing checks included
//! - Exactly one delivery per run; a failed delivery is fatal and not retried

pub mod payload;
pub mod webhook;

use std::future::Future;
use thiserror::Error;

pub use payload::{AlertPayload, Block, BlockType, TextObject, TextType, DEFAULT_ALERT_TITLE};
pub use webhook::WebhookNotifier;

/// Errors delivering an alert.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to serialize alert payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("webhook returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Destination for the end-of-run alert.
pub trait AlertSink {
    fn deliver(
        &self,
        payload: &AlertPayload,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Prints the payload instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl AlertSink for StdoutSink {
    async fn deliver(&self, payload: &AlertPayload) -> Result<(), NotifyError> {
        let json = payload.to_json_pretty()?;
        println!("{}", json);
        Ok(())
    }
}
