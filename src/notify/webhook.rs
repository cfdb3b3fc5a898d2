//! Webhook transport.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use std::time::Duration;

use super::{AlertPayload, AlertSink, NotifyError};

/// Posts alerts to an incoming-webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// POST `payload` as JSON. Any transport error or non-2xx status fails.
    pub async fn send(&self, payload: &AlertPayload) -> Result<(), NotifyError> {
        let body = payload.to_json_pretty()?;

        let res = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(
            status = status.as_u16(),
            sections = payload.sections().count(),
            "Alert delivered"
        );
        Ok(())
    }
}

impl AlertSink for WebhookNotifier {
    async fn deliver(&self, payload: &AlertPayload) -> Result<(), NotifyError> {
        self.send(payload).await
    }
}
