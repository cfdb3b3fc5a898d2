//! Configuration schema definitions.
//!
//! This module defines the on-disk structure of a monitor file. All types
//! derive Serde traits for deserialization from TOML or YAML. Legacy key
//! names (`slack_url`, `timeout_seconds`, `response_time`) are accepted as
//! aliases.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::notify::DEFAULT_ALERT_TITLE;
use crate::probe::ProbeSettings;

/// Root configuration of a monitor run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Incoming-webhook URL receiving the alert.
    #[serde(alias = "slack_url")]
    pub webhook_url: String,

    /// Skip TLS certificate verification for HTTP checks.
    pub insecure: bool,

    /// Overall timeout per probe in seconds.
    #[serde(alias = "timeout_seconds")]
    pub timeout_secs: u64,

    /// Log request URLs and response bodies.
    pub verbose: bool,

    /// Header text of the alert.
    pub alert_title: String,

    /// Checks, run in declaration order.
    pub checks: Vec<CheckConfig>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            insecure: false,
            timeout_secs: 10,
            verbose: false,
            alert_title: DEFAULT_ALERT_TITLE.to_string(),
            checks: Vec::new(),
        }
    }
}

impl MonitorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            timeout: self.timeout(),
            insecure: self.insecure,
            verbose: self.verbose,
        }
    }
}

/// A check as written in the file. Mode is inferred from which fields are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckConfig {
    /// HTTP mode: URL to GET.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// TCP mode: host to connect to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp: Option<String>,

    /// TCP mode: port to connect to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,

    /// Expected HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u32>,

    /// Text the response body must contain.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_text: Option<String>,

    /// Maximum response time in milliseconds.
    #[serde(alias = "response_time", skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

impl CheckConfig {
    /// Trimmed URL, ignoring an empty string.
    pub fn http_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Trimmed TCP host, ignoring an empty string.
    pub fn tcp_host(&self) -> Option<&str> {
        self.tcp.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
