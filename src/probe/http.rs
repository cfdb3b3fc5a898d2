//! HTTP probing.

use std::time::Instant;

use super::{error_chain, ProbeOutcome, ProbeSettings, TransportError};

const USER_AGENT: &str = concat!("health-runner/", env!("CARGO_PKG_VERSION"));

/// Build the client shared by all HTTP probes of a run.
pub fn build_client(settings: &ProbeSettings) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(settings.timeout)
        .danger_accept_invalid_certs(settings.insecure)
        .user_agent(USER_AGENT)
        .no_proxy()
        .build()
}

/// GET `url` and read the full body.
pub async fn probe(client: &reqwest::Client, url: &str, settings: &ProbeSettings) -> ProbeOutcome {
    let start = Instant::now();
    let response = client.get(url).send().await;
    let elapsed = start.elapsed();

    let response = match response {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "HTTP probe failed");
            let error = if e.is_timeout() {
                TransportError::Timeout(settings.timeout)
            } else {
                TransportError::Request(error_chain(&e))
            };
            return ProbeOutcome::unreachable(elapsed, error);
        }
    };

    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "HTTP probe body read failed");
            return ProbeOutcome::unreachable(elapsed, TransportError::Body(error_chain(&e)));
        }
    };

    if settings.verbose {
        tracing::debug!(url = %url, status, body = %body, "Probe response");
    }

    ProbeOutcome::http(elapsed, status, body)
}
