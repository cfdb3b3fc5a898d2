//! TCP connect probing.
//!
//! The connection is dropped as soon as it is established; nothing is sent
//! or read.

use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::time;

use super::{ProbeOutcome, TransportError};

/// Resolve `host:port` and attempt a connection within `timeout`.
pub async fn probe(host: &str, port: u16, timeout: Duration) -> ProbeOutcome {
    let start = Instant::now();
    let result = time::timeout(timeout, TcpStream::connect((host, port))).await;
    let elapsed = start.elapsed();

    match result {
        Ok(Ok(_stream)) => ProbeOutcome::connected(elapsed),
        Ok(Err(e)) => {
            tracing::debug!(host, port, error = %e, "TCP probe failed");
            ProbeOutcome::unreachable(elapsed, TransportError::Connect(e.to_string()))
        }
        Err(_) => {
            tracing::debug!(host, port, ?timeout, "TCP probe timed out");
            ProbeOutcome::unreachable(elapsed, TransportError::Timeout(timeout))
        }
    }
}
