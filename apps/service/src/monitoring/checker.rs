use anyhow::Result;
use std::time::{Duration, Instant};

use super::types::ProbeResult;

/// Prober trait for reachability checks
#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    /// Issue a single probe against `target` and report reachability and latency
    async fn probe(&self, target: &str) -> ProbeResult;
}

/// HTTP/HTTPS reachability prober
///
/// Reachability only reflects whether the request completed at the transport
/// level. The response status and body are never inspected, so a 500 counts
/// as reachable just like a 200.
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// `timeout_seconds = None` leaves the request bounded only by the
    /// platform's own connect/read behaviour.
    pub fn new(timeout_seconds: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("pingnotify/", env!("CARGO_PKG_VERSION")));

        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self::from_client(builder.build()?))
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Prober for HttpProber {
    async fn probe(&self, target: &str) -> ProbeResult {
        let start = Instant::now();

        let outcome = self.client.get(target).send().await;
        let latency = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(response) => {
                // Sub-millisecond answers still count as 1ms for an up site
                let latency = latency.max(1);
                tracing::debug!(url = target, latency, "Probe resolved");
                drop(response);
                ProbeResult::reachable(latency)
            }
            Err(e) => {
                tracing::debug!(url = target, latency, error = %e, "Probe failed");
                ProbeResult::unreachable(latency)
            }
        }
    }
}
