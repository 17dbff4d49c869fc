use std::time::{Duration, Instant};

use reqwest::Client;

use crate::error::NrmError;

const FAST_BELOW: Duration = Duration::from_millis(500);
const MEDIUM_BELOW: Duration = Duration::from_millis(1000);

/// Round-trip time to a registry, bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Fast(Duration),
    Medium(Duration),
    Slow(Duration),
    /// The request failed or hit the probe ceiling.
    Timeout,
}

impl Latency {
    pub fn classify(elapsed: Duration) -> Self {
        if elapsed < FAST_BELOW {
            Self::Fast(elapsed)
        } else if elapsed < MEDIUM_BELOW {
            Self::Medium(elapsed)
        } else {
            Self::Slow(elapsed)
        }
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            Self::Fast(d) | Self::Medium(d) | Self::Slow(d) => Some(*d),
            Self::Timeout => None,
        }
    }
}

impl std::fmt::Display for Latency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.elapsed() {
            Some(d) => write!(f, "{} ms", d.as_millis()),
            None => write!(f, "Timeout"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub name: String,
    pub latency: Latency,
}

/// Issues timed requests against registry URLs.
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new(timeout: Duration) -> Result<Self, NrmError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Time a single request. Any response counts; any error is a timeout.
    pub async fn probe(&self, url: &str) -> Latency {
        probe_with(&self.client, url).await
    }

    /// Probe every `(name, url)` concurrently. Results come back in input order.
    pub async fn probe_all<I>(&self, targets: I) -> Vec<ProbeResult>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let handles: Vec<_> = targets
            .into_iter()
            .map(|(name, url)| {
                let client = self.client.clone();
                let handle = tokio::spawn(async move { probe_with(&client, &url).await });
                (name, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let latency = match handle.await {
                Ok(latency) => latency,
                Err(err) => {
                    tracing::debug!(name = %name, error = %err, "probe task failed");
                    Latency::Timeout
                }
            };
            results.push(ProbeResult { name, latency });
        }
        results
    }
}

async fn probe_with(client: &Client, url: &str) -> Latency {
    let start = Instant::now();
    match client.get(url).send().await {
        Ok(response) => {
            let elapsed = start.elapsed();
            tracing::debug!(url, status = %response.status(), ?elapsed, "probe answered");
            Latency::classify(elapsed)
        }
        Err(err) => {
            tracing::debug!(url, error = %err, "probe failed");
            Latency::Timeout
        }
    }
}
