//! Activity API client wrapper.

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::UpstreamError;
use crate::metrics;

/// One opaque activity record as returned by the upstream API.
///
/// The upstream schema is not interpreted; keys and values pass through
/// unchanged, in the order the upstream sent them.
pub type Activity = Map<String, Value>;

/// Client for the activity suggestion endpoint.
#[derive(Debug, Clone)]
pub struct ActivityClient {
    /// HTTP client for upstream requests.
    http: reqwest::Client,
    /// URL of the activity suggestion endpoint.
    upstream_url: String,
}

impl ActivityClient {
    /// Create a new activity client from config with tuned HTTP settings.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(2_000))
            .tcp_nodelay(true)
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .pool_max_idle_per_host(config.http_pool_size)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            upstream_url: config.upstream_url.clone(),
        }
    }

    /// Get the upstream URL.
    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// Fetch a single activity record from the upstream.
    #[instrument(skip(self))]
    pub async fn fetch_activity(&self) -> Result<Activity, UpstreamError> {
        metrics::inc_upstream_requests();

        let response = self.http.get(&self.upstream_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::BadStatus { status });
        }

        let activity: Activity = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        debug!(keys = activity.len(), "Fetched activity record");

        Ok(activity)
    }

    /// Perform `n` sequential upstream calls, accumulating successes in call
    /// order.
    ///
    /// Failed calls are logged and skipped; the loop never aborts early and
    /// never retries, so the returned sequence may be shorter than `n`,
    /// including empty.
    #[instrument(skip(self))]
    pub async fn fetch_activities(&self, n: u32) -> Vec<Activity> {
        let mut activities = Vec::with_capacity(n as usize);

        for i in 0..n {
            match self.fetch_activity().await {
                Ok(activity) => activities.push(activity),
                Err(e) => {
                    metrics::inc_upstream_failures();
                    warn!(call = i + 1, total = n, error = %e, "Upstream call failed, skipping");
                }
            }
        }

        debug!(
            requested = n,
            collected = activities.len(),
            "Fetch loop complete"
        );

        activities
    }
}
