//! Prometheus metrics for upstream calls and exports.

use metrics::{counter, describe_counter};
use tracing::debug;

/// Upstream calls attempted counter metric name.
pub const METRIC_UPSTREAM_REQUESTS: &str = "upstream_requests_total";
/// Upstream calls failed counter metric name.
pub const METRIC_UPSTREAM_FAILURES: &str = "upstream_failures_total";
/// Exports delivered counter metric name (labeled by format).
pub const METRIC_EXPORTS: &str = "exports_total";
/// Export failures counter metric name.
pub const METRIC_EXPORT_FAILURES: &str = "export_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_UPSTREAM_REQUESTS,
        "Total number of upstream activity calls attempted"
    );
    describe_counter!(
        METRIC_UPSTREAM_FAILURES,
        "Total number of upstream activity calls that failed"
    );
    describe_counter!(METRIC_EXPORTS, "Total number of exports delivered");
    describe_counter!(
        METRIC_EXPORT_FAILURES,
        "Total number of exports that failed to render or deliver"
    );

    debug!("Metrics initialized");
}

/// Increment the upstream calls attempted counter.
pub fn inc_upstream_requests() {
    counter!(METRIC_UPSTREAM_REQUESTS).increment(1);
}

/// Increment the upstream calls failed counter.
pub fn inc_upstream_failures() {
    counter!(METRIC_UPSTREAM_FAILURES).increment(1);
}

/// Increment the exports delivered counter for a format.
pub fn inc_exports(format: &str) {
    counter!(METRIC_EXPORTS, "format" => format.to_string()).increment(1);
}

/// Increment the export failures counter.
pub fn inc_export_failures() {
    counter!(METRIC_EXPORT_FAILURES).increment(1);
}
