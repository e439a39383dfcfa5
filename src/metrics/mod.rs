// Metrics module for Prometheus observability

mod registry;

pub use registry::{
    gather_metrics, PROVIDER_CALLS, PROVIDER_DURATION, REQUESTS_TOTAL, REQUEST_DURATION,
};

/// Helper to record request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16, duration_secs: f64) {
    let status = status_code.to_string();
    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, endpoint, &status])
        .observe(duration_secs);
}

/// Helper to record one translation provider call
pub fn record_provider_call(provider: &str, outcome: &str, duration_secs: f64) {
    PROVIDER_CALLS.with_label_values(&[provider, outcome]).inc();

    PROVIDER_DURATION
        .with_label_values(&[provider])
        .observe(duration_secs);
}
