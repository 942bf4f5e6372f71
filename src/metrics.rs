use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder and describe metrics
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    init_metric_descriptions();

    Ok(handle)
}

/// Describe all metrics (safe to call more than once)
fn init_metric_descriptions() {
    describe_counter!(
        "ai_impact_estimates_total",
        "Total number of impact estimates served"
    );
    describe_counter!(
        "ai_impact_errors_total",
        "Total number of failed estimate requests"
    );
    describe_gauge!("ai_impact_info", "Estimator version information");

    gauge!("ai_impact_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a served estimate
pub fn record_estimate(model: &str) {
    counter!("ai_impact_estimates_total", "model" => model.to_string()).increment(1);
}

/// Record a failed request
pub fn record_error(error_type: &str) {
    counter!("ai_impact_errors_total", "error_type" => error_type.to_string()).increment(1);
}
