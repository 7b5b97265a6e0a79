//! Process-wide observability bootstrap.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

/// Handles to the observability backends.
///
/// Owned by the composition root for the lifetime of the process: acquired
/// once at startup, released on shutdown. Components receive capabilities
/// (e.g. a metrics sink) instead of reaching for globals.
pub struct Telemetry {
    metrics: PrometheusHandle,
}

impl Telemetry {
    /// Renders the current metrics in Prometheus exposition format.
    pub fn render_metrics(&self) -> String {
        self.metrics.render()
    }
}

/// Installs the tracing subscriber and the Prometheus metrics recorder.
///
/// Call exactly once at process start.
pub fn init(config: &Config) -> Telemetry {
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    Telemetry { metrics }
}
