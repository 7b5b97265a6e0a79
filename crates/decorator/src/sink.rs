//! Metrics sink capability.

use std::time::Duration;

/// Destination for per-handler metrics.
///
/// Passed into the decorator pipeline at composition time so handlers and
/// decorators hold an explicit capability rather than reaching for global
/// state themselves.
pub trait MetricsSink: Send + Sync {
    /// Records one handled request.
    ///
    /// `kind` is `"command"` or `"query"`, `handler` the handler's display
    /// name, `outcome` `"success"` or `"failure"`.
    fn record(&self, kind: &'static str, handler: &'static str, outcome: &'static str, elapsed: Duration);
}

/// Sink backed by the process-wide Prometheus recorder.
///
/// The recorder itself is installed once by the composition root; this type
/// is only a facade over the `metrics` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrometheusSink;

impl MetricsSink for PrometheusSink {
    fn record(&self, kind: &'static str, handler: &'static str, outcome: &'static str, elapsed: Duration) {
        metrics::counter!(
            "handler_requests_total",
            "kind" => kind,
            "handler" => handler,
            "outcome" => outcome
        )
        .increment(1);
        metrics::histogram!(
            "handler_duration_seconds",
            "kind" => kind,
            "handler" => handler
        )
        .record(elapsed.as_secs_f64());
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MetricsSink for NullSink {
    fn record(&self, _: &'static str, _: &'static str, _: &'static str, _: Duration) {}
}
