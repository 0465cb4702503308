//! Metrics collection and exposition.
//!
//! # Metrics
//! - `texpress_renders_total` (counter): render requests by outcome
//! - `texpress_render_duration_seconds` (histogram): end-to-end render
//!   latency, dominated by the external compiler
//!
//! # Design Decisions
//! - Outcome label values: "ok", "invalid_input", "compilation_failed",
//!   "io_error"
//! - Exporter is optional; when disabled the macros record into a no-op
//!   registry

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to start metrics exporter");
        }
    }
}

/// Record one render request outcome and its latency.
pub fn record_render(outcome: &'static str, started: Instant) {
    counter!("texpress_renders_total", "outcome" => outcome).increment(1);
    histogram!("texpress_render_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}
