// Copyright PingCAP Inc. 2025.
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; version 2 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

/// Prometheus metrics definitions for cliches
use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_gauge_vec, register_histogram_vec, register_int_gauge,
    CounterVec, GaugeVec, HistogramVec, IntGauge, TextEncoder,
};

lazy_static! {
    // ============================================================================
    // HTTP Metrics
    // ============================================================================

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "endpoint", "status"],
        vec![0.0005, 0.001, 0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.0]
    ).unwrap();

    /// HTTP request count
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = register_counter_vec!(
        "http_requests_total",
        "Total number of HTTP requests",
        &["method", "endpoint", "status"]
    ).unwrap();

    // ============================================================================
    // Store Actor Metrics
    // ============================================================================

    /// Time the actor spends on one command, from dequeue to reply
    pub static ref ACTOR_OP_DURATION: HistogramVec = register_histogram_vec!(
        "actor_operation_duration_seconds",
        "Store actor operation duration in seconds",
        &["operation"],
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.010]
    ).unwrap();

    /// Number of pairs currently held by the store
    pub static ref STORE_RECORDS: IntGauge = register_int_gauge!(
        "store_records",
        "Number of cliche pairs in the store"
    ).unwrap();

    // ============================================================================
    // Error and concurrency metrics
    // ============================================================================

    /// Errors by type and component
    pub static ref ERROR_TOTAL: CounterVec = register_counter_vec!(
        "errors_total",
        "Total number of errors",
        &["error_type", "component"]
    ).unwrap();

    /// Requests currently being served
    pub static ref CONCURRENT_REQUESTS: GaugeVec = register_gauge_vec!(
        "concurrent_requests",
        "Number of requests currently in flight",
        &["protocol"]
    ).unwrap();
}

/// Record one store actor operation
pub fn record_actor_op_total(operation: &str, duration: f64) {
    ACTOR_OP_DURATION
        .with_label_values(&[operation])
        .observe(duration);
}

/// Publish the current collection size
pub fn set_store_records(count: usize) {
    STORE_RECORDS.set(count as i64);
}

/// Increment error counter
pub fn increment_error(error_type: &str, component: &str) {
    ERROR_TOTAL
        .with_label_values(&[error_type, component])
        .inc();
}

/// Increment HTTP request counter
pub fn increment_http_request(method: &str, endpoint: &str, status: &str) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, status])
        .inc();
}

/// Record HTTP request duration
pub fn record_http_duration(method: &str, endpoint: &str, status: &str, duration: f64) {
    HTTP_REQUEST_DURATION
        .with_label_values(&[method, endpoint, status])
        .observe(duration);
}

/// Increment concurrent requests
pub fn inc_concurrent_requests(protocol: &str) {
    CONCURRENT_REQUESTS.with_label_values(&[protocol]).inc();
}

/// Decrement concurrent requests
pub fn dec_concurrent_requests(protocol: &str) {
    CONCURRENT_REQUESTS.with_label_values(&[protocol]).dec();
}

/// Gather all metrics for Prometheus exposition
pub fn gather_metrics() -> Vec<u8> {
    use prometheus::Encoder;
    let encoder = TextEncoder::new();
    // Metrics are registered on the default registry
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "failed to encode metrics");
    }
    buffer
}
