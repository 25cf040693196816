//! Observability: log setup, Prometheus metrics and readiness checks
pub mod health;
pub mod metrics;
pub mod tracing_setup;
