/// Tracing and structured logging configuration
use std::str::FromStr;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format for development
    Human,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "" => Ok(OutputFormat::Human),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Filter used when `RUST_LOG` is not set
fn default_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    EnvFilter::new(format!("cliches={},tower=warn,axum=info", log_level))
}

/// Initialize tracing subscriber with the specified format
///
/// # Environment Variables
/// * `RUST_LOG` - Log level filter (e.g., "cliches=debug,tower=warn")
/// * `LOG_LEVEL` - Level for this crate if RUST_LOG not set (default: "info")
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing(format: OutputFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    let res = match format {
        OutputFormat::Human => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_level(true)
                    .with_ansi(true),
            )
            .try_init(),
        OutputFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_level(true),
            )
            .try_init(),
    };

    match res {
        Ok(()) => tracing::info!(?format, "Tracing initialized"),
        Err(e) => tracing::debug!(error = %e, "tracing already initialized"),
    }
}

/// Initialize tracing with the format named by `LOG_FORMAT`
///
/// * "json" -> JSON format
/// * "human" or not set -> Human-readable format
///
/// ```bash
/// LOG_FORMAT=json cliches
/// ```
pub fn init_tracing_from_env() {
    let format_str = std::env::var("LOG_FORMAT").unwrap_or_default();
    let format = match OutputFormat::from_str(&format_str) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}, falling back to human-readable logs");
            OutputFormat::Human
        }
    };
    init_tracing(format);
}
