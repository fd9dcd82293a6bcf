use serde::Deserialize;
use tracing_subscriber::{
    fmt::{self},
    prelude::*,
    EnvFilter,
};

/// Format for log output.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty-printed format.
    Pretty,
    /// JSON format for structured logging.
    Json,
    /// Minimal format with only essential information.
    #[default]
    Minimal,
}

/// Dependencies whose logs are capped at `warn`.
const QUIET_TARGETS: &[&str] = &[
    "alloy_provider",
    "alloy_rpc_client",
    "alloy_transport_http",
    "alloy_contract",
    "hyper",
    "hyper_util",
    "reqwest",
    "h2",
    "rustls",
    "tower",
];

/// Builds the filter used by [`init_logger`].
///
/// Falls back to `info` when `RUST_LOG` is unset.
///
/// # Panics
///
/// Panics if any of the log filter directives fail to parse.
#[must_use]
pub fn env_filter() -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    QUIET_TARGETS
        .iter()
        .fold(filter, |filter, target| filter.add_directive(format!("{target}=warn").parse().unwrap()))
}

/// Initializes the logging system.
///
/// Filters out crate dependencies to reduce noise.
pub fn init_logger(log_format: LogFormat) {
    let base = tracing_subscriber::registry().with(env_filter());

    match log_format {
        LogFormat::Pretty => base
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(false)
                    .with_target(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .init(),
        LogFormat::Json => base.with(fmt::layer().json()).init(),
        LogFormat::Minimal => base.with(fmt::layer().with_target(false).with_level(true).compact()).init(),
    }
}
