//! Telemetry initialization and runtime startup events.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// `RUST_LOG` wins when set; otherwise the supplied filter directives form
/// the default filter.
pub fn init_tracing(log_filters: &[String]) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filters.join(",")));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload for logging the server runtime state as structured telemetry.
#[derive(Debug)]
pub struct StartupTelemetry<'a> {
    pub host: &'a str,
    pub port: u16,
    pub config_path: &'a str,
    pub max_connections: usize,
    pub log_filters: &'a [String],
}

/// Emit the runtime startup state to `tracing`.
pub fn emit_startup(telemetry: &StartupTelemetry<'_>) {
    info!(
        target: "hearth::runtime",
        host = telemetry.host,
        port = telemetry.port,
        config_path = telemetry.config_path,
        max_connections = telemetry.max_connections,
        log_filters = ?telemetry.log_filters,
        "Started status server"
    );
}
