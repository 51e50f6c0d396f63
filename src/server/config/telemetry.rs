use tracing::info;

use super::Configuration;

pub fn log_loaded(config: &Configuration) {
    info!(
        target: "hearth::config",
        path = %config.source_path.display(),
        host = %config.server.host,
        port = config.server.port,
        max_connections = config.limits.max_connections,
        idle_timeout_secs = config.limits.idle_timeout_secs,
        "Configuration file loaded successfully"
    );
}
