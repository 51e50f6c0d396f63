//! Log-filter rules handed through the boot orchestrator to server assembly.
//!
//! Directives use `tracing_subscriber::EnvFilter` syntax. The orchestrator
//! passes them through unmodified; the runtime records them in its startup
//! telemetry and tracing initialization uses them as the `RUST_LOG` fallback.

const DEFAULT_FILTERS: &[&str] = &["hearth=info", "hearth::runtime=info", "hearth::config=info"];

/// Filter directives for this deployment.
pub fn log_filters() -> Vec<String> {
    DEFAULT_FILTERS.iter().map(|rule| rule.to_string()).collect()
}
