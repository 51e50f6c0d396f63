//! Runtime dependency construction.
//!
//! The boot orchestrator passes [`create_dependencies`] into server assembly
//! as an opaque capability; only the run operation ever calls it.
use std::{sync::Arc, time::Instant};

use crate::server::config::Configuration;

/// Dependencies the runtime needs beyond its configuration.
pub struct Dependencies {
    pub status: Arc<StatusSource>,
}

/// Answers `STATUS` requests: version, endpoint, uptime.
pub struct StatusSource {
    version: &'static str,
    endpoint: String,
    started_at: Instant,
}

impl StatusSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            endpoint,
            started_at: Instant::now(),
        }
    }

    pub fn report(&self) -> String {
        format!(
            "hearth {} endpoint={} uptime_secs={}",
            self.version,
            self.endpoint,
            self.started_at.elapsed().as_secs()
        )
    }
}

/// Build the runtime dependencies for one boot attempt.
pub fn create_dependencies(config: &Configuration) -> Dependencies {
    let endpoint = format!("{}:{}", config.server.host, config.server.port);
    Dependencies {
        status: Arc::new(StatusSource::new(endpoint)),
    }
}
