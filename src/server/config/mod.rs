//! Load and validate server configuration, plus the configuration bootstrap
//! phase run by the boot orchestrator.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod factory;
pub mod limits;
pub mod server;
pub mod telemetry;

pub use factory::{ConfigFactory, CONFIG_FILE_NAME};
pub use limits::{
    parse_limits_section, LimitsSection, RawLimitsSection, DEFAULT_IDLE_TIMEOUT_SECS,
    DEFAULT_MAX_CONNECTIONS,
};
pub use server::{parse_server_section, RawServerSection, ServerSection, DEFAULT_HOST, DEFAULT_PORT};

/// Top-level configuration container.
#[derive(Debug, Clone, Serialize)]
pub struct Configuration {
    pub server: ServerSection,
    pub limits: LimitsSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawConfiguration {
    server: Option<RawServerSection>,
    limits: Option<RawLimitsSection>,
}

impl Configuration {
    /// Load configuration from a specific file.
    pub(crate) fn load(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "hearth::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "hearth::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawConfiguration = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "hearth::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "hearth::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawConfiguration, path: PathBuf) -> Result<Self, ConfigError> {
        let server = parse_server_section(raw.server, &path)?;
        let limits = parse_limits_section(raw.limits, &path)?;

        Ok(Self {
            server,
            limits,
            source_path: path,
        })
    }

    /// User-facing payload printed by `check-config`.
    pub fn summary(&self) -> serde_json::Value {
        json!({
            "server": self.server,
            "limits": self.limits,
            "source_path": self.source_path.to_string_lossy(),
        })
    }
}

/// Configuration Bootstrap: verify the configuration location before the
/// execution strategy runs. Parsing is deferred to [`ConfigFactory::create`].
pub async fn configure(factory: &ConfigFactory, root: &Path) -> Result<(), ConfigError> {
    let root_meta = tokio::fs::metadata(root).await;
    if !root_meta.map(|meta| meta.is_dir()).unwrap_or(false) {
        return Err(ConfigError::RootUnavailable {
            path: root.to_path_buf(),
        });
    }

    let file = factory.config_file();
    if tokio::fs::metadata(&file).await.is_err() {
        return Err(ConfigError::FileMissing { path: file });
    }

    info!(
        target: "hearth::config",
        root = %root.display(),
        file = %file.display(),
        "Configuration location verified"
    );
    Ok(())
}
