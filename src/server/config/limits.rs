use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::lib::errors::ConfigError;

pub const DEFAULT_MAX_CONNECTIONS: usize = 256;
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;

/// Connection and timeout limits for the runtime.
#[derive(Debug, Clone, Serialize)]
pub struct LimitsSection {
    pub max_connections: usize,
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLimitsSection {
    pub max_connections: Option<usize>,
    pub idle_timeout_secs: Option<u64>,
}

pub fn parse_limits_section(
    raw: Option<RawLimitsSection>,
    path: &Path,
) -> Result<LimitsSection, ConfigError> {
    let limits_raw = raw.unwrap_or_default();
    let max_connections = limits_raw.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS);
    let idle_timeout_secs = limits_raw
        .idle_timeout_secs
        .unwrap_or(DEFAULT_IDLE_TIMEOUT_SECS);

    if max_connections == 0 {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "limits.max_connections",
            message: "At least one connection must be allowed".into(),
        });
    }
    if idle_timeout_secs == 0 {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "limits.idle_timeout_secs",
            message: "Idle timeout must be at least one second".into(),
        });
    }

    Ok(LimitsSection {
        max_connections,
        idle_timeout_secs,
    })
}
