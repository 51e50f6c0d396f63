//! Configuration factory: parse once, share for the rest of the boot attempt.
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::OnceCell;

use super::Configuration;
use crate::lib::errors::ConfigError;

/// File name expected inside the resolved configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Produces the [`Configuration`] for one boot attempt.
///
/// The first `create` call parses the file; later calls return the cached
/// value. A fresh factory is assembled per boot attempt, so nothing leaks
/// between attempts.
#[derive(Debug)]
pub struct ConfigFactory {
    config_dir: PathBuf,
    cached: OnceCell<Arc<Configuration>>,
}

impl ConfigFactory {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            cached: OnceCell::new(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of the configuration file this factory reads.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Produce the configuration, loading it on first use.
    pub async fn create(&self) -> Result<Arc<Configuration>, ConfigError> {
        self.cached
            .get_or_try_init(|| async { Configuration::load(self.config_file()).map(Arc::new) })
            .await
            .cloned()
    }
}
