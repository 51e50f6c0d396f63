//! Packaging-mode detection and configuration path resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Directory component that marks an installed (packaged) binary.
pub const PACKAGED_DIR_NAME: &str = "bin";
/// Name of the configuration directory under the resolved root.
pub const CONFIG_DIR_NAME: &str = "config";

/// Layout the binary is running from, derived once per boot attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagingMode {
    /// Installed under `<prefix>/bin`; configuration lives two levels up.
    Packaged,
    /// Development layout; configuration lives one level up.
    SourceLayout,
}

impl PackagingMode {
    /// Detect the layout purely from the directory containing the binary.
    pub fn detect(base: &Path) -> Self {
        match base.file_name() {
            Some(name) if name == PACKAGED_DIR_NAME => PackagingMode::Packaged,
            _ => PackagingMode::SourceLayout,
        }
    }
}

/// Resolve the root directory for a base directory and packaging mode.
///
/// Exactly one of two fixed relative offsets is applied: `Packaged` doubles
/// the offset, `SourceLayout` uses the single offset.
pub fn root_dir(base: &Path, mode: PackagingMode) -> PathBuf {
    match mode {
        PackagingMode::Packaged => base.join("..").join(".."),
        PackagingMode::SourceLayout => base.join(".."),
    }
}

/// Configuration directory under a resolved root.
pub fn config_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR_NAME)
}

/// Directory containing the currently running executable.
pub fn exe_base_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("failed to locate the running executable")?;
    let base = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(base.to_path_buf())
}
