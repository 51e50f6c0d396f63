//! CLI entrypoint module structure.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

pub mod args;

pub use args::{CliCommand, LaunchArgs, LaunchProfile, ParsedCommand};

/// Absolutize a configuration-directory override against the current
/// directory. `None` means the boot orchestrator detects the location
/// positionally.
pub fn resolve_config_dir(override_dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(dir) = override_dir else {
        return Ok(None);
    };
    if dir.is_absolute() {
        return Ok(Some(dir));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(Some(cwd.join(dir)))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn absolute_override_passes_through() {
        let resolved = resolve_config_dir(Some(PathBuf::from("/etc/hearth/config")))
            .expect("resolution succeeds");
        assert_eq!(resolved, Some(PathBuf::from("/etc/hearth/config")));
    }

    #[test]
    fn relative_override_is_absolutized() {
        let resolved = resolve_config_dir(Some(PathBuf::from("config")))
            .expect("resolution succeeds")
            .expect("override present");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("config"));
    }

    #[test]
    fn missing_override_stays_missing() {
        assert_eq!(resolve_config_dir(None).expect("resolution succeeds"), None);
    }
}
