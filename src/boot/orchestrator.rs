//! Boot orchestration: path resolution, server assembly, configuration
//! bootstrap, and execution-strategy dispatch.
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use anyhow::{anyhow, Error, Result};
use tracing::debug;

use crate::{
    boot::{
        exec::{Completion, ExecStrategy},
        paths::{self, PackagingMode},
    },
    server::{
        assembly::{create_server, AssemblyInputs, ServerBundle},
        config, deps, filters,
    },
};

/// Exit code reserved for failures before any asynchronous phase begins:
/// path resolution or server assembly.
pub const FATAL_ASSEMBLY_EXIT_CODE: u8 = 3;

/// Bundles a boot failure message with the process exit code it maps to.
#[derive(Debug)]
pub struct BootExit {
    message: String,
    code: u8,
}

impl BootExit {
    /// A synchronous setup failure: the server could not even be assembled.
    pub fn fatal(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            code: FATAL_ASSEMBLY_EXIT_CODE,
        }
    }

    /// Any other entry-point failure.
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            code: 1,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.code)
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Run one boot attempt.
///
/// Path resolution and server assembly happen synchronously; any failure
/// there is returned as a fatal [`BootExit`] without touching the bundle's
/// exit handler. Once assembly has produced a bundle, configuration
/// bootstrap and the execution strategy run asynchronously and their
/// failures are routed to that exit handler instead.
pub async fn boot(
    strategy: Box<dyn ExecStrategy>,
    config_override: Option<PathBuf>,
) -> Result<(), BootExit> {
    let (root, config_dir) = resolve_dirs(config_override).map_err(BootExit::fatal)?;
    debug!(
        target: "hearth::boot",
        root = %root.display(),
        config_dir = %config_dir.display(),
        "Resolved configuration location"
    );

    let bundle = create_server(AssemblyInputs {
        log_filters: filters::log_filters(),
        config_path: config_dir,
        create_dependencies: Box::new(deps::create_dependencies),
    })
    .map_err(BootExit::fatal)?;

    run_configured(bundle, &root, strategy).await;
    Ok(())
}

/// Resolve the root and configuration directories for this boot attempt.
///
/// Without an override, both are derived positionally from the running
/// executable's location via [`PackagingMode::detect`].
fn resolve_dirs(config_override: Option<PathBuf>) -> Result<(PathBuf, PathBuf)> {
    if let Some(dir) = config_override {
        let root = dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dir.clone());
        return Ok((root, dir));
    }

    let base = paths::exe_base_dir()?;
    let mode = PackagingMode::detect(&base);
    let root = paths::root_dir(&base, mode);
    let config_dir = paths::config_dir(&root);
    Ok((root, config_dir))
}

/// Asynchronous stage: configuration bootstrap, then the execution strategy.
async fn run_configured(bundle: ServerBundle, root: &Path, strategy: Box<dyn ExecStrategy>) {
    let ServerBundle {
        config_factory,
        run,
        exit,
    } = bundle;

    if let Err(err) = config::configure(&config_factory, root).await {
        exit(Error::new(err));
        return;
    }

    let (done, outcome) = Completion::channel();
    if let Err(err) = strategy.execute(run, Arc::clone(&config_factory), done).await {
        exit(err);
        return;
    }

    match outcome.await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => exit(err),
        Err(_) => exit(anyhow!(
            "execution strategy dropped its completion signal without reporting an outcome"
        )),
    }
}
