//! Server assembly: produce the per-boot-attempt bundle of configuration
//! factory, run operation, and exit handler.
use std::{future::Future, path::PathBuf, pin::Pin, sync::Arc};

use anyhow::{bail, Error, Result};
use tracing::error;

use crate::{
    lib::paths::is_nonempty_absolute,
    server::{
        config::{ConfigFactory, Configuration},
        deps::Dependencies,
        runtime,
    },
};

/// Capability used by the run operation to build its dependencies.
pub type DependencyFactory = Box<dyn Fn(&Configuration) -> Dependencies + Send + Sync>;

/// Future returned by a run operation.
pub type RunFuture = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

/// The server's run operation; consumed by the execution strategy.
pub type RunOp = Box<dyn FnOnce(Arc<ConfigFactory>) -> RunFuture + Send>;

/// Handler for failures routed out of the asynchronous boot phases.
pub type ExitHandler = Box<dyn FnOnce(Error) + Send>;

/// Inputs the boot orchestrator hands to server assembly.
pub struct AssemblyInputs {
    pub log_filters: Vec<String>,
    pub config_path: PathBuf,
    pub create_dependencies: DependencyFactory,
}

/// One boot attempt's server: created here, never shared or reused.
pub struct ServerBundle {
    pub config_factory: Arc<ConfigFactory>,
    pub run: RunOp,
    pub exit: ExitHandler,
}

impl std::fmt::Debug for ServerBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerBundle")
            .field("config_factory", &self.config_factory)
            .finish_non_exhaustive()
    }
}

/// Assemble a server bundle. Synchronous; an error here means the server
/// cannot be built at all and the orchestrator treats it as fatal.
pub fn create_server(inputs: AssemblyInputs) -> Result<ServerBundle> {
    let AssemblyInputs {
        log_filters,
        config_path,
        create_dependencies,
    } = inputs;

    if !is_nonempty_absolute(&config_path) {
        bail!(
            "configuration path must be absolute and non-empty: `{}`",
            config_path.display()
        );
    }

    let config_factory = Arc::new(ConfigFactory::new(config_path));

    let run: RunOp = Box::new(move |factory: Arc<ConfigFactory>| -> RunFuture {
        Box::pin(async move {
            let config = factory.create().await?;
            let deps = (create_dependencies)(&config);
            runtime::serve(config, deps, log_filters).await
        })
    });

    let exit: ExitHandler = Box::new(|err: Error| {
        error!(
            target: "hearth::boot",
            error = %err,
            "Server terminated with unrecoverable error"
        );
        std::process::exit(1);
    });

    Ok(ServerBundle {
        config_factory,
        run,
        exit,
    })
}
