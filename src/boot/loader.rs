//! Introspection boot: resolve the configuration without starting the server.
use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, Error, Result};
use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::{
    boot::{
        exec::{Completion, ExecStrategy},
        orchestrator::boot,
    },
    server::{
        assembly::RunOp,
        config::{ConfigFactory, Configuration},
    },
};

/// Execution strategy that captures the resolved configuration instead of
/// running the server. It signals `done` success in both arms; the captured
/// outcome travels on its own channel.
struct CaptureConfig {
    tx: oneshot::Sender<Result<Arc<Configuration>>>,
}

#[async_trait]
impl ExecStrategy for CaptureConfig {
    async fn execute(
        self: Box<Self>,
        _run: RunOp,
        config_factory: Arc<ConfigFactory>,
        done: Completion,
    ) -> Result<()> {
        let outcome = config_factory.create().await.map_err(Error::new);
        let _ = self.tx.send(outcome);
        done.succeed();
        Ok(())
    }
}

/// Boot far enough to resolve configuration, then return it.
///
/// Exactly one of success or failure is produced per call, and no
/// configuration-level error terminates the process through the
/// orchestrator; everything surfaces as an `Err` to the caller.
pub async fn load_config(config_override: Option<PathBuf>) -> Result<Arc<Configuration>> {
    let (tx, rx) = oneshot::channel();
    boot(Box::new(CaptureConfig { tx }), config_override)
        .await
        .map_err(|exit| anyhow!("{}", exit.message()))?;

    match rx.await {
        Ok(outcome) => outcome,
        // The strategy never ran: bootstrap failed and was routed to the
        // exit handler before introspection could happen.
        Err(_) => Err(anyhow!(
            "configuration was not resolved; bootstrap failed before introspection"
        )),
    }
}
