//! Execution strategy contract, default strategy, and completion signaling.
use std::sync::Arc;

use anyhow::{Error, Result};
use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::server::{assembly::RunOp, config::ConfigFactory};

/// Single-fire completion signal for one boot attempt.
///
/// Both `succeed` and `fail` consume the signal, so a strategy cannot report
/// completion more than once.
#[derive(Debug)]
pub struct Completion {
    tx: oneshot::Sender<Result<()>>,
}

/// Receiving side awaited by the orchestrator.
pub type CompletionOutcome = oneshot::Receiver<Result<()>>;

impl Completion {
    /// Create a completion signal and the receiver the orchestrator awaits.
    pub fn channel() -> (Self, CompletionOutcome) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Signal that the boot attempt completed without error.
    pub fn succeed(self) {
        let _ = self.tx.send(Ok(()));
    }

    /// Signal that the boot attempt failed.
    pub fn fail(self, err: Error) {
        let _ = self.tx.send(Err(err));
    }
}

/// How the server's run operation is invoked and completion is signaled.
///
/// Implementations must either signal `done` exactly once, or return an error
/// without signaling; that error then surfaces to the invoker instead of the
/// completion channel.
#[async_trait]
pub trait ExecStrategy: Send {
    async fn execute(
        self: Box<Self>,
        run: RunOp,
        config_factory: Arc<ConfigFactory>,
        done: Completion,
    ) -> Result<()>;
}

/// Default strategy: run to completion, then signal success.
///
/// Errors from `run` are not converted into a `done` failure; they propagate
/// out of `execute` and the signal is dropped unfired.
pub struct SyncExec;

#[async_trait]
impl ExecStrategy for SyncExec {
    async fn execute(
        self: Box<Self>,
        run: RunOp,
        config_factory: Arc<ConfigFactory>,
        done: Completion,
    ) -> Result<()> {
        run(config_factory).await?;
        done.succeed();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::server::{assembly::RunFuture, config::ConfigFactory};

    fn unused_factory() -> Arc<ConfigFactory> {
        Arc::new(ConfigFactory::new("/nonexistent".into()))
    }

    #[tokio::test]
    async fn completion_delivers_success_once() {
        let (done, outcome) = Completion::channel();
        done.succeed();
        assert!(outcome.await.expect("signal fired").is_ok());
    }

    #[tokio::test]
    async fn completion_delivers_failure() {
        let (done, outcome) = Completion::channel();
        done.fail(anyhow!("configuration unavailable"));
        let result = outcome.await.expect("signal fired");
        assert_eq!(
            result.expect_err("must be a failure").to_string(),
            "configuration unavailable"
        );
    }

    #[tokio::test]
    async fn dropped_completion_is_observable() {
        let (done, outcome) = Completion::channel();
        drop(done);
        assert!(outcome.await.is_err());
    }

    #[tokio::test]
    async fn sync_exec_signals_success_after_run() {
        let (done, outcome) = Completion::channel();
        let run: RunOp = Box::new(|_| -> RunFuture { Box::pin(async { Ok(()) }) });
        Box::new(SyncExec)
            .execute(run, unused_factory(), done)
            .await
            .expect("run succeeded");
        assert!(outcome.await.expect("signal fired").is_ok());
    }

    #[tokio::test]
    async fn sync_exec_propagates_run_errors_without_signaling() {
        let (done, outcome) = Completion::channel();
        let run: RunOp =
            Box::new(|_| -> RunFuture { Box::pin(async { Err(anyhow!("listener refused")) }) });
        let err = Box::new(SyncExec)
            .execute(run, unused_factory(), done)
            .await
            .expect_err("run error must propagate out of execute");
        assert_eq!(err.to_string(), "listener refused");
        // The signal was dropped unfired, never converted into a failure.
        assert!(outcome.await.is_err());
    }
}
