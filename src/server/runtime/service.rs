//! TCP accept loop and the PING/STATUS/QUIT line protocol.
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader},
    net::TcpListener,
    sync::Semaphore,
    time::timeout,
};
use tracing::{debug, info, warn};

use crate::{
    lib::telemetry::{emit_startup, StartupTelemetry},
    server::{
        config::Configuration,
        deps::{Dependencies, StatusSource},
    },
};

/// Run the status server until the listener fails.
pub async fn serve(
    config: Arc<Configuration>,
    deps: Dependencies,
    log_filters: Vec<String>,
) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind TCP port {addr}"))?;

    let config_path = config.source_path.to_string_lossy();
    emit_startup(&StartupTelemetry {
        host: &config.server.host,
        port: config.server.port,
        config_path: config_path.as_ref(),
        max_connections: config.limits.max_connections,
        log_filters: &log_filters,
    });

    let permits = Arc::new(Semaphore::new(config.limits.max_connections));
    let idle_timeout = Duration::from_secs(config.limits.idle_timeout_secs);

    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .with_context(|| format!("failed to accept TCP connection ({addr})"))?;

        let permit = match Arc::clone(&permits).try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!(
                    target: "hearth::runtime",
                    peer = %peer,
                    max_connections = config.limits.max_connections,
                    "Connection limit reached; dropping client"
                );
                continue;
            }
        };

        info!(
            target: "hearth::runtime",
            peer = %peer,
            "Accepted client connection"
        );
        let status = Arc::clone(&deps.status);
        tokio::spawn(async move {
            if let Err(err) = handle_client(stream, status, idle_timeout).await {
                debug!(
                    target: "hearth::runtime",
                    peer = %peer,
                    error = %err,
                    "Client connection ended with error"
                );
            }
            drop(permit);
        });
    }
}

async fn handle_client<S>(
    stream: S,
    status: Arc<StatusSource>,
    idle_timeout: Duration,
) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (read_half, mut write_half) = tokio::io::split(stream);
    let mut lines = BufReader::new(read_half).lines();

    loop {
        let line = match timeout(idle_timeout, lines.next_line()).await {
            Err(_) => {
                write_half.write_all(b"ERR idle timeout\n").await?;
                break;
            }
            Ok(result) => result?,
        };
        let Some(line) = line else { break };

        let reply = match line.trim() {
            "" => continue,
            "PING" => "PONG".to_string(),
            "STATUS" => status.report(),
            "QUIT" => {
                write_half.write_all(b"BYE\n").await?;
                break;
            }
            other => format!("ERR unknown command `{other}`"),
        };
        write_half.write_all(reply.as_bytes()).await?;
        write_half.write_all(b"\n").await?;
    }

    Ok(())
}
