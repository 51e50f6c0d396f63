use std::{process::Stdio, time::Duration};

use anyhow::{Context, Result};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpStream,
    process::Command,
    time::sleep,
};

use crate::common::{fixture, BINARY_PATH};

const SERVER_ADDR: &str = "127.0.0.1:47613";

async fn connect_with_retry(addr: &str) -> Result<TcpStream> {
    for _ in 0..50 {
        if let Ok(stream) = TcpStream::connect(addr).await {
            return Ok(stream);
        }
        sleep(Duration::from_millis(100)).await;
    }
    anyhow::bail!("server did not start listening on {addr}")
}

#[tokio::test]
async fn server_answers_the_line_protocol() -> Result<()> {
    let mut child = Command::new(BINARY_PATH)
        .args(["--config-dir", &fixture("tests/fixtures/server")])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .context("failed to spawn server process")?;

    let stream = connect_with_retry(SERVER_ADDR).await?;
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    write_half.write_all(b"PING\n").await?;
    assert_eq!(lines.next_line().await?.as_deref(), Some("PONG"));

    write_half.write_all(b"STATUS\n").await?;
    let status = lines.next_line().await?.context("status reply expected")?;
    assert!(status.contains("endpoint=127.0.0.1:47613"), "status: {status}");
    assert!(status.contains("uptime_secs="), "status: {status}");

    write_half.write_all(b"FROB\n").await?;
    let reply = lines.next_line().await?.context("error reply expected")?;
    assert!(reply.starts_with("ERR unknown command"), "reply: {reply}");

    write_half.write_all(b"QUIT\n").await?;
    assert_eq!(lines.next_line().await?.as_deref(), Some("BYE"));

    child.kill().await.context("failed to stop server process")?;
    Ok(())
}
