//! Session loop wiring an input stream to the dispatcher
//!
//! The read loop never awaits a remote call in-line: every complete line is
//! dispatched on its own task, so responses to concurrent requests may be
//! emitted out of arrival order. Per-request id correlation is the only
//! ordering guarantee.

use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::debug;

use crate::mcp::server::{capabilities_announcement, handle_json_rpc_line};
use crate::stdio::framer::LineFramer;
use crate::AppState;

pub async fn run_session<R, W>(state: AppState, mut reader: R, writer: W) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Send + Unpin + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<Value>();
    let emitter = tokio::spawn(emit_lines(rx, writer));

    let _ = tx.send(capabilities_announcement());

    let mut framer = LineFramer::new();
    let mut chunk = [0u8; 8192];
    loop {
        let read = reader.read(&mut chunk).await?;
        if read == 0 {
            break;
        }

        for line in framer.push(&chunk[..read]) {
            let state = state.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = handle_json_rpc_line(&state, &line).await {
                    let _ = tx.send(response);
                }
            });
        }
    }

    // Input is gone; the emitter drains once every in-flight dispatch task
    // has released its sender.
    drop(tx);
    let _ = emitter.await;
    Ok(())
}

async fn emit_lines<W>(mut rx: mpsc::UnboundedReceiver<Value>, mut writer: W)
where
    W: AsyncWrite + Unpin,
{
    while let Some(message) = rx.recv().await {
        let mut line = message.to_string();
        line.push('\n');
        if writer.write_all(line.as_bytes()).await.is_err() {
            debug!("output stream closed, dropping remaining responses");
            return;
        }
        let _ = writer.flush().await;
    }
}
