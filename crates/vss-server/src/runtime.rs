//! Job runtime loop
//!
//! One JSON job per input line, one JSON response per output line, in
//! the same order. Blank lines are skipped.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};
use vss_domain::error::Result;
use vss_infrastructure::error_ext::ErrorContext;

use crate::handler::JobHandler;
use crate::job::JobResponse;

/// Serve jobs from `reader` until EOF; returns the number answered
pub async fn serve_lines<R, W>(handler: &JobHandler, reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut answered = 0;

    while let Some(line) = lines.next_line().await.io_context("Failed to read job")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let response = handler.handle_json(line).await;
        debug!(job = answered, error = response.is_error(), "Job answered");
        write_response(&mut writer, &response).await?;
        answered += 1;
    }

    info!(jobs = answered, "Input closed");
    Ok(answered)
}

/// Write one response as a JSON line
pub async fn write_response<W>(writer: &mut W, response: &JobResponse) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut encoded = serde_json::to_vec(response)?;
    encoded.push(b'\n');
    writer
        .write_all(&encoded)
        .await
        .io_context("Failed to write response")?;
    writer.flush().await.io_context("Failed to flush response")
}
