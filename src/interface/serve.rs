//! # Server Entry
//!
//! Runs a tool server over the process's stdio until the peer disconnects.

use anyhow::{Context, Result};
use rmcp::{ServerHandler, ServiceExt, transport::stdio};

pub async fn serve_stdio<S: ServerHandler>(server: S, name: &str) -> Result<()> {
    tracing::info!("Starting {} on stdio...", name);

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("{} failed to start: {:?}", name, e))
        .with_context(|| format!("Failed to start {name}"))?;

    let reason = service.waiting().await?;
    tracing::info!("{} stopped: {:?}", name, reason);
    Ok(())
}
