use anyhow::{Context, Result};
use rmcp::{
    RoleClient, ServiceExt,
    model::{CallToolRequestParam, Tool},
    service::RunningService,
    transport::{ConfigureCommandExt, IntoTransport, TokioChildProcess},
};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::process::Command;

use crate::domain::types::{FileEntry, ToolOutcome};

/// MCP client session with one tool server.
///
/// Each invocation is a single round trip; nothing is retried or batched.
pub struct McpClient {
    service: RunningService<RoleClient, ()>,
}

impl McpClient {
    /// Runs the MCP handshake over an already established transport.
    ///
    /// # Arguments
    /// * `transport` - Any rmcp transport: a child process, stdio, an in-memory duplex, ...
    pub async fn connect<T, E, A>(transport: T) -> Result<Self>
    where
        T: IntoTransport<RoleClient, E, A>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let service = ()
            .serve(transport)
            .await
            .context("MCP handshake failed")?;

        if let Some(info) = service.peer_info() {
            tracing::info!(
                "Connected to {} {}",
                info.server_info.name,
                info.server_info.version
            );
        }

        Ok(Self { service })
    }

    /// Starts a server binary and connects to it over its stdio.
    ///
    /// # Arguments
    /// * `server_path` - Path to the MCP server binary
    /// * `args` - Extra arguments passed to the server
    pub async fn spawn(server_path: &Path, args: &[String]) -> Result<Self> {
        tracing::info!("Starting MCP server {}", server_path.display());
        let transport = TokioChildProcess::new(Command::new(server_path).configure(|cmd| {
            cmd.args(args);
        }))
        .with_context(|| format!("Failed to start {}", server_path.display()))?;

        Self::connect(transport).await
    }

    /// Tools advertised by the server.
    pub async fn list_tools(&self) -> Result<Vec<Tool>> {
        self.service
            .list_all_tools()
            .await
            .context("Failed to list tools")
    }

    /// Invokes a tool by name.
    ///
    /// Transport failures are `Err`; tool failures come back as `ToolOutcome { ok: false, .. }`.
    pub async fn invoke(&self, name: &str, arguments: Map<String, Value>) -> Result<ToolOutcome> {
        tracing::debug!("Calling tool {}", name);
        let result = self
            .service
            .call_tool(CallToolRequestParam {
                name: name.to_string().into(),
                arguments: Some(arguments),
            })
            .await
            .with_context(|| format!("Tool call {name} failed"))?;

        let text: String = result
            .content
            .iter()
            .filter_map(|content| content.as_text())
            .map(|content| content.text.as_str())
            .collect();

        if result.is_error.unwrap_or(false) {
            Ok(ToolOutcome::failure(text))
        } else {
            Ok(ToolOutcome::success(text))
        }
    }

    /// Ends the session and waits for the background task to stop.
    pub async fn close(self) -> Result<()> {
        let reason = self.service.cancel().await.context("Failed to close session")?;
        tracing::debug!("Session closed: {:?}", reason);
        Ok(())
    }
}

fn arguments<const N: usize>(pairs: [(&str, &str); N]) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

/// Typed caller for the `file-server` tools.
pub struct FileClient {
    client: McpClient,
}

impl FileClient {
    pub fn new(client: McpClient) -> Self {
        Self { client }
    }

    /// JSON listing of a directory.
    pub async fn list_files(&self, path: &str) -> Result<ToolOutcome> {
        self.client.invoke("list_files", arguments([("path", path)])).await
    }

    /// Listing parsed into entries. Tool failures become `Err` carrying the server text.
    pub async fn list_entries(&self, path: &str) -> Result<Vec<FileEntry>> {
        let json = self
            .list_files(path)
            .await?
            .into_result()
            .map_err(anyhow::Error::msg)?;
        serde_json::from_str(&json).context("Malformed listing")
    }

    pub async fn read_file(&self, path: &str) -> Result<ToolOutcome> {
        self.client.invoke("read_file", arguments([("path", path)])).await
    }

    pub async fn write_file(&self, path: &str, content: &str) -> Result<ToolOutcome> {
        self.client
            .invoke("write_file", arguments([("path", path), ("content", content)]))
            .await
    }

    pub async fn delete_file(&self, path: &str) -> Result<ToolOutcome> {
        self.client.invoke("delete_file", arguments([("path", path)])).await
    }

    pub fn session(&self) -> &McpClient {
        &self.client
    }

    pub async fn close(self) -> Result<()> {
        self.client.close().await
    }
}

/// Typed caller for the `unix-shell` tool.
pub struct ShellClient {
    client: McpClient,
}

impl ShellClient {
    pub fn new(client: McpClient) -> Self {
        Self { client }
    }

    pub async fn execute_command(&self, command: &str) -> Result<ToolOutcome> {
        self.client
            .invoke("execute_command", arguments([("command", command)]))
            .await
    }

    pub async fn close(self) -> Result<()> {
        self.client.close().await
    }
}
