//! # MCP Tool Definitions
//!
//! The two tool servers exposed over MCP:
//! - `file-server`: `list_files`, `read_file`, `write_file`, `delete_file`
//! - `unix-shell`: `execute_command`
//!
//! Each server builds its tool router once at construction; it is read-only afterwards.
//! Failures are returned as tool results with `is_error` set, never as protocol errors.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::commands::CommandExecutor;
use crate::application::files::FileOperations;
use crate::domain::error::ToolError;
use crate::infrastructure::fs::LocalFileSystem;

pub const FILE_SERVER_NAME: &str = "file-server";
pub const SHELL_SERVER_NAME: &str = "unix-shell";

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathArgs {
    #[schemars(description = "Absolute path of the file or directory")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WriteArgs {
    #[schemars(description = "Absolute path of the file to write")]
    pub path: String,
    #[schemars(description = "Content to write to the file")]
    pub content: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CommandArgs {
    #[schemars(description = "Shell command line, e.g. \"ls -l /tmp\"")]
    pub command: String,
}

fn tool_result(tool: &str, result: Result<String, ToolError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => {
            tracing::warn!("{} failed: {}", tool, err);
            CallToolResult::error(vec![Content::text(err.render())])
        }
    }
}

/// MCP server for filesystem access. Any absolute path on the host is reachable.
#[derive(Clone)]
pub struct FileServer {
    files: Arc<FileOperations<LocalFileSystem>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FileServer {
    pub fn new(files: FileOperations<LocalFileSystem>) -> Self {
        Self {
            files: Arc::new(files),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "List all files in the specified directory. Returns a JSON array of {path, type, size}; size is \"-\" for directories."
    )]
    async fn list_files(
        &self,
        Parameters(PathArgs { path }): Parameters<PathArgs>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("list_files {}", path);
        Ok(tool_result("list_files", self.files.list_files(&path).await))
    }

    #[tool(description = "Read the contents of a plain-text file.")]
    async fn read_file(
        &self,
        Parameters(PathArgs { path }): Parameters<PathArgs>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("read_file {}", path);
        Ok(tool_result("read_file", self.files.read_file(&path).await))
    }

    #[tool(description = "Write content to a file, replacing what was there.")]
    async fn write_file(
        &self,
        Parameters(WriteArgs { path, content }): Parameters<WriteArgs>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("write_file {} ({} bytes)", path, content.len());
        Ok(tool_result(
            "write_file",
            self.files.write_file(&path, &content).await,
        ))
    }

    #[tool(description = "Delete a file or a directory.")]
    async fn delete_file(
        &self,
        Parameters(PathArgs { path }): Parameters<PathArgs>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("delete_file {}", path);
        Ok(tool_result("delete_file", self.files.delete_file(&path).await))
    }
}

#[tool_handler]
impl ServerHandler for FileServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: FILE_SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some("MCP server to interact with file system".into()),
        }
    }
}

/// MCP server running shell commands. Commands are executed verbatim.
#[derive(Clone)]
pub struct ShellServer {
    executor: Arc<CommandExecutor>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ShellServer {
    pub fn new(executor: CommandExecutor) -> Self {
        Self {
            executor: Arc::new(executor),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Execute a shell command and return the result")]
    async fn execute_command(
        &self,
        Parameters(CommandArgs { command }): Parameters<CommandArgs>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(
            "execute_command",
            self.executor.execute_command(&command).await,
        ))
    }
}

#[tool_handler]
impl ServerHandler for ShellServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SHELL_SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some("MCP server to interact with a Unix shell".into()),
        }
    }
}
