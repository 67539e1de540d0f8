//! # Command Line
//!
//! Flags shared by the server and client binaries. Flags override `config.yaml`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::config::{AppConfig, DeletePolicy, WritePolicy};

#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file (defaults to data/config.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (RUST_LOG takes precedence)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CommonArgs {
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        Ok(config)
    }
}

/// MCP server exposing filesystem tools over stdio.
#[derive(Debug, Parser)]
#[command(name = "file-server", version)]
pub struct FileServerArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Whether write_file may create new files
    #[arg(long, value_enum)]
    pub write_policy: Option<WritePolicy>,

    /// How delete_file treats directories
    #[arg(long, value_enum)]
    pub delete_policy: Option<DeletePolicy>,
}

impl FileServerArgs {
    pub fn config(&self) -> Result<AppConfig> {
        let mut config = self.common.load_config()?;
        if let Some(write) = self.write_policy {
            config.files.write = write;
        }
        if let Some(delete) = self.delete_policy {
            config.files.delete = delete;
        }
        Ok(config)
    }
}

/// MCP server running shell commands over stdio.
#[derive(Debug, Parser)]
#[command(name = "shell-server", version)]
pub struct ShellServerArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Command timeout in seconds
    #[arg(long, short)]
    pub timeout: Option<u64>,

    /// Program used to run command lines
    #[arg(long)]
    pub shell: Option<String>,
}

impl ShellServerArgs {
    pub fn config(&self) -> Result<AppConfig> {
        let mut config = self.common.load_config()?;
        if let Some(timeout) = self.timeout {
            config.commands.timeouts.default = timeout;
        }
        if let Some(shell) = &self.shell {
            config.commands.shell = shell.clone();
        }
        Ok(config)
    }
}

/// Where a client finds its server.
#[derive(Debug, Clone, Args)]
pub struct ServerTarget {
    /// Server binary to start (defaults to the sibling binary of this executable)
    #[arg(long)]
    pub server: Option<PathBuf>,

    /// Extra argument for the server, repeatable
    #[arg(long = "server-arg", allow_hyphen_values = true)]
    pub server_args: Vec<String>,
}

impl ServerTarget {
    /// Resolves the server binary, falling back to `<dir of current exe>/<default_name>`.
    pub fn resolve(&self, default_name: &str) -> Result<PathBuf> {
        if let Some(server) = &self.server {
            return Ok(server.clone());
        }
        let exe = std::env::current_exe().context("Failed to locate current executable")?;
        let mut path = exe.with_file_name(default_name);
        if cfg!(target_os = "windows") {
            path.set_extension("exe");
        }
        Ok(path)
    }
}

/// Calls the file-server tools.
#[derive(Debug, Parser)]
#[command(name = "file-client", version)]
pub struct FileClientArgs {
    #[command(flatten)]
    pub target: ServerTarget,

    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub action: FileAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FileAction {
    /// List a directory
    List { path: String },
    /// Print a file
    Read { path: String },
    /// Write content to a file
    Write { path: String, content: String },
    /// Delete a file or directory
    Delete { path: String },
    /// Show the tools the server offers
    Tools,
}

/// Calls the unix-shell tool. Without a command, runs a short demo sequence.
#[derive(Debug, Parser)]
#[command(name = "shell-client", version)]
pub struct ShellClientArgs {
    #[command(flatten)]
    pub target: ServerTarget,

    #[arg(long)]
    pub log_level: Option<String>,

    /// Command lines to execute, one tool call each
    pub commands: Vec<String>,
}
