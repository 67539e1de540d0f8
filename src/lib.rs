//! # MCP Toolbox
//!
//! Filesystem and shell operations exposed as MCP tools:
//! - Domain: configuration, path validation, errors and types
//! - Infrastructure: host filesystem, shell runner, MCP servers and client
//! - Application: the tool operations and logging setup
//! - Interface: command-line parsing and the stdio server loop

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::commands::CommandExecutor;
pub use application::files::FileOperations;
pub use domain::config::AppConfig;
pub use domain::error::ToolError;
pub use domain::types::{EntryKind, EntrySize, FileEntry, ToolOutcome};
pub use infrastructure::fs::LocalFileSystem;
pub use infrastructure::mcp::{FileClient, FileServer, McpClient, ShellClient, ShellServer};
