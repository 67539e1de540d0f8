//! # MCP Module
//!
//! Model Context Protocol plumbing.
//! Includes the tool servers and the client used to call them.

pub mod client;
pub mod tools;

pub use client::{FileClient, McpClient, ShellClient};
pub use tools::{FileServer, ShellServer};
