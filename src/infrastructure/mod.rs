//! # Infrastructure Layer
//!
//! Handles interactions with external systems: the host filesystem, the system shell
//! and the MCP transport. Implements the traits defined in the Domain layer.

pub mod fs;
pub mod mcp;
pub mod shell;

#[cfg(test)]
pub mod memory;
