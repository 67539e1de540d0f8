//! # Application Layer
//!
//! Contains the tool logic that runs behind the protocol boundary:
//! file operations, command execution and process-wide logging setup.

pub mod commands;
pub mod files;
pub mod logging;
