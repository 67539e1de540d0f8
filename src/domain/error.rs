//! # Tool Errors
//!
//! Typed failures of the tool operations. They only become text at the protocol
//! boundary, through [`ToolError::render`].

use crate::domain::types::EntryKind;
use std::io;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Path must be absolute: {0}")]
    InvalidPath(String),

    #[error("Path does not exist: {0}")]
    NotFound(String),

    #[error("Path is not a {expected}: {path}")]
    WrongKind { path: String, expected: EntryKind },

    #[error("Failed to {action} {path}: {source}")]
    OsFailure {
        action: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// The shell could not be started.
    #[error("{0}")]
    Spawn(#[source] io::Error),

    /// The shell started but its output could not be collected.
    #[error("{0}")]
    Wait(#[source] io::Error),

    #[error("Command '{command}' timed out after {} seconds", .timeout.as_secs())]
    Timeout { command: String, timeout: Duration },
}

impl ToolError {
    pub fn os(action: &'static str, path: impl Into<String>, source: io::Error) -> Self {
        ToolError::OsFailure {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn is_process_failure(&self) -> bool {
        matches!(
            self,
            ToolError::Spawn(_) | ToolError::Wait(_) | ToolError::Timeout { .. }
        )
    }

    /// Text sent back to the caller for this failure.
    pub fn render(&self) -> String {
        if self.is_process_failure() {
            format!("Command execution failed: {self}")
        } else {
            format!("Error: {self}")
        }
    }
}
