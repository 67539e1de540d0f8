//! # Shell Runner
//!
//! Runs one command line through the system shell and captures its output.
//! The command is passed verbatim; the caller is fully trusted.

use std::process::Stdio;
use std::time::Duration;

use crate::domain::error::ToolError;

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Flag that makes `shell` run the next argument as a command line.
///
/// Chosen from the program name, so `bash` on Windows still gets `-c`.
fn command_flag(shell: &str) -> &'static str {
    let name = shell
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(shell)
        .to_ascii_lowercase();
    let name = name.strip_suffix(".exe").unwrap_or(&name);
    match name {
        "cmd" => "/C",
        "powershell" | "pwsh" => "-Command",
        _ => "-c",
    }
}

#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    timeout: Duration,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>, timeout: Duration) -> Self {
        Self {
            shell: shell.into(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn build(&self, command: &str) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.shell);
        cmd.args([command_flag(&self.shell), command]);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        // Dropping the pending future on timeout kills the child.
        cmd.kill_on_drop(true);
        cmd
    }

    /// Runs `command` to completion. A non-zero exit status is not an error.
    pub async fn run(&self, command: &str) -> Result<CommandOutput, ToolError> {
        let child = self.build(command).spawn().map_err(ToolError::Spawn)?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(ToolError::Wait)?,
            Err(_) => {
                tracing::warn!("Command timed out after {:?}: {}", self.timeout, command);
                return Err(ToolError::Timeout {
                    command: command.to_string(),
                    timeout: self.timeout,
                });
            }
        };

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
