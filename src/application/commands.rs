//! # Command Execution
//!
//! The `execute_command` tool. Output of any completed command, including one with a
//! non-zero exit status, is a success; only spawn failures and timeouts are errors.

use crate::domain::config::CommandsConfig;
use crate::domain::error::ToolError;
use crate::infrastructure::shell::ShellRunner;

pub const OUTPUT_LABEL: &str = "Command output: ";

#[derive(Debug, Clone)]
pub struct CommandExecutor {
    runner: ShellRunner,
}

impl CommandExecutor {
    pub fn new(runner: ShellRunner) -> Self {
        Self { runner }
    }

    pub fn from_config(config: &CommandsConfig) -> Self {
        Self::new(ShellRunner::new(
            config.shell.clone(),
            config.timeouts.as_duration(),
        ))
    }

    pub fn runner(&self) -> &ShellRunner {
        &self.runner
    }

    pub async fn execute_command(&self, command: &str) -> Result<String, ToolError> {
        tracing::info!("Executing command: {} in shell.", command);
        let output = self.runner.run(command).await?;
        if output.exit_code != Some(0) {
            tracing::debug!("Command exited with {:?}: {}", output.exit_code, command);
        }
        Ok(format!("{OUTPUT_LABEL}{}", output.combined()))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::config::TimeoutConfig;
    use std::time::{Duration, Instant};

    fn executor(timeout: u64) -> CommandExecutor {
        CommandExecutor::from_config(&CommandsConfig {
            shell: "sh".to_string(),
            timeouts: TimeoutConfig { default: timeout },
        })
    }

    #[tokio::test]
    async fn test_echo() {
        let out = executor(30).execute_command("echo hello").await.unwrap();
        assert_eq!(out, "Command output: hello\n");
    }

    #[tokio::test]
    async fn test_exit_code_is_not_failure() {
        let out = executor(30).execute_command("exit 1").await.unwrap();
        assert_eq!(out, "Command output: ");
    }

    #[tokio::test]
    async fn test_stderr_is_appended() {
        let out = executor(30)
            .execute_command("cat /definitely/not/here")
            .await
            .unwrap();
        assert!(out.starts_with(OUTPUT_LABEL));
        assert!(out.contains("/definitely/not/here"));
    }

    #[tokio::test]
    async fn test_timeout_is_failure() {
        let started = Instant::now();
        let err = executor(1).execute_command("sleep 60").await.unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(10));
        assert!(
            err.render()
                .starts_with("Command execution failed: Command 'sleep 60' timed out after 1 seconds")
        );
    }

    #[test]
    fn test_default_timeout() {
        let executor = CommandExecutor::from_config(&CommandsConfig::default());
        assert_eq!(executor.runner().timeout(), Duration::from_secs(30));
    }
}
