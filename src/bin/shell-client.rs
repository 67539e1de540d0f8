// Starts the shell server and runs command lines through it.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use mcp_toolbox::application::logging;
use mcp_toolbox::domain::config::LoggingConfig;
use mcp_toolbox::interface::cli::ShellClientArgs;
use mcp_toolbox::{McpClient, ShellClient};

/// Run when no command is given on the command line.
const DEMO_COMMANDS: &[&str] = &["ls -l ./", "df -h", "cat /etc/hostname", "cat -n missing.cpp"];

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = ShellClientArgs::parse();
    let mut log_config = LoggingConfig::default();
    if let Some(level) = &args.log_level {
        log_config.level = level.clone();
    }
    let _guard = logging::init(&log_config)?;

    let commands: Vec<String> = if args.commands.is_empty() {
        DEMO_COMMANDS.iter().map(|c| c.to_string()).collect()
    } else {
        args.commands.clone()
    };

    let server = args.target.resolve("shell-server")?;
    let client = ShellClient::new(McpClient::spawn(&server, &args.target.server_args).await?);

    let mut code = ExitCode::SUCCESS;
    for command in &commands {
        let outcome = client.execute_command(command).await?;
        println!("Execute Command Result ({command}): {outcome}");
        if !outcome.ok {
            code = ExitCode::FAILURE;
        }
    }

    client.close().await?;
    Ok(code)
}
