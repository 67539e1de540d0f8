// MCP shell server on stdio.

use anyhow::Result;
use clap::Parser;

use mcp_toolbox::application::logging;
use mcp_toolbox::infrastructure::mcp::tools::SHELL_SERVER_NAME;
use mcp_toolbox::interface::cli::ShellServerArgs;
use mcp_toolbox::interface::serve::serve_stdio;
use mcp_toolbox::{CommandExecutor, ShellServer};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ShellServerArgs::parse();
    let config = args.config()?;
    let _guard = logging::init(&config.logging)?;

    tracing::info!(
        "shell {}, timeout {}s",
        config.commands.shell,
        config.commands.timeouts.default
    );

    let server = ShellServer::new(CommandExecutor::from_config(&config.commands));
    serve_stdio(server, SHELL_SERVER_NAME).await
}
