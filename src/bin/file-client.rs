// Starts the file server and calls one of its tools.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use mcp_toolbox::application::logging;
use mcp_toolbox::domain::config::LoggingConfig;
use mcp_toolbox::interface::cli::{FileAction, FileClientArgs};
use mcp_toolbox::{FileClient, McpClient, ToolOutcome};

fn report(label: &str, outcome: &ToolOutcome) -> ExitCode {
    println!("{label}: {outcome}");
    if outcome.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = FileClientArgs::parse();
    let mut log_config = LoggingConfig::default();
    if let Some(level) = &args.log_level {
        log_config.level = level.clone();
    }
    let _guard = logging::init(&log_config)?;

    let server = args.target.resolve("file-server")?;
    let client = FileClient::new(McpClient::spawn(&server, &args.target.server_args).await?);

    let code = match &args.action {
        FileAction::List { path } => report("List Files Result", &client.list_files(path).await?),
        FileAction::Read { path } => report("Read File Result", &client.read_file(path).await?),
        FileAction::Write { path, content } => report(
            "Write File Result",
            &client.write_file(path, content).await?,
        ),
        FileAction::Delete { path } => {
            report("Delete File Result", &client.delete_file(path).await?)
        }
        FileAction::Tools => {
            for tool in client.session().list_tools().await? {
                println!(
                    "{}: {}",
                    tool.name,
                    tool.description.as_deref().unwrap_or_default()
                );
            }
            ExitCode::SUCCESS
        }
    };

    client.close().await?;
    Ok(code)
}
