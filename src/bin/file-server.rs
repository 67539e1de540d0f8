// MCP file server on stdio.

use anyhow::Result;
use clap::Parser;

use mcp_toolbox::application::logging;
use mcp_toolbox::infrastructure::mcp::tools::FILE_SERVER_NAME;
use mcp_toolbox::interface::cli::FileServerArgs;
use mcp_toolbox::interface::serve::serve_stdio;
use mcp_toolbox::{FileOperations, FileServer, LocalFileSystem};

#[tokio::main]
async fn main() -> Result<()> {
    let args = FileServerArgs::parse();
    let config = args.config()?;
    let _guard = logging::init(&config.logging)?;

    tracing::info!(
        "write policy {:?}, delete policy {:?}",
        config.files.write,
        config.files.delete
    );

    let server = FileServer::new(FileOperations::new(LocalFileSystem, config.files));
    serve_stdio(server, FILE_SERVER_NAME).await
}
