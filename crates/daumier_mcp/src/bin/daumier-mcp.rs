//! Daumier MCP server binary.

use anyhow::Result;
use daumier_core::Credentials;
use daumier_mcp::{McpServer, ToolRegistry};
use daumier_workflow::NewsMemeWorkflow;
use std::sync::Arc;
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean for the JSON-RPC stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Daumier MCP server");

    let credentials = Credentials::from_env()?;
    let workflow = Arc::new(NewsMemeWorkflow::new(&credentials));

    let server = McpServer::builder()
        .name("daumier")
        .version(env!("CARGO_PKG_VERSION"))
        .tools(ToolRegistry::for_workflow(workflow))
        .build()?;

    tracing::info!("Server ready, listening on stdio");
    server.run_stdio().await?;

    Ok(())
}
