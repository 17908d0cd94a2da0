//! Daumier REST server binary.

use daumier_core::Credentials;
use daumier_error::DaumierResult;
use daumier_workflow::NewsMemeWorkflow;
use std::sync::Arc;
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() -> DaumierResult<()> {
    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Daumier REST server");

    let credentials = Credentials::from_env()?;
    let workflow = Arc::new(NewsMemeWorkflow::new(&credentials));

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    daumier_server::serve(workflow, &bind_address).await?;

    Ok(())
}
