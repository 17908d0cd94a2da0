//! REST facade for the Daumier news-to-meme workflow.
//!
//! Exposes the five operations over plain HTTP for callers that do not
//! speak MCP. All operation endpoints return the shared response envelope;
//! transport-level statuses only signal malformed requests or server
//! faults.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{router, AppState};

use daumier_error::{ServerError, ServerErrorKind};
use daumier_workflow::NewsMemeWorkflow;
use std::sync::Arc;
use tracing::info;

/// Binds the listener and serves the router until shutdown.
pub async fn serve(workflow: Arc<NewsMemeWorkflow>, bind_address: &str) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Startup(format!(
                "failed to bind {bind_address}: {e}"
            )))
        })?;

    info!(address = %bind_address, "REST server listening");

    axum::serve(listener, router(workflow))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Internal(e.to_string())))
}
