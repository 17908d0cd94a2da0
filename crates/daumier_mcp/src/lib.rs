//! Model Context Protocol (MCP) server for Daumier.
//!
//! This crate exposes the news-to-meme workflow as standardized tools an
//! LLM client can call over stdio: fetch news, list templates, generate a
//! caption, render a meme, or run the whole pipeline in one call.
//!
//! # Usage
//!
//! ```no_run
//! use daumier_core::Credentials;
//! use daumier_mcp::{McpServer, ToolRegistry};
//! use daumier_workflow::NewsMemeWorkflow;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let credentials = Credentials::from_env()?;
//!     let workflow = Arc::new(NewsMemeWorkflow::new(&credentials));
//!
//!     let server = McpServer::builder()
//!         .name("daumier")
//!         .version(env!("CARGO_PKG_VERSION"))
//!         .tools(ToolRegistry::for_workflow(workflow))
//!         .build()?;
//!     server.run_stdio().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::{McpServer, McpServerBuilder, PROTOCOL_VERSION};
pub use tools::{
    CreateMemeTool, FetchNewsTool, GenerateCaptionTool, GenerateNewsMemeTool, GetTemplatesTool,
    McpTool, ServerInfoTool, ToolRegistry,
};
