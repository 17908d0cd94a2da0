//! Error types for the Daumier library.
//!
//! This crate provides the foundation error types used throughout the Daumier
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use daumier_error::{ConfigError, DaumierResult};
//!
//! fn load_settings() -> DaumierResult<String> {
//!     Err(ConfigError::new("Missing required field"))?
//! }
//!
//! match load_settings() {
//!     Ok(settings) => println!("Got: {}", settings),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod caption;
mod config;
mod error;
mod news;
mod render;
mod server;
mod template;
mod workflow;

pub use caption::{CaptionError, CaptionErrorKind};
pub use config::ConfigError;
pub use error::{DaumierError, DaumierErrorKind, DaumierResult};
pub use news::{NewsError, NewsErrorKind};
pub use render::{RenderError, RenderErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
pub use workflow::{WorkflowError, WorkflowErrorKind};
