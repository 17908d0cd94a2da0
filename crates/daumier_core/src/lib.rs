//! Core data types for the Daumier news-meme library.
//!
//! This crate provides the foundation data types shared across the Daumier
//! workspace. All entities are transient: created at the start of a single
//! request/response cycle and discarded at its end.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod caption;
mod config;
mod meme;
mod request;
mod template;

pub use article::NewsArticle;
pub use caption::CaptionDraft;
pub use config::Credentials;
pub use meme::{MemeResult, NewsMeme};
pub use request::WorkflowRequest;
pub use template::TemplateRef;
